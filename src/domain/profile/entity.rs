// src/domain/profile/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::value_objects::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A row of the `profiles` collection. Only `id` is interpreted; the record
/// itself, `id` column included, is carried through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Profile {
    id: UserId,
    record: Map<String, Value>,
}

impl Profile {
    /// Build a profile from a whole JSON record as returned by the store.
    ///
    /// The `id` column must be a non-empty string or a number; anything else
    /// is a fault in the stored data.
    pub fn from_record(record: Value) -> DomainResult<Self> {
        let Value::Object(record) = record else {
            return Err(DomainError::Persistence(
                "profile record is not a JSON object".into(),
            ));
        };

        let key = match record.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => {
                return Err(DomainError::Persistence(format!(
                    "profile record has an unusable id: {other}"
                )));
            }
            None => {
                return Err(DomainError::Persistence(
                    "profile record has no id column".into(),
                ));
            }
        };
        let id = UserId::new(key).map_err(|_| {
            DomainError::Persistence("profile record has an empty id".into())
        })?;

        Ok(Self { id, record })
    }

    /// Key of the record, in the same form sessions carry user ids.
    pub fn id(&self) -> &UserId {
        &self.id
    }
}

impl TryFrom<Value> for Profile {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_record(value)
    }
}

impl From<Profile> for Value {
    fn from(profile: Profile) -> Self {
        Value::Object(profile.record)
    }
}
