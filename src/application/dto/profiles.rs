use crate::domain::profile::Profile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a private profile load. `profile` is `null` for anonymous callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoadResult {
    #[schema(value_type = Option<Object>, example = json!({ "id": "u1", "name": "Alice" }))]
    pub profile: Option<Profile>,
}

impl LoadResult {
    pub fn anonymous() -> Self {
        Self { profile: None }
    }

    pub fn loaded(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
        }
    }
}
