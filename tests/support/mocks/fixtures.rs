use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use private_profile::domain::profile::Profile;
use serde_json::json;

static FIXED_EXPIRY: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/fixtures.rs")
        .with_timezone(&Utc)
});

pub fn fixed_expiry() -> DateTime<Utc> {
    *FIXED_EXPIRY
}

pub fn alice() -> Profile {
    Profile::from_record(json!({ "id": "u1", "name": "Alice" })).expect("valid profile record")
}
