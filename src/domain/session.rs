// src/domain/session.rs
use crate::domain::profile::UserId;
use chrono::{DateTime, Utc};

/// Verified session as produced by the auth provider. Read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub session_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Option<String>,
}

/// Who a request acts as, resolved once from an optional session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    User(UserId),
}

impl Session {
    pub fn for_user(id: impl Into<String>) -> Self {
        Self {
            user: Some(SessionUser {
                id: Some(id.into()),
            }),
            ..Self::default()
        }
    }

    /// Only a missing or empty user id is anonymous; any other id is opaque.
    pub fn identity(&self) -> Identity {
        self.user
            .as_ref()
            .and_then(|user| user.id.as_deref())
            .and_then(|id| UserId::new(id).ok())
            .map_or(Identity::Anonymous, Identity::User)
    }
}

impl Identity {
    pub fn resolve(session: Option<&Session>) -> Self {
        session.map_or(Identity::Anonymous, Session::identity)
    }
}
