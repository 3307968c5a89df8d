// tests/support/mocks/security.rs
use async_trait::async_trait;
use private_profile::{
    application::{ApplicationResult, error::ApplicationError, ports::security::SessionVerifier},
    domain::session::{Session, SessionUser},
};

pub const ALICE_TOKEN: &str = "alice-token";
/// Valid session for a user that has no profile row.
pub const GHOST_TOKEN: &str = "ghost-token";
/// Valid session whose user carries no id.
pub const USERLESS_TOKEN: &str = "userless-token";

#[derive(Clone, Debug, Default)]
pub struct FakeSessionVerifier;

#[async_trait]
impl SessionVerifier for FakeSessionVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<Session> {
        let expires_at = Some(super::fixtures::fixed_expiry());
        match token {
            ALICE_TOKEN => Ok(Session {
                expires_at,
                ..Session::for_user("u1")
            }),
            GHOST_TOKEN => Ok(Session {
                expires_at,
                ..Session::for_user("u2")
            }),
            USERLESS_TOKEN => Ok(Session {
                user: Some(SessionUser { id: None }),
                session_id: Some("sid-userless".into()),
                expires_at,
            }),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
