use crate::{application::ApplicationResult, domain::session::Session};
use async_trait::async_trait;

/// Checks a credential issued by the external auth provider.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> ApplicationResult<Session>;
}
