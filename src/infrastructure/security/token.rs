// src/infrastructure/security/token.rs
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::security::SessionVerifier,
    },
    domain::session::Session,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, PublicKey,
    builder::{Algorithm, AuthorizerBuilder},
};

/// Verifies biscuit tokens minted by the auth provider. Only the root public
/// key is known here; tokens are never issued by this service.
#[derive(Clone)]
pub struct BiscuitSessionVerifier {
    public: PublicKey,
}

impl BiscuitSessionVerifier {
    pub fn new(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { public })
    }
}

#[async_trait]
impl SessionVerifier for BiscuitSessionVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<Session> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // Token caveats (expiry among them) are enforced by authorize().
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        Ok(crate::infrastructure::security::claims::parse_session(facts))
    }
}
