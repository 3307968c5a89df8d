// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    domain::{
        profile::{ProfileStore, StoreScope},
        session::{Identity, Session},
    },
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::sync::Arc;

use super::error::HttpError;

/// Per-request view handed to loaders: the verified session, if any, and a
/// store handle scoped to that session's identity.
#[derive(Clone)]
pub struct RequestLocals {
    pub session: Option<Session>,
    pub store: Arc<dyn ProfileStore>,
}

impl<S> FromRequestParts<S> for RequestLocals
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        // An unverifiable credential is treated the same as no credential.
        let session = match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => {
                let verifier = app_state.services.session_verifier();
                match verifier.verify(header.token()).await {
                    Ok(session) => Some(session),
                    Err(err) => {
                        tracing::debug!(error = %err, "ignoring unverifiable session token");
                        None
                    }
                }
            }
            None => None,
        };

        let identity = Identity::resolve(session.as_ref());
        let store = app_state
            .services
            .scoped_store(StoreScope::from(&identity));

        Ok(Self { session, store })
    }
}
