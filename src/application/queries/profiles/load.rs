use super::ProfileQueryService;
use crate::{
    application::{
        dto::LoadResult,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        profile::ProfileStore,
        session::{Identity, Session},
    },
};

impl ProfileQueryService {
    /// Load the caller's own profile.
    ///
    /// Anonymous callers get `{ profile: null }` without touching the store.
    /// Otherwise exactly one `fetch_single` is issued against `store`, which
    /// must already be scoped to the caller. Store failures are returned
    /// without retry.
    #[tracing::instrument(skip_all, fields(user_id = tracing::field::Empty))]
    pub async fn load(
        &self,
        session: Option<&Session>,
        store: &dyn ProfileStore,
    ) -> ApplicationResult<LoadResult> {
        let user_id = match Identity::resolve(session) {
            Identity::Anonymous => {
                tracing::debug!("no identity on request, skipping profile lookup");
                return Ok(LoadResult::anonymous());
            }
            Identity::User(id) => id,
        };
        tracing::Span::current().record("user_id", user_id.as_str());

        match store.fetch_single(&user_id).await {
            Ok(profile) if profile.id() == &user_id => Ok(LoadResult::loaded(profile)),
            Ok(profile) => {
                tracing::error!(returned = %profile.id(), "store returned another user's profile");
                Err(ApplicationError::infrastructure(
                    "profile lookup returned a record for a different user",
                ))
            }
            Err(err) => {
                match &err {
                    DomainError::NotSingleRow { matched } if *matched > 1 => {
                        tracing::error!(matched = *matched, "profile uniqueness violated");
                    }
                    _ => tracing::warn!(error = %err, "profile lookup failed"),
                }
                Err(ApplicationError::from(err))
            }
        }
    }
}
