use std::sync::Arc;

use crate::{
    application::{ports::security::SessionVerifier, queries::profiles::ProfileQueryService},
    domain::profile::{ProfileStore, ProfileStoreProvider, StoreScope},
};

pub struct ApplicationServices {
    pub profile_queries: Arc<ProfileQueryService>,
    session_verifier: Arc<dyn SessionVerifier>,
    store_provider: Arc<dyn ProfileStoreProvider>,
}

impl ApplicationServices {
    pub fn new(
        session_verifier: Arc<dyn SessionVerifier>,
        store_provider: Arc<dyn ProfileStoreProvider>,
    ) -> Self {
        Self {
            profile_queries: Arc::new(ProfileQueryService::new()),
            session_verifier,
            store_provider,
        }
    }

    pub fn session_verifier(&self) -> Arc<dyn SessionVerifier> {
        Arc::clone(&self.session_verifier)
    }

    /// Store handle limited to what `scope` may read.
    pub fn scoped_store(&self, scope: StoreScope) -> Arc<dyn ProfileStore> {
        self.store_provider.scoped(scope)
    }
}
