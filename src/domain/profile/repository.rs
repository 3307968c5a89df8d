use crate::domain::errors::DomainResult;
use crate::domain::profile::{entity::Profile, value_objects::UserId};
use crate::domain::session::Identity;
use async_trait::async_trait;
use std::sync::Arc;

/// Read access to the `profiles` collection, bound to one authorization scope.
///
/// The trait has no write operation.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Select the single profile whose `id` equals `id`.
    ///
    /// Fails with [`DomainError::NotSingleRow`](crate::domain::errors::DomainError::NotSingleRow)
    /// when zero or more than one row match.
    async fn fetch_single(&self, id: &UserId) -> DomainResult<Profile>;
}

/// Which permissions a store handle runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreScope {
    Anonymous,
    User(UserId),
}

impl From<&Identity> for StoreScope {
    fn from(identity: &Identity) -> Self {
        match identity {
            Identity::Anonymous => StoreScope::Anonymous,
            Identity::User(id) => StoreScope::User(id.clone()),
        }
    }
}

/// Hands out store handles restricted to a caller's scope.
pub trait ProfileStoreProvider: Send + Sync {
    fn scoped(&self, scope: StoreScope) -> Arc<dyn ProfileStore>;
}
