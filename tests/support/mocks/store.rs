// tests/support/mocks/store.rs
use async_trait::async_trait;
use private_profile::domain::{
    errors::{DomainError, DomainResult},
    profile::{Profile, ProfileStore, ProfileStoreProvider, StoreScope, UserId},
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub enum StoreBehavior {
    Rows(Vec<Profile>),
    PermissionDenied,
    Unavailable,
}

/// In-memory `profiles` collection that records every lookup it serves.
#[derive(Debug)]
pub struct InMemoryProfileStore {
    behavior: StoreBehavior,
    lookups: Mutex<Vec<String>>,
}

impl InMemoryProfileStore {
    pub fn new(behavior: StoreBehavior) -> Self {
        Self {
            behavior,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_rows(rows: Vec<Profile>) -> Self {
        Self::new(StoreBehavior::Rows(rows))
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn fetch_single(&self, id: &UserId) -> DomainResult<Profile> {
        self.lookups.lock().unwrap().push(id.to_string());
        match &self.behavior {
            StoreBehavior::Rows(rows) => {
                let matched: Vec<&Profile> = rows.iter().filter(|p| p.id() == id).collect();
                match matched.as_slice() {
                    [single] => Ok((*single).clone()),
                    other => Err(DomainError::NotSingleRow {
                        matched: other.len(),
                    }),
                }
            }
            StoreBehavior::PermissionDenied => Err(DomainError::PermissionDenied(
                "permission denied for table profiles".into(),
            )),
            StoreBehavior::Unavailable => {
                Err(DomainError::Persistence("connection refused".into()))
            }
        }
    }
}

/// Hands out the same store for every scope and remembers which scopes were
/// requested.
pub struct InMemoryStoreProvider {
    store: Arc<InMemoryProfileStore>,
    scopes: Mutex<Vec<StoreScope>>,
}

impl InMemoryStoreProvider {
    pub fn new(store: Arc<InMemoryProfileStore>) -> Self {
        Self {
            store,
            scopes: Mutex::new(Vec::new()),
        }
    }

    pub fn scopes(&self) -> Vec<StoreScope> {
        self.scopes.lock().unwrap().clone()
    }
}

impl ProfileStoreProvider for InMemoryStoreProvider {
    fn scoped(&self, scope: StoreScope) -> Arc<dyn ProfileStore> {
        self.scopes.lock().unwrap().push(scope);
        self.store.clone()
    }
}
