// src/infrastructure/repositories/postgres_profile.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::profile::{Profile, ProfileStore, ProfileStoreProvider, StoreScope, UserId};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

const READ_ONLY: &str = "SET TRANSACTION READ ONLY";
const SET_SUBJECT: &str = "SELECT set_config('request.jwt.claim.sub', $1, true)";

// LIMIT 2 is enough to tell "exactly one" from "more than one".
const SELECT_PROFILE: &str = "SELECT to_jsonb(p) FROM profiles p WHERE p.id = $1 LIMIT 2";

/// Database roles a scoped handle switches to before reading. `None` keeps
/// the connection's login role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreRoles {
    pub anonymous: Option<String>,
    pub user: Option<String>,
}

impl StoreRoles {
    fn for_scope(&self, scope: &StoreScope) -> Option<&str> {
        match scope {
            StoreScope::Anonymous => self.anonymous.as_deref(),
            StoreScope::User(_) => self.user.as_deref(),
        }
    }
}

#[derive(Clone)]
pub struct PostgresProfileStoreProvider {
    pool: PgPool,
    roles: StoreRoles,
}

impl PostgresProfileStoreProvider {
    pub fn new(pool: PgPool, roles: StoreRoles) -> Self {
        Self { pool, roles }
    }
}

impl ProfileStoreProvider for PostgresProfileStoreProvider {
    fn scoped(&self, scope: StoreScope) -> Arc<dyn ProfileStore> {
        Arc::new(PostgresProfileStore::new(
            self.pool.clone(),
            self.roles.clone(),
            scope,
        ))
    }
}

/// Reads `profiles` with the permissions of one caller. Row level security
/// policies see the caller through the `request.jwt.claim.sub` setting.
#[derive(Clone)]
pub struct PostgresProfileStore {
    pool: PgPool,
    roles: StoreRoles,
    scope: StoreScope,
}

impl PostgresProfileStore {
    pub fn new(pool: PgPool, roles: StoreRoles, scope: StoreScope) -> Self {
        Self { pool, roles, scope }
    }

    async fn begin_scoped(&self) -> DomainResult<Transaction<'static, Postgres>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for statement in scope_preamble(&self.roles, &self.scope) {
            let mut query = sqlx::query(&statement.sql);
            if let Some(value) = statement.bind.as_deref() {
                query = query.bind(value);
            }
            query.execute(&mut *tx).await.map_err(map_sqlx)?;
        }

        Ok(tx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScopeStatement {
    sql: String,
    bind: Option<String>,
}

impl ScopeStatement {
    fn plain(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            bind: None,
        }
    }
}

/// Statements run at the start of every scoped transaction. The first one
/// makes the transaction read-only, so nothing after it can write.
fn scope_preamble(roles: &StoreRoles, scope: &StoreScope) -> Vec<ScopeStatement> {
    let mut statements = vec![ScopeStatement::plain(READ_ONLY)];

    if let Some(role) = roles.for_scope(scope) {
        statements.push(ScopeStatement::plain(format!(
            "SET LOCAL ROLE {}",
            quote_ident(role)
        )));
    }

    if let StoreScope::User(id) = scope {
        statements.push(ScopeStatement {
            sql: SET_SUBJECT.to_string(),
            bind: Some(id.as_str().to_string()),
        });
    }

    statements
}

#[async_trait]
impl ProfileStore for PostgresProfileStore {
    #[tracing::instrument(skip(self), fields(scope = ?self.scope))]
    async fn fetch_single(&self, id: &UserId) -> DomainResult<Profile> {
        let mut tx = self.begin_scoped().await?;

        let records = sqlx::query_scalar::<_, Value>(SELECT_PROFILE)
            .bind(id.as_str())
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.rollback().await.map_err(map_sqlx)?;

        single_row(records)
    }
}

fn single_row(mut records: Vec<Value>) -> DomainResult<Profile> {
    if records.len() != 1 {
        return Err(DomainError::NotSingleRow {
            matched: records.len(),
        });
    }
    let record = records.remove(0);
    Profile::from_record(record)
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
