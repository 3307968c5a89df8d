use crate::domain::errors::DomainError;

const SQLSTATE_INSUFFICIENT_PRIVILEGE: &str = "42501";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some(SQLSTATE_INSUFFICIENT_PRIVILEGE) {
                return DomainError::PermissionDenied(db_err.message().to_string());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("timed out waiting for a database connection".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
