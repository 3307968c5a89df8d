// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// The store was asked for exactly one row and matched a different number.
    #[error("expected exactly one row, matched {matched}")]
    NotSingleRow { matched: usize },
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
