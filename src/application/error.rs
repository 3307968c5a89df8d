// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotSingleRow { matched: 0 } => Self::not_found("profile not found"),
            DomainError::NotSingleRow { matched } => Self::infrastructure(format!(
                "profile lookup matched {matched} rows, expected exactly one"
            )),
            DomainError::PermissionDenied(msg) => Self::forbidden(msg),
            // Domain errors reach this layer from the store, so malformed data
            // is a server fault.
            DomainError::Persistence(msg) | DomainError::Validation(msg) => {
                Self::infrastructure(msg)
            }
        }
    }
}
