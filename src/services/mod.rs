//! Business logic sitting between the HTTP routes and the repository.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod customers;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed request input.
    #[error("{0}")]
    Form(String),

    /// A value failed a domain constraint (for example a non-positive id).
    #[error("{0}")]
    TypeConstraint(String),

    /// Another active customer already uses the email.
    #[error("Email already exists")]
    EmailTaken,

    #[error("customer not found")]
    NotFound,

    /// Store failure, reported with the store's own message.
    #[error(transparent)]
    Repository(RepositoryError),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::UniqueViolation(_) => ServiceError::EmailTaken,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
