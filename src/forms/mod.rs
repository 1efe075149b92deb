//! Request payloads accepted by the customer routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod customer;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    #[error("page must be greater than zero")]
    InvalidPage,

    #[error("page is out of range")]
    PageOutOfRange,

    #[error("perPage must be between 1 and {0}")]
    InvalidPerPage(usize),
}
