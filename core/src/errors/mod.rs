//! Domain-specific error types for verification and email flows
//!
//! Every error a service can surface maps to exactly one HTTP status at the
//! request boundary; the mapping itself lives in the API layer.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// A required request field is missing or empty (400)
    #[error("Missing required field: {field}")]
    Validation { field: String },

    /// No record exists for the presented token (404)
    #[error("Verification token not found")]
    TokenNotFound,

    /// The token passed its TTL; the record is evicted on detection (410)
    #[error("Verification token expired")]
    TokenExpired,

    /// The token was already consumed (400)
    #[error("Email already verified")]
    AlreadyVerified,

    /// The mail provider failed; carries the provider detail for diagnostics (500)
    #[error("Email delivery failed: {message}")]
    Delivery { message: String },
}

impl DomainError {
    /// Convenience constructor for missing-field errors
    pub fn missing_field(field: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
