//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The wallet computation is total over valid input, so failures are limited
/// to malformed input values. An unknown identity or an empty ledger is a normal
/// (empty) result, never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The identity argument was empty or otherwise unusable.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// A transfer amount was negative or not a number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl DomainError {
    pub fn invalid_identity(msg: impl Into<String>) -> Self {
        Self::InvalidIdentity(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }
}
