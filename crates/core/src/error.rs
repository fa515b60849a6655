//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// A store operation that returns one of these has not changed any state.
/// File and parse failures are not domain errors; see `stockpile-infra`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (empty item name, zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant would have been violated (e.g. quantity overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The named item is not in stock.
    #[error("item '{0}' not found in stock")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }
}
