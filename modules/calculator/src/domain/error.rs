//! Domain errors for calculator operations.
//!
//! `Display` strings are the caller-visible messages and must not
//! change: the REST layer surfaces them verbatim in 400 responses.

use thiserror::Error;

/// Failure of an arithmetic operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Divisor compared equal to zero (covers `-0.0`).
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Square-root input was strictly negative.
    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,
}

impl DomainError {
    /// Whether this is a recognized invalid-input kind.
    ///
    /// The REST layer surfaces the message of recognized kinds to the
    /// caller as 400; anything else maps to a generic 500. Today every
    /// variant is a recognized kind, so the 500 path has no trigger,
    /// but the classification is the contract the mapping is built on.
    #[must_use]
    pub fn is_domain_violation(&self) -> bool {
        matches!(
            self,
            DomainError::DivisionByZero | DomainError::NegativeSquareRoot
        )
    }
}
