//! Domain service for the calculator.
//!
//! Seven pure operations over f64. The service is stateless; every
//! method is deterministic and safe to call concurrently without
//! synchronization. Arithmetic follows IEEE 754 double precision with
//! no extra rounding or precision guarantees.

use tracing::debug;

use super::error::DomainError;

/// Stateless domain service implementing the operation library.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers.
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        let result = a + b;
        debug!(a, b, result, "performing addition");
        result
    }

    /// Subtract the second number from the first.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        let result = a - b;
        debug!(a, b, result, "performing subtraction");
        result
    }

    /// Multiply two numbers.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        let result = a * b;
        debug!(a, b, result, "performing multiplication");
        result
    }

    /// Divide the first number by the second.
    ///
    /// # Errors
    /// Returns [`DomainError::DivisionByZero`] when `b` compares equal
    /// to zero. Numeric equality deliberately covers `-0.0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        if b == 0.0 {
            debug!(a, "division by zero attempted");
            return Err(DomainError::DivisionByZero);
        }
        let result = a / b;
        debug!(a, b, result, "performing division");
        Ok(result)
    }

    /// Raise the first number to the power of the second.
    ///
    /// `powf` semantics apply: `power(0, 0) == 1`, and negative bases
    /// with fractional exponents yield NaN rather than an error.
    #[must_use]
    pub fn power(&self, a: f64, b: f64) -> f64 {
        let result = a.powf(b);
        debug!(a, b, result, "performing exponentiation");
        result
    }

    /// Calculate the non-negative square root of a number.
    ///
    /// # Errors
    /// Returns [`DomainError::NegativeSquareRoot`] when `a` is
    /// strictly negative. Zero succeeds.
    pub fn square_root(&self, a: f64) -> Result<f64, DomainError> {
        if a < 0.0 {
            debug!(a, "square root of negative number attempted");
            return Err(DomainError::NegativeSquareRoot);
        }
        let result = a.sqrt();
        debug!(a, result, "performing square root");
        Ok(result)
    }

    /// Calculate `b` percent of `a`.
    #[must_use]
    pub fn percentage(&self, a: f64, b: f64) -> f64 {
        let result = (a * b) / 100.0;
        debug!(a, b, result, "performing percentage");
        result
    }
}
