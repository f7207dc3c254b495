//! Mapping from domain errors to RFC 9457 Problem responses.
//!
//! Recognized invalid-input kinds surface their message verbatim as
//! 400. Anything the domain does not classify as an invalid-input
//! kind must never leak its message: it maps to a generic 500. With
//! the current domain error set the 500 branch has no trigger, which
//! matches the original service, where only divide and square-root
//! had any failure path at all.

use http_problem::{Problem, bad_request, internal_error};

use crate::domain::DomainError;

/// Map a domain error to a Problem, recording the request path as the
/// problem instance.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    if e.is_domain_violation() {
        tracing::warn!(error = %e, instance, "operation rejected");
        bad_request(e.to_string()).with_instance(instance)
    } else {
        tracing::error!(error = ?e, instance, "unexpected operation failure");
        internal_error("Internal server error").with_instance(instance)
    }
}

/// Implement `From<DomainError>` for Problem so `?` works in handlers.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
