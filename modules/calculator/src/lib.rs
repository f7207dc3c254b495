//! Calculator module.
//!
//! Two strictly layered parts:
//!
//! - [`domain`]: seven stateless arithmetic operations with typed
//!   domain errors (the operation library).
//! - [`api`]: the REST surface — operand DTOs, one handler per
//!   operation, and the mapping from domain errors to RFC 9457
//!   Problem responses.
//!
//! Handlers assume operands are already valid numbers: the axum JSON
//! extractor rejects missing or non-numeric fields with 422 before
//! any handler logic runs, so only domain constraints (zero divisor,
//! negative square-root input) are checked here.

pub mod api;
pub mod domain;

pub use api::rest::routes::router;
pub use domain::service::Service;
