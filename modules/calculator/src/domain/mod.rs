//! Calculator domain layer.

pub mod error;
pub mod operation;
pub mod service;

pub use error::DomainError;
pub use operation::Operation;
pub use service::Service;
