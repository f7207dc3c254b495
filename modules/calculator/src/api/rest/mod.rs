//! REST API for the calculator module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
