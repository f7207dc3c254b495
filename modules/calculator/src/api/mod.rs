//! Transport-facing API layers for the calculator module.

pub mod rest;
