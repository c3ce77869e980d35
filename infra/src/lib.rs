//! Infrastructure layer.
//!
//! Concrete implementations of the `rems_core` repository traits backed by
//! MySQL via SQLx, plus connection pool setup.

pub mod database;
