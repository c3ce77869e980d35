//! Shared configuration and utilities for the REMS backend.
//!
//! This crate holds everything that both the domain layer and the HTTP layer
//! need without depending on each other: configuration structs and input
//! validation helpers.

pub mod config;
pub mod utils;
