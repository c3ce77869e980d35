//! Core business logic and domain layer for the REMS backend.
//!
//! This crate contains the domain entities, the error taxonomy, the
//! repository abstractions, and the services that implement the
//! authentication, authorization, and listing/booking use cases. It has no
//! knowledge of HTTP or of any concrete database.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
