//! HTTP API layer.
//!
//! Actix-web application wiring, authentication middleware, request DTOs,
//! and route handlers over the `rems_core` services.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
