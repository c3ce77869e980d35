//! Stateless JWT token service.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;

#[cfg(test)]
mod tests;
