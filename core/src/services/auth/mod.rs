//! Authentication flow: registration, login, profile.

mod config;
mod service;

pub use config::AuthServiceConfig;
pub use service::AuthService;

#[cfg(test)]
mod tests;
