//! Value objects returned by services.

pub mod auth_outcome;

pub use auth_outcome::AuthOutcome;
