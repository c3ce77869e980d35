//! Domain services.

pub mod auth;
pub mod authorization;
pub mod booking;
pub mod favorite;
pub mod password;
pub mod property;
pub mod token;
pub mod user;
