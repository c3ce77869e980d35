//! Route handlers.

pub mod auth;
pub mod bookings;
pub mod favorites;
pub mod properties;
pub mod users;
