//! Domain entities.

pub mod booking;
pub mod favorite;
pub mod principal;
pub mod property;
pub mod token;
pub mod user;
