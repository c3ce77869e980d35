//! Database access.

pub mod connection;
pub mod mysql;

pub use connection::connect;
