//! Saved-listing use cases.

mod service;

pub use service::FavoriteService;
