//! Property repository abstraction.

pub mod mock;
mod repository;

pub use mock::MockPropertyRepository;
pub use repository::PropertyRepository;
