//! MySQL repository implementations.

mod booking_repository;
mod favorite_repository;
mod property_repository;
mod user_repository;

pub use booking_repository::MySqlBookingRepository;
pub use favorite_repository::MySqlFavoriteRepository;
pub use property_repository::MySqlPropertyRepository;
pub use user_repository::MySqlUserRepository;

use rems_core::errors::DomainError;

/// Wraps a SQLx error into the domain database error.
fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("{}: {}", context, err),
    }
}

/// Parses a CHAR(36) column into a Uuid.
fn parse_uuid(value: &str) -> Result<uuid::Uuid, DomainError> {
    uuid::Uuid::parse_str(value).map_err(|e| DomainError::Database {
        message: format!("invalid uuid in row: {}", e),
    })
}
