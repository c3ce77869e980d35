//! Repository abstractions over the durable store.
//!
//! Each entity gets an async trait plus an in-memory mock used by unit and
//! integration tests. Concrete SQL implementations live in `rems_infra`.

pub mod booking;
pub mod favorite;
pub mod property;
pub mod user;

pub use booking::BookingRepository;
pub use favorite::FavoriteRepository;
pub use property::PropertyRepository;
pub use user::UserRepository;
