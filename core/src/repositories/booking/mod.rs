//! Booking repository abstraction.

pub mod mock;
mod repository;

pub use mock::MockBookingRepository;
pub use repository::BookingRepository;
