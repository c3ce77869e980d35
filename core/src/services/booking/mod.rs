//! Visit booking use cases.

mod service;

pub use service::BookingService;
