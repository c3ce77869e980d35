//! Account administration use cases.

mod service;

pub use service::{UserService, UserUpdate};
