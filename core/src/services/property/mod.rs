//! Property listing use cases.

mod service;

pub use service::{NewProperty, PropertyService};
