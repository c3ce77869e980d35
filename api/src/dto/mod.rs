//! Request and response payloads.

use std::collections::HashSet;

use rems_core::domain::entities::user::Role;

pub mod auth_dto;
pub mod booking_dto;
pub mod error_dto;
pub mod favorite_dto;
pub mod property_dto;
pub mod user_dto;

pub use error_dto::ErrorResponse;

/// Parses role tags from a request body, rejecting unknown ones.
pub(crate) fn parse_role_tags(tags: &[String]) -> Result<HashSet<Role>, String> {
    let mut roles = HashSet::new();
    for tag in tags {
        match Role::parse(tag) {
            Some(role) => {
                roles.insert(role);
            }
            None => return Err(format!("unknown role: {}", tag)),
        }
    }
    Ok(roles)
}
