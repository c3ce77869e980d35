//! Favorite (saved listing) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A listing saved by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,

    /// The customer who saved the listing
    pub user_id: Uuid,

    pub property_id: Uuid,

    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, property_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            property_id,
            created_at: Utc::now(),
        }
    }
}
