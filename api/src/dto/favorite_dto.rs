use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for POST /api/v1/favorites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    pub property_id: Uuid,
}
