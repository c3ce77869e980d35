//! Property listing entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a listing is offered for rent or for purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Rent,
    Buy,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Rent => "rent",
            PropertyType::Buy => "buy",
        }
    }

    pub fn parse(value: &str) -> Option<PropertyType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rent" => Some(PropertyType::Rent),
            "buy" => Some(PropertyType::Buy),
            _ => None,
        }
    }
}

/// A property listing owned by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier
    pub id: Uuid,

    /// The agent who created and owns this listing
    pub agent_id: Uuid,

    pub title: String,

    pub description: Option<String>,

    pub price: f64,

    pub location: String,

    pub property_type: PropertyType,

    /// Image URLs for the listing
    pub images: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Creates a new listing owned by `agent_id`.
    pub fn new(
        agent_id: Uuid,
        title: String,
        description: Option<String>,
        price: f64,
        location: String,
        property_type: PropertyType,
        images: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            agent_id,
            title,
            description,
            price,
            location,
            property_type,
            images,
            created_at: Utc::now(),
        }
    }

    /// Applies a partial update; unset fields are left untouched.
    pub fn apply_update(&mut self, update: PropertyUpdate) {
        if let Some(title) = update.title {
            if !title.is_empty() {
                self.title = title;
            }
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(location) = update.location {
            if !location.is_empty() {
                self.location = location;
            }
        }
        if let Some(property_type) = update.property_type {
            self.property_type = property_type;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
    }
}

/// Partial update for a listing. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub property_type: Option<PropertyType>,
    pub images: Option<Vec<String>>,
}

/// Search filter for the public listing endpoint. All criteria are optional
/// and combined with AND.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    /// Substring match against title and location
    pub text: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_type: Option<PropertyType>,
}

impl PropertyFilter {
    /// True when no criterion is set, i.e. the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.property_type.is_none()
    }

    /// Evaluates the filter against a listing.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(ref text) = self.text {
            let needle = text.to_ascii_lowercase();
            let in_title = property.title.to_ascii_lowercase().contains(&needle);
            let in_location = property.location.to_ascii_lowercase().contains(&needle);
            if !in_title && !in_location {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if property.property_type != property_type {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, price: f64, property_type: PropertyType) -> Property {
        Property::new(
            Uuid::new_v4(),
            title.to_string(),
            None,
            price,
            "Springfield".to_string(),
            property_type,
            Vec::new(),
        )
    }

    #[test]
    fn apply_update_changes_only_provided_fields() {
        let mut property = listing("Cottage", 250_000.0, PropertyType::Buy);
        let original_location = property.location.clone();

        property.apply_update(PropertyUpdate {
            price: Some(240_000.0),
            ..Default::default()
        });

        assert_eq!(property.price, 240_000.0);
        assert_eq!(property.title, "Cottage");
        assert_eq!(property.location, original_location);
    }

    #[test]
    fn apply_update_ignores_empty_title() {
        let mut property = listing("Cottage", 1000.0, PropertyType::Rent);
        property.apply_update(PropertyUpdate {
            title: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(property.title, "Cottage");
    }

    #[test]
    fn filter_combines_criteria() {
        let property = listing("Downtown Loft", 1800.0, PropertyType::Rent);

        let mut filter = PropertyFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&property));

        filter.text = Some("loft".to_string());
        filter.min_price = Some(1000.0);
        filter.max_price = Some(2000.0);
        filter.property_type = Some(PropertyType::Rent);
        assert!(filter.matches(&property));

        filter.max_price = Some(1500.0);
        assert!(!filter.matches(&property));
    }

    #[test]
    fn filter_matches_location_text() {
        let property = listing("Cottage", 900.0, PropertyType::Rent);
        let filter = PropertyFilter {
            text: Some("spring".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&property));
    }
}
