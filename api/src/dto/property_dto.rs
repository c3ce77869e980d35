use serde::{Deserialize, Serialize};
use validator::Validate;

use rems_core::domain::entities::property::{PropertyFilter, PropertyType, PropertyUpdate};
use rems_core::services::property::NewProperty;

/// Body for POST /api/v1/properties.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    pub property_type: PropertyType,
    pub images: Option<Vec<String>>,
}

impl From<CreatePropertyRequest> for NewProperty {
    fn from(request: CreatePropertyRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            location: request.location,
            property_type: request.property_type,
            images: request.images.unwrap_or_default(),
        }
    }
}

/// Body for PUT /api/v1/properties/{id}. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    pub property_type: Option<PropertyType>,
    pub images: Option<Vec<String>>,
}

impl From<UpdatePropertyRequest> for PropertyUpdate {
    fn from(request: UpdatePropertyRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            price: request.price,
            location: request.location,
            property_type: request.property_type,
            images: request.images,
        }
    }
}

/// Query string for GET /api/v1/properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyQuery {
    /// Substring match against title and location
    pub q: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_type: Option<PropertyType>,
}

impl From<PropertyQuery> for PropertyFilter {
    fn from(query: PropertyQuery) -> Self {
        Self {
            text: query.q,
            min_price: query.min_price,
            max_price: query.max_price,
            property_type: query.property_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_negative_price() {
        let request = CreatePropertyRequest {
            title: "Cottage".to_string(),
            description: None,
            price: -1.0,
            location: "Springfield".to_string(),
            property_type: PropertyType::Buy,
            images: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn query_maps_to_filter() {
        let query = PropertyQuery {
            q: Some("loft".to_string()),
            min_price: Some(100.0),
            max_price: None,
            property_type: Some(PropertyType::Rent),
        };
        let filter = PropertyFilter::from(query);
        assert_eq!(filter.text.as_deref(), Some("loft"));
        assert!(!filter.is_empty());
    }
}
