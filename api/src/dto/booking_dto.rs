use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rems_core::domain::entities::booking::BookingStatus;

/// Body for POST /api/v1/bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub property_id: Uuid,
    pub visit_date: NaiveDate,
}

/// Body for PUT /api/v1/bookings/{id}/status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}
