//! Property visit booking entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a visit booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<BookingStatus> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(BookingStatus::Pending),
            "approved" => Some(BookingStatus::Approved),
            "rejected" => Some(BookingStatus::Rejected),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A booked property visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,

    /// The property being visited
    pub property_id: Uuid,

    /// The user who booked the visit
    pub user_id: Uuid,

    pub visit_date: NaiveDate,

    pub status: BookingStatus,

    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new pending booking.
    pub fn new(property_id: Uuid, user_id: Uuid, visit_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            property_id,
            user_id,
            visit_date,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Moves the booking to a new status.
    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_booking_starts_pending() {
        let booking = Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        );
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn status_round_trips_through_tags() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("unknown"), None);
    }
}
