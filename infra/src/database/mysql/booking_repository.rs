//! MySQL implementation of the BookingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rems_core::domain::entities::booking::{Booking, BookingStatus};
use rems_core::errors::DomainError;
use rems_core::repositories::BookingRepository;

use super::{db_error, parse_uuid};

/// MySQL implementation of BookingRepository.
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| db_error("read bookings.id", e))?;
        let property_id: String = row
            .try_get("property_id")
            .map_err(|e| db_error("read bookings.property_id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| db_error("read bookings.user_id", e))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| db_error("read bookings.status", e))?;

        Ok(Booking {
            id: parse_uuid(&id)?,
            property_id: parse_uuid(&property_id)?,
            user_id: parse_uuid(&user_id)?,
            visit_date: row
                .try_get::<NaiveDate, _>("visit_date")
                .map_err(|e| db_error("read bookings.visit_date", e))?,
            status: BookingStatus::parse(&status).ok_or_else(|| DomainError::Database {
                message: format!("unknown booking status tag: {}", status),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("read bookings.created_at", e))?,
        })
    }
}

const BOOKING_COLUMNS: &str = "id, property_id, user_id, visit_date, status, created_at";

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE id = ? LIMIT 1",
            BOOKING_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find booking by id", e))?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list bookings", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE user_id = ? ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list bookings by user", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_property(&self, property_id: Uuid) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE property_id = ? ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(property_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list bookings by property", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_status(&self, status: BookingStatus) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "SELECT {} FROM bookings WHERE status = ? ORDER BY created_at DESC",
            BOOKING_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list bookings by status", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            INSERT INTO bookings (id, property_id, user_id, visit_date, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.property_id.to_string())
            .bind(booking.user_id.to_string())
            .bind(booking.visit_date)
            .bind(booking.status.as_str())
            .bind(booking.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("insert booking", e))?;

        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            UPDATE bookings
            SET visit_date = ?, status = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(booking.visit_date)
            .bind(booking.status.as_str())
            .bind(booking.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update booking", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "booking".to_string(),
            });
        }
        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete booking", e))?;

        Ok(result.rows_affected() > 0)
    }
}
