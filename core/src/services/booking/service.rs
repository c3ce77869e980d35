//! Visit booking service.
//!
//! Any authenticated user can book a visit to a listing. Administrative
//! operations over the booking pool are restricted to admins and agents.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::principal::Principal;
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, PropertyRepository};
use crate::services::authorization;

const ADMIN_ROLES: &[Role] = &[Role::Admin, Role::Agent];

/// Service for visit booking use cases.
pub struct BookingService<B: BookingRepository, P: PropertyRepository> {
    booking_repository: Arc<B>,
    property_repository: Arc<P>,
}

impl<B: BookingRepository, P: PropertyRepository> BookingService<B, P> {
    pub fn new(booking_repository: Arc<B>, property_repository: Arc<P>) -> Self {
        Self {
            booking_repository,
            property_repository,
        }
    }

    /// Books a visit to an existing listing for the acting user.
    ///
    /// The booking starts in `Pending` status.
    pub async fn create(
        &self,
        principal: Option<&Principal>,
        property_id: Uuid,
        visit_date: NaiveDate,
    ) -> DomainResult<Booking> {
        let principal = authorization::require_authenticated(principal)?;

        if self
            .property_repository
            .find_by_id(property_id)
            .await?
            .is_none()
        {
            return Err(DomainError::NotFound {
                resource: "property".to_string(),
            });
        }

        let booking = self
            .booking_repository
            .create(Booking::new(property_id, principal.user_id, visit_date))
            .await?;
        tracing::info!(booking_id = %booking.id, property_id = %property_id, "visit booked");
        Ok(booking)
    }

    /// A single booking. Visible to its owner and to admins/agents.
    pub async fn get(&self, principal: Option<&Principal>, id: Uuid) -> DomainResult<Booking> {
        let principal = authorization::require_authenticated(principal)?;

        let booking = self
            .booking_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "booking".to_string(),
            })?;

        if booking.user_id != principal.user_id {
            authorization::require_any_role(Some(principal), ADMIN_ROLES)?;
        }
        Ok(booking)
    }

    /// The acting user's own bookings.
    pub async fn mine(&self, principal: Option<&Principal>) -> DomainResult<Vec<Booking>> {
        let principal = authorization::require_authenticated(principal)?;
        self.booking_repository.find_by_user(principal.user_id).await
    }

    /// Bookings made by an arbitrary user. Admin/agent only.
    pub async fn list_by_user(
        &self,
        principal: Option<&Principal>,
        user_id: Uuid,
    ) -> DomainResult<Vec<Booking>> {
        authorization::require_any_role(principal, ADMIN_ROLES)?;
        self.booking_repository.find_by_user(user_id).await
    }

    /// Every booking in the system. Admin/agent only.
    pub async fn list_all(&self, principal: Option<&Principal>) -> DomainResult<Vec<Booking>> {
        authorization::require_any_role(principal, ADMIN_ROLES)?;
        self.booking_repository.find_all().await
    }

    /// Bookings in a given status. Admin/agent only.
    pub async fn list_by_status(
        &self,
        principal: Option<&Principal>,
        status: BookingStatus,
    ) -> DomainResult<Vec<Booking>> {
        authorization::require_any_role(principal, ADMIN_ROLES)?;
        self.booking_repository.find_by_status(status).await
    }

    /// Bookings for a given listing. Admin/agent/owner only.
    pub async fn list_by_property(
        &self,
        principal: Option<&Principal>,
        property_id: Uuid,
    ) -> DomainResult<Vec<Booking>> {
        authorization::require_any_role(principal, &[Role::Admin, Role::Agent, Role::Owner])?;
        self.booking_repository.find_by_property(property_id).await
    }

    /// Moves a booking into a new status. Admin/agent only.
    pub async fn update_status(
        &self,
        principal: Option<&Principal>,
        id: Uuid,
        status: BookingStatus,
    ) -> DomainResult<Booking> {
        authorization::require_any_role(principal, ADMIN_ROLES)?;

        let mut booking = self
            .booking_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "booking".to_string(),
            })?;
        booking.set_status(status);
        self.booking_repository.update(booking).await
    }

    /// Removes a booking. Admin/agent only.
    pub async fn delete(&self, principal: Option<&Principal>, id: Uuid) -> DomainResult<()> {
        authorization::require_any_role(principal, ADMIN_ROLES)?;

        if !self.booking_repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: "booking".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::property::{Property, PropertyType};
    use crate::errors::AuthError;
    use crate::repositories::booking::MockBookingRepository;
    use crate::repositories::property::MockPropertyRepository;

    struct Fixture {
        bookings: BookingService<MockBookingRepository, MockPropertyRepository>,
        property_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let properties = Arc::new(MockPropertyRepository::new());
        let property = properties
            .create(Property::new(
                Uuid::new_v4(),
                "Cottage".to_string(),
                None,
                250_000.0,
                "Springfield".to_string(),
                PropertyType::Buy,
                Vec::new(),
            ))
            .await
            .unwrap();
        Fixture {
            bookings: BookingService::new(Arc::new(MockBookingRepository::new()), properties),
            property_id: property.id,
        }
    }

    fn principal_with(roles: &[Role]) -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            email: "user@x.com".to_string(),
            roles: roles.iter().copied().collect(),
        }
    }

    fn visit_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()
    }

    #[tokio::test]
    async fn any_authenticated_user_can_book() {
        let f = fixture().await;
        let customer = principal_with(&[Role::Customer]);

        let booking = f
            .bookings
            .create(Some(&customer), f.property_id, visit_date())
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.user_id, customer.user_id);
    }

    #[tokio::test]
    async fn booking_requires_authentication_and_existing_property() {
        let f = fixture().await;

        let result = f.bookings.create(None, f.property_id, visit_date()).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::Unauthenticated))
        ));

        let customer = principal_with(&[Role::Customer]);
        let result = f
            .bookings
            .create(Some(&customer), Uuid::new_v4(), visit_date())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn owner_sees_own_booking_but_not_others() {
        let f = fixture().await;
        let customer = principal_with(&[Role::Customer]);
        let stranger = principal_with(&[Role::Customer]);

        let booking = f
            .bookings
            .create(Some(&customer), f.property_id, visit_date())
            .await
            .unwrap();

        let fetched = f.bookings.get(Some(&customer), booking.id).await.unwrap();
        assert_eq!(fetched.id, booking.id);

        let result = f.bookings.get(Some(&stranger), booking.id).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));

        let admin = principal_with(&[Role::Admin]);
        assert!(f.bookings.get(Some(&admin), booking.id).await.is_ok());
    }

    #[tokio::test]
    async fn pool_operations_need_admin_or_agent() {
        let f = fixture().await;
        let customer = principal_with(&[Role::Customer]);

        let result = f.bookings.list_all(Some(&customer)).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));

        let result = f
            .bookings
            .list_by_user(Some(&customer), customer.user_id)
            .await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));

        let agent = principal_with(&[Role::Agent]);
        assert!(f.bookings.list_all(Some(&agent)).await.is_ok());
    }

    #[tokio::test]
    async fn status_transitions_are_recorded() {
        let f = fixture().await;
        let customer = principal_with(&[Role::Customer]);
        let admin = principal_with(&[Role::Admin]);

        let booking = f
            .bookings
            .create(Some(&customer), f.property_id, visit_date())
            .await
            .unwrap();

        let approved = f
            .bookings
            .update_status(Some(&admin), booking.id, BookingStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.status, BookingStatus::Approved);

        let by_status = f
            .bookings
            .list_by_status(Some(&admin), BookingStatus::Approved)
            .await
            .unwrap();
        assert_eq!(by_status.len(), 1);
    }

    #[tokio::test]
    async fn mine_returns_only_the_callers_bookings() {
        let f = fixture().await;
        let alice = principal_with(&[Role::Customer]);
        let bob = principal_with(&[Role::Customer]);

        f.bookings
            .create(Some(&alice), f.property_id, visit_date())
            .await
            .unwrap();
        f.bookings
            .create(Some(&bob), f.property_id, visit_date())
            .await
            .unwrap();

        let mine = f.bookings.mine(Some(&alice)).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, alice.user_id);
    }

    #[tokio::test]
    async fn delete_missing_booking_is_not_found() {
        let f = fixture().await;
        let admin = principal_with(&[Role::Admin]);

        let result = f.bookings.delete(Some(&admin), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
