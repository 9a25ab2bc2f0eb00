//! Customer booking service

use std::sync::Arc;

use log::info;

use crate::domain::{
    Booking, BookingStatus, DomainError, DomainResult, NewBooking, RepositoryProvider,
};

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Newest first, optionally restricted to one status
    pub async fn list(&self, status: Option<BookingStatus>) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_all(status).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", id))
    }

    /// Bookings are only accepted for vehicles that exist and are available.
    pub async fn create(&self, booking: NewBooking) -> DomainResult<Booking> {
        let booking = booking.validate()?;

        let vehicle = self
            .repos
            .vehicles()
            .find_by_id(booking.vehicle_id)
            .await?
            .ok_or_else(|| DomainError::Validation("Vehicle not found".into()))?;

        if !vehicle.is_bookable() {
            return Err(DomainError::Validation(
                "Vehicle is not available for booking".into(),
            ));
        }

        let created = self.repos.bookings().create(booking).await?;
        metrics::counter!("dealership_bookings_created_total").increment(1);
        info!(
            "Booking {} received for vehicle {} ({})",
            created.id, vehicle.id, vehicle.name
        );
        Ok(created)
    }

    /// Any status may follow any other. The booking must exist before the
    /// status text is looked at.
    pub async fn update_status(&self, id: i32, status: &str) -> DomainResult<Booking> {
        self.get(id).await?;
        let status: BookingStatus = status.parse()?;
        self.repos.bookings().update_status(id, status).await?;
        self.get(id).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.get(id).await?;
        self.repos.bookings().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::repos;
    use crate::domain::{NewBrand, NewVehicle};

    async fn setup(available: bool) -> (BookingService, i32) {
        let repos = repos().await;
        let brand = repos.brands().create(NewBrand::new("Tesla")).await.unwrap();
        let mut vehicle = NewVehicle::new(brand.id, "Model 3", 2024, 47_740.0, "Electric");
        vehicle.availability = available;
        let vehicle = repos.vehicles().create(vehicle).await.unwrap();
        (BookingService::new(repos), vehicle.id)
    }

    #[tokio::test]
    async fn available_vehicle_accepts_booking_as_pending() {
        let (service, vehicle_id) = setup(true).await;
        let booking = service
            .create(NewBooking::new(vehicle_id, "Alex Kim", "alex@example.com"))
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        let vehicle = booking.vehicle.unwrap();
        assert_eq!(vehicle.id, vehicle_id);
        assert_eq!(vehicle.brand.unwrap().name, "Tesla");
    }

    #[tokio::test]
    async fn unavailable_vehicle_rejects_booking() {
        let (service, vehicle_id) = setup(false).await;
        let err = service
            .create(NewBooking::new(vehicle_id, "Alex Kim", "alex@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Validation: Vehicle is not available for booking");
        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_vehicle_rejects_booking() {
        let (service, _) = setup(true).await;
        let err = service
            .create(NewBooking::new(404, "Alex Kim", "alex@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn status_can_move_freely() {
        let (service, vehicle_id) = setup(true).await;
        let booking = service
            .create(NewBooking::new(vehicle_id, "Alex Kim", "alex@example.com"))
            .await
            .unwrap();

        let done = service
            .update_status(booking.id, "completed")
            .await
            .unwrap();
        assert_eq!(done.status, BookingStatus::Completed);

        let reopened = service
            .update_status(booking.id, "pending")
            .await
            .unwrap();
        assert_eq!(reopened.status, BookingStatus::Pending);
        assert!(reopened.vehicle.is_some());
    }

    #[tokio::test]
    async fn missing_booking_wins_over_bad_status() {
        let (service, vehicle_id) = setup(true).await;
        let err = service.update_status(999, "bogus").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let booking = service
            .create(NewBooking::new(vehicle_id, "Alex Kim", "alex@example.com"))
            .await
            .unwrap();
        let err = service.update_status(booking.id, "bogus").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_then_not_found() {
        let (service, vehicle_id) = setup(true).await;
        let booking = service
            .create(NewBooking::new(vehicle_id, "Alex Kim", "alex@example.com"))
            .await
            .unwrap();

        service.delete(booking.id).await.unwrap();
        assert!(matches!(
            service.get(booking.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete(booking.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
