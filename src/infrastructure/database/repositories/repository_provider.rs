//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::analytics::AnalyticsRepository;
use crate::domain::booking::BookingRepository;
use crate::domain::brand::BrandRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::vehicle::VehicleRepository;

use super::analytics_repository::SeaOrmAnalyticsRepository;
use super::booking_repository::SeaOrmBookingRepository;
use super::brand_repository::SeaOrmBrandRepository;
use super::vehicle_repository::SeaOrmVehicleRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let brand = repos.brands().find_by_name("Toyota").await?;
/// let summary = repos.analytics().summary().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    brands: SeaOrmBrandRepository,
    vehicles: SeaOrmVehicleRepository,
    bookings: SeaOrmBookingRepository,
    analytics: SeaOrmAnalyticsRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            brands: SeaOrmBrandRepository::new(db.clone()),
            vehicles: SeaOrmVehicleRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            analytics: SeaOrmAnalyticsRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn brands(&self) -> &dyn BrandRepository {
        &self.brands
    }

    fn vehicles(&self) -> &dyn VehicleRepository {
        &self.vehicles
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn analytics(&self) -> &dyn AnalyticsRepository {
        &self.analytics
    }
}
