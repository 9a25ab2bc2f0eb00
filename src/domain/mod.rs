//! Domain layer: dealership aggregates, repository ports and read models

pub mod analytics;
pub mod booking;
pub mod brand;
pub mod repositories;
pub mod vehicle;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use brand::{Brand, BrandChanges, NewBrand};
pub use repositories::RepositoryProvider;
pub use vehicle::{NewVehicle, Vehicle, VehicleChanges, VehicleFilter};

pub use crate::shared::types::{DomainError, DomainResult};
