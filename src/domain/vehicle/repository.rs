//! Vehicle repository interface

use async_trait::async_trait;

use super::filter::VehicleFilter;
use super::model::{NewVehicle, Vehicle};
use crate::domain::DomainResult;
use crate::shared::Page;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Available vehicles matching the filter, brand attached, ascending id.
    /// `total` counts every match ignoring pagination.
    async fn search(&self, filter: &VehicleFilter) -> DomainResult<Page<Vehicle>>;

    /// Find a vehicle with its brand attached
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vehicle>>;

    async fn create(&self, vehicle: NewVehicle) -> DomainResult<Vehicle>;

    /// Persist every field of an existing vehicle
    async fn update(&self, vehicle: &Vehicle) -> DomainResult<Vehicle>;

    /// Delete a vehicle; its bookings are removed with it
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
