//! Vehicle catalog service

use std::sync::Arc;

use log::info;

use crate::domain::{
    DomainError, DomainResult, NewVehicle, RepositoryProvider, Vehicle, VehicleChanges,
    VehicleFilter,
};
use crate::shared::Page;

pub struct VehicleService {
    repos: Arc<dyn RepositoryProvider>,
}

impl VehicleService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Public catalog listing; only available vehicles are returned.
    pub async fn search(&self, filter: &VehicleFilter) -> DomainResult<Page<Vehicle>> {
        self.repos.vehicles().search(filter).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Vehicle> {
        self.repos
            .vehicles()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vehicle", id))
    }

    pub async fn create(&self, vehicle: NewVehicle) -> DomainResult<Vehicle> {
        let vehicle = vehicle.validate()?;
        self.ensure_brand_exists(vehicle.brand_id).await?;

        let created = self.repos.vehicles().create(vehicle).await?;
        info!(
            "Vehicle {} {} added to inventory as {}",
            created.name, created.model, created.id
        );
        Ok(created)
    }

    pub async fn update(&self, id: i32, changes: VehicleChanges) -> DomainResult<Vehicle> {
        let mut vehicle = self.get(id).await?;

        if let Some(brand_id) = changes.brand_id {
            if brand_id != vehicle.brand_id {
                self.ensure_brand_exists(brand_id).await?;
            }
        }

        vehicle.apply(changes)?;
        self.repos.vehicles().update(&vehicle).await
    }

    /// Removes the vehicle together with its bookings.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.get(id).await?;
        self.repos.vehicles().delete(id).await
    }

    async fn ensure_brand_exists(&self, brand_id: i32) -> DomainResult<()> {
        if self.repos.brands().find_by_id(brand_id).await?.is_none() {
            return Err(DomainError::Validation("Brand not found".into()));
        }
        Ok(())
    }
}
