//! Brand management service

use std::sync::Arc;

use log::info;

use crate::domain::{
    Brand, BrandChanges, DomainError, DomainResult, NewBrand, RepositoryProvider,
};

pub struct BrandService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BrandService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<Brand>> {
        self.repos.brands().find_all().await
    }

    /// Brand with its vehicles
    pub async fn get(&self, id: i32) -> DomainResult<Brand> {
        self.repos
            .brands()
            .find_with_vehicles(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Brand", id))
    }

    pub async fn create(&self, brand: NewBrand) -> DomainResult<Brand> {
        let brand = brand.validate()?;
        self.ensure_name_free(&brand.name, None).await?;

        let created = self.repos.brands().create(brand).await?;
        info!("Brand {} registered as {}", created.name, created.id);
        Ok(created)
    }

    pub async fn update(&self, id: i32, changes: BrandChanges) -> DomainResult<Brand> {
        let mut brand = self
            .repos
            .brands()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Brand", id))?;

        if let Some(name) = changes.name.as_deref() {
            if name != brand.name {
                self.ensure_name_free(name, Some(id)).await?;
            }
        }

        brand.apply(changes)?;
        self.repos.brands().update(&brand).await
    }

    /// Refused while any vehicle still references the brand.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if self.repos.brands().find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Brand", id));
        }

        if self.repos.brands().count_vehicles(id).await? > 0 {
            return Err(DomainError::Conflict(
                "Cannot delete brand with existing vehicles".into(),
            ));
        }

        self.repos.brands().delete(id).await
    }

    async fn ensure_name_free(&self, name: &str, except: Option<i32>) -> DomainResult<()> {
        match self.repos.brands().find_by_name(name).await? {
            Some(other) if Some(other.id) != except => Err(DomainError::Conflict(
                "Brand with this name already exists".into(),
            )),
            _ => Ok(()),
        }
    }
}
