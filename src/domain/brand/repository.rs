//! Brand repository interface

use async_trait::async_trait;

use super::model::{Brand, NewBrand};
use crate::domain::DomainResult;

#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// All brands in id order, without vehicles
    async fn find_all(&self) -> DomainResult<Vec<Brand>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Brand>>;

    /// Find a brand with its `vehicles` populated
    async fn find_with_vehicles(&self, id: i32) -> DomainResult<Option<Brand>>;

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Brand>>;

    async fn create(&self, brand: NewBrand) -> DomainResult<Brand>;

    /// Persist every field of an existing brand
    async fn update(&self, brand: &Brand) -> DomainResult<Brand>;

    async fn delete(&self, id: i32) -> DomainResult<()>;

    /// Number of vehicles (any availability) referencing the brand
    async fn count_vehicles(&self, brand_id: i32) -> DomainResult<u64>;
}
