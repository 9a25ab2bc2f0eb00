//! Analytics repository interface

use async_trait::async_trait;

use super::model::{DailyBookings, InventoryStatus, InventorySummary, PopularVehicle};
use crate::domain::DomainResult;

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn summary(&self) -> DomainResult<InventorySummary>;

    /// Vehicles with at least one booking, most booked first
    async fn popular_vehicles(&self, limit: u64) -> DomainResult<Vec<PopularVehicle>>;

    /// Bookings per UTC calendar day, most recent `days` days that have
    /// bookings, newest first
    async fn booking_trends(&self, days: u64) -> DomainResult<Vec<DailyBookings>>;

    /// Availability counts plus vehicles with more than `threshold` open
    /// bookings, highest demand first
    async fn inventory_status(&self, threshold: i64) -> DomainResult<InventoryStatus>;
}
