//! Inventory and booking analytics

use std::sync::Arc;

use crate::domain::analytics::{
    DailyBookings, InventoryStatus, InventorySummary, PopularVehicle, HIGH_DEMAND_THRESHOLD,
    POPULAR_VEHICLES_LIMIT, TREND_DAYS,
};
use crate::domain::{DomainResult, RepositoryProvider};

/// Read-only reports, recomputed on every call
pub struct AnalyticsService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AnalyticsService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn summary(&self) -> DomainResult<InventorySummary> {
        self.repos.analytics().summary().await
    }

    pub async fn popular_vehicles(&self) -> DomainResult<Vec<PopularVehicle>> {
        self.repos
            .analytics()
            .popular_vehicles(POPULAR_VEHICLES_LIMIT)
            .await
    }

    pub async fn booking_trends(&self) -> DomainResult<Vec<DailyBookings>> {
        self.repos.analytics().booking_trends(TREND_DAYS).await
    }

    pub async fn inventory_status(&self) -> DomainResult<InventoryStatus> {
        self.repos
            .analytics()
            .inventory_status(HIGH_DEMAND_THRESHOLD)
            .await
    }
}
