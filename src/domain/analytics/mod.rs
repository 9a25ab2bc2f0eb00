//! Analytics read models
//!
//! Aggregates computed on demand from the catalog and booking tables.
//! Nothing here is persisted.

pub mod model;
pub mod repository;

pub use model::{
    DailyBookings, HighDemandVehicle, InventoryStatus, InventorySummary, PopularVehicle,
    PriceRange, HIGH_DEMAND_THRESHOLD, POPULAR_VEHICLES_LIMIT, TREND_DAYS,
};
pub use repository::AnalyticsRepository;
