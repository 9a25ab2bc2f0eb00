use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Number of vehicles in the popularity ranking
pub const POPULAR_VEHICLES_LIMIT: u64 = 10;

/// Number of most recent booking days reported in trends
pub const TREND_DAYS: u64 = 30;

/// A vehicle is in high demand above this many open bookings
pub const HIGH_DEMAND_THRESHOLD: i64 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Catalog-wide counts and price statistics.
/// Maps only contain categories with at least one member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySummary {
    pub total_vehicles: u64,
    pub vehicles_by_brand: BTreeMap<String, u64>,
    pub vehicles_by_fuel: BTreeMap<String, u64>,
    pub total_bookings: u64,
    pub bookings_by_status: BTreeMap<String, u64>,
    /// 0 when there are no vehicles
    pub average_price: f64,
    pub price_range: PriceRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopularVehicle {
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub brand_name: String,
    pub booking_count: u64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBookings {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighDemandVehicle {
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub brand_name: String,
    /// Bookings still pending or contacted
    pub booking_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStatus {
    pub available_vehicles: u64,
    pub unavailable_vehicles: u64,
    pub high_demand_vehicles: Vec<HighDemandVehicle>,
}
