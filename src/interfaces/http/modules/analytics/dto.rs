//! Analytics API data transfer objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::analytics::{
    DailyBookings, HighDemandVehicle, InventoryStatus, InventorySummary, PopularVehicle,
    PriceRange,
};

// ── Summary ────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PriceRangeDto {
    pub min: f64,
    pub max: f64,
}

impl From<PriceRange> for PriceRangeDto {
    fn from(r: PriceRange) -> Self {
        Self {
            min: r.min,
            max: r.max,
        }
    }
}

/// Catalog-wide counts. Categories without members are absent from the maps.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyticsSummaryResponse {
    pub total_vehicles: u64,
    /// Brand name to vehicle count
    pub vehicles_by_brand: BTreeMap<String, u64>,
    /// Fuel type to vehicle count
    pub vehicles_by_fuel: BTreeMap<String, u64>,
    pub total_bookings: u64,
    /// Booking status to booking count
    pub bookings_by_status: BTreeMap<String, u64>,
    /// 0 when the catalog is empty
    pub average_price: f64,
    pub price_range: PriceRangeDto,
}

impl From<InventorySummary> for AnalyticsSummaryResponse {
    fn from(s: InventorySummary) -> Self {
        Self {
            total_vehicles: s.total_vehicles,
            vehicles_by_brand: s.vehicles_by_brand,
            vehicles_by_fuel: s.vehicles_by_fuel,
            total_bookings: s.total_bookings,
            bookings_by_status: s.bookings_by_status,
            average_price: s.average_price,
            price_range: s.price_range.into(),
        }
    }
}

// ── Popularity ─────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PopularVehicleDto {
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub brand_name: String,
    pub booking_count: u64,
    pub price: f64,
}

impl From<PopularVehicle> for PopularVehicleDto {
    fn from(p: PopularVehicle) -> Self {
        Self {
            vehicle_id: p.vehicle_id,
            vehicle_name: p.vehicle_name,
            brand_name: p.brand_name,
            booking_count: p.booking_count,
            price: p.price,
        }
    }
}

/// Top vehicles by booking count
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PopularVehiclesResponse {
    pub popular_vehicles: Vec<PopularVehicleDto>,
}

// ── Trends ─────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingTrendDto {
    /// UTC calendar day, YYYY-MM-DD
    #[schema(example = "2024-06-01")]
    pub date: String,
    pub count: u64,
}

impl From<DailyBookings> for BookingTrendDto {
    fn from(d: DailyBookings) -> Self {
        Self {
            date: d.date.format("%Y-%m-%d").to_string(),
            count: d.count,
        }
    }
}

/// Bookings per day, most recent first
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingTrendsResponse {
    pub booking_trends: Vec<BookingTrendDto>,
}

// ── Inventory ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HighDemandVehicleDto {
    pub vehicle_id: i32,
    pub vehicle_name: String,
    pub brand_name: String,
    /// Pending or contacted bookings
    pub booking_count: u64,
}

impl From<HighDemandVehicle> for HighDemandVehicleDto {
    fn from(h: HighDemandVehicle) -> Self {
        Self {
            vehicle_id: h.vehicle_id,
            vehicle_name: h.vehicle_name,
            brand_name: h.brand_name,
            booking_count: h.booking_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InventoryStatusResponse {
    pub available_vehicles: u64,
    pub unavailable_vehicles: u64,
    pub high_demand_vehicles: Vec<HighDemandVehicleDto>,
}

impl From<InventoryStatus> for InventoryStatusResponse {
    fn from(s: InventoryStatus) -> Self {
        Self {
            available_vehicles: s.available_vehicles,
            unavailable_vehicles: s.unavailable_vehicles,
            high_demand_vehicles: s.high_demand_vehicles.into_iter().map(Into::into).collect(),
        }
    }
}
