//! Analytics REST API handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{
    AnalyticsSummaryResponse, BookingTrendsResponse, InventoryStatusResponse,
    PopularVehiclesResponse,
};
use crate::application::AnalyticsService;
use crate::interfaces::http::common::{ApiError, ApiResult, ErrorBody};

const ANALYTICS_FAILED: &str = "Failed to compute analytics";

#[derive(Clone)]
pub struct AnalyticsState {
    pub analytics: Arc<AnalyticsService>,
}

#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    tag = "Analytics",
    responses(
        (status = 200, description = "Catalog and booking totals", body = AnalyticsSummaryResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_summary(
    State(state): State<AnalyticsState>,
) -> ApiResult<Json<AnalyticsSummaryResponse>> {
    let summary = state
        .analytics
        .summary()
        .await
        .map_err(ApiError::context(ANALYTICS_FAILED))?;
    Ok(Json(summary.into()))
}

#[utoipa::path(
    get,
    path = "/api/analytics/popular-vehicles",
    tag = "Analytics",
    responses(
        (status = 200, description = "Top 10 vehicles by bookings", body = PopularVehiclesResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_popular_vehicles(
    State(state): State<AnalyticsState>,
) -> ApiResult<Json<PopularVehiclesResponse>> {
    let vehicles = state
        .analytics
        .popular_vehicles()
        .await
        .map_err(ApiError::context(ANALYTICS_FAILED))?;
    Ok(Json(PopularVehiclesResponse {
        popular_vehicles: vehicles.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/analytics/booking-trends",
    tag = "Analytics",
    responses(
        (status = 200, description = "Bookings per day for the 30 most recent days", body = BookingTrendsResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_booking_trends(
    State(state): State<AnalyticsState>,
) -> ApiResult<Json<BookingTrendsResponse>> {
    let days = state
        .analytics
        .booking_trends()
        .await
        .map_err(ApiError::context(ANALYTICS_FAILED))?;
    Ok(Json(BookingTrendsResponse {
        booking_trends: days.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/analytics/inventory-status",
    tag = "Analytics",
    responses(
        (status = 200, description = "Availability counts and high-demand vehicles", body = InventoryStatusResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_inventory_status(
    State(state): State<AnalyticsState>,
) -> ApiResult<Json<InventoryStatusResponse>> {
    let status = state
        .analytics
        .inventory_status()
        .await
        .map_err(ApiError::context(ANALYTICS_FAILED))?;
    Ok(Json(status.into()))
}
