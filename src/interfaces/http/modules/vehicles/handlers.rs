//! Vehicle REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleListResponse, VehicleQuery,
    VehicleResponse,
};
use crate::application::VehicleService;
use crate::interfaces::http::common::{
    ApiError, ApiPath, ApiQuery, ApiResult, ErrorBody, MessageResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct VehicleState {
    pub vehicles: Arc<VehicleService>,
}

#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = "Vehicles",
    params(VehicleQuery),
    responses(
        (status = 200, description = "Available vehicles matching the filter", body = VehicleListResponse),
        (status = 400, description = "Malformed query", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_vehicles(
    State(state): State<VehicleState>,
    ApiQuery(query): ApiQuery<VehicleQuery>,
) -> ApiResult<Json<VehicleListResponse>> {
    let filter = query.into_filter();
    let page = state
        .vehicles
        .search(&filter)
        .await
        .map_err(ApiError::context("Failed to fetch vehicles"))?;

    Ok(Json(VehicleListResponse {
        vehicles: page.items.into_iter().map(Into::into).collect(),
        total: page.total,
        limit: page.limit,
        offset: page.offset,
    }))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle with its brand", body = VehicleResponse),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody)
    )
)]
pub async fn get_vehicle(
    State(state): State<VehicleState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<VehicleResponse>> {
    let vehicle = state
        .vehicles
        .get(id)
        .await
        .map_err(ApiError::context("Failed to fetch vehicle"))?;
    Ok(Json(vehicle.into()))
}

#[utoipa::path(
    post,
    path = "/api/admin/vehicles",
    tag = "Vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleResponse),
        (status = 400, description = "Invalid body or unknown brand", body = ErrorBody)
    )
)]
pub async fn create_vehicle(
    State(state): State<VehicleState>,
    ValidatedJson(body): ValidatedJson<CreateVehicleRequest>,
) -> ApiResult<(StatusCode, Json<VehicleResponse>)> {
    let vehicle = state
        .vehicles
        .create(body.into())
        .await
        .map_err(ApiError::context("Failed to create vehicle"))?;
    Ok((StatusCode::CREATED, Json(vehicle.into())))
}

#[utoipa::path(
    put,
    path = "/api/admin/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleResponse),
        (status = 400, description = "Invalid body or unknown brand", body = ErrorBody),
        (status = 404, description = "Vehicle not found", body = ErrorBody)
    )
)]
pub async fn update_vehicle(
    State(state): State<VehicleState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(body): ValidatedJson<UpdateVehicleRequest>,
) -> ApiResult<Json<VehicleResponse>> {
    let vehicle = state
        .vehicles
        .update(id, body.into())
        .await
        .map_err(ApiError::context("Failed to update vehicle"))?;
    Ok(Json(vehicle.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle and its bookings deleted", body = MessageResponse),
        (status = 404, description = "Vehicle not found", body = ErrorBody)
    )
)]
pub async fn delete_vehicle(
    State(state): State<VehicleState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .vehicles
        .delete(id)
        .await
        .map_err(ApiError::context("Failed to delete vehicle"))?;
    Ok(Json(MessageResponse::deleted("Vehicle")))
}
