//! Brand REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{BrandDetailResponse, BrandResponse, CreateBrandRequest, UpdateBrandRequest};
use crate::application::BrandService;
use crate::interfaces::http::common::{
    ApiError, ApiPath, ApiResult, ErrorBody, MessageResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct BrandState {
    pub brands: Arc<BrandService>,
}

#[utoipa::path(
    get,
    path = "/api/brands",
    tag = "Brands",
    responses(
        (status = 200, description = "All brands", body = Vec<BrandResponse>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_brands(State(state): State<BrandState>) -> ApiResult<Json<Vec<BrandResponse>>> {
    let brands = state
        .brands
        .list()
        .await
        .map_err(ApiError::context("Failed to fetch brands"))?;
    Ok(Json(brands.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    tag = "Brands",
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand with its vehicles", body = BrandDetailResponse),
        (status = 400, description = "Invalid ID", body = ErrorBody),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn get_brand(
    State(state): State<BrandState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<BrandDetailResponse>> {
    let brand = state
        .brands
        .get(id)
        .await
        .map_err(ApiError::context("Failed to fetch brand"))?;
    Ok(Json(brand.into()))
}

#[utoipa::path(
    post,
    path = "/api/admin/brands",
    tag = "Brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 201, description = "Brand created", body = BrandResponse),
        (status = 400, description = "Invalid body or duplicate name", body = ErrorBody)
    )
)]
pub async fn create_brand(
    State(state): State<BrandState>,
    ValidatedJson(body): ValidatedJson<CreateBrandRequest>,
) -> ApiResult<(StatusCode, Json<BrandResponse>)> {
    let brand = state
        .brands
        .create(body.into())
        .await
        .map_err(ApiError::context("Failed to create brand"))?;
    Ok((StatusCode::CREATED, Json(brand.into())))
}

#[utoipa::path(
    put,
    path = "/api/admin/brands/{id}",
    tag = "Brands",
    params(("id" = i32, Path, description = "Brand ID")),
    request_body = UpdateBrandRequest,
    responses(
        (status = 200, description = "Brand updated", body = BrandResponse),
        (status = 400, description = "Invalid body or duplicate name", body = ErrorBody),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn update_brand(
    State(state): State<BrandState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(body): ValidatedJson<UpdateBrandRequest>,
) -> ApiResult<Json<BrandResponse>> {
    let brand = state
        .brands
        .update(id, body.into())
        .await
        .map_err(ApiError::context("Failed to update brand"))?;
    Ok(Json(brand.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/brands/{id}",
    tag = "Brands",
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand deleted", body = MessageResponse),
        (status = 400, description = "Brand still owns vehicles", body = ErrorBody),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn delete_brand(
    State(state): State<BrandState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .brands
        .delete(id)
        .await
        .map_err(ApiError::context("Failed to delete brand"))?;
    Ok(Json(MessageResponse::deleted("Brand")))
}
