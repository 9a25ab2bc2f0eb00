//! Booking REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{BookingQuery, BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest};
use crate::application::BookingService;
use crate::domain::NewBooking;
use crate::interfaces::http::common::{
    ApiError, ApiPath, ApiQuery, ApiResult, ErrorBody, MessageResponse, ValidatedJson,
};

#[derive(Clone)]
pub struct BookingState {
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking received", body = BookingResponse),
        (status = 400, description = "Invalid body, unknown or unavailable vehicle", body = ErrorBody)
    )
)]
pub async fn create_booking(
    State(state): State<BookingState>,
    ValidatedJson(body): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    const CONTEXT: &str = "Failed to create booking";

    let booking = NewBooking::try_from(body).map_err(ApiError::context(CONTEXT))?;
    let booking = state
        .bookings
        .create(booking)
        .await
        .map_err(ApiError::context(CONTEXT))?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = "Bookings",
    params(BookingQuery),
    responses(
        (status = 200, description = "Bookings, newest first", body = Vec<BookingResponse>),
        (status = 400, description = "Unknown status filter", body = ErrorBody)
    )
)]
pub async fn list_bookings(
    State(state): State<BookingState>,
    ApiQuery(query): ApiQuery<BookingQuery>,
) -> ApiResult<Json<Vec<BookingResponse>>> {
    const CONTEXT: &str = "Failed to fetch bookings";

    let status = query.status().map_err(ApiError::context(CONTEXT))?;
    let bookings = state
        .bookings
        .list(status)
        .await
        .map_err(ApiError::context(CONTEXT))?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking with vehicle and brand", body = BookingResponse),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn get_booking(
    State(state): State<BookingState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = state
        .bookings
        .get(id)
        .await
        .map_err(ApiError::context("Failed to fetch booking"))?;
    Ok(Json(booking.into()))
}

#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = BookingResponse),
        (status = 400, description = "Invalid status value", body = ErrorBody),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn update_booking_status(
    State(state): State<BookingState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(body): ValidatedJson<UpdateBookingStatusRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = state
        .bookings
        .update_status(id, &body.status)
        .await
        .map_err(ApiError::context("Failed to update booking"))?;
    Ok(Json(booking.into()))
}

#[utoipa::path(
    delete,
    path = "/api/admin/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = MessageResponse),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn delete_booking(
    State(state): State<BookingState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .bookings
        .delete(id)
        .await
        .map_err(ApiError::context("Failed to delete booking"))?;
    Ok(Json(MessageResponse::deleted("Booking")))
}
