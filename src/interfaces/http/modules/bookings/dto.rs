//! Booking API data transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Booking, BookingStatus, DomainResult, NewBooking};
use crate::interfaces::http::modules::vehicles::VehicleResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    pub vehicle_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub message: String,
    /// pending, contacted, completed or cancelled
    #[schema(example = "pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Vehicle with its brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleResponse>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            vehicle_id: b.vehicle_id,
            customer_name: b.customer_name,
            customer_email: b.customer_email,
            customer_phone: b.customer_phone,
            message: b.message,
            status: b.status.to_string(),
            created_at: b.created_at,
            updated_at: b.updated_at,
            vehicle: b.vehicle.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    pub vehicle_id: i32,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub message: Option<String>,
    /// Defaults to pending
    #[schema(example = "pending")]
    pub status: Option<String>,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = crate::domain::DomainError;

    fn try_from(r: CreateBookingRequest) -> DomainResult<Self> {
        let mut booking = NewBooking::new(r.vehicle_id, r.customer_name, r.customer_email);
        booking.customer_phone = r.customer_phone.unwrap_or_default();
        booking.message = r.message.unwrap_or_default();
        if let Some(status) = r.status.as_deref().filter(|s| !s.is_empty()) {
            booking.status = status.parse()?;
        }
        Ok(booking)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingStatusRequest {
    #[schema(example = "contacted")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingQuery {
    /// Only bookings with this status
    pub status: Option<String>,
}

impl BookingQuery {
    /// An empty value means no filter; anything else must be a known status.
    pub fn status(&self) -> DomainResult<Option<BookingStatus>> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }
}
