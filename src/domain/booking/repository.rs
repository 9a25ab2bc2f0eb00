//! Booking repository interface

use async_trait::async_trait;

use super::model::{Booking, BookingStatus, NewBooking};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Newest first, each booking with vehicle and brand attached
    async fn find_all(&self, status: Option<BookingStatus>) -> DomainResult<Vec<Booking>>;

    /// Find a booking with vehicle and brand attached
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>>;

    async fn create(&self, booking: NewBooking) -> DomainResult<Booking>;

    async fn update_status(&self, id: i32, status: BookingStatus) -> DomainResult<()>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
