//! Booking domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::vehicle::Vehicle;
use crate::domain::{DomainError, DomainResult};

/// Booking lifecycle status. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Contacted,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        Self::Pending,
        Self::Contacted,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Still awaiting follow-up from the dealership
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Contacted)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "contacted" => Ok(Self::Contacted),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::Validation("Invalid status value".into())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's request to be contacted about a vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub vehicle_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub message: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Vehicle with its brand, when fetched together
    pub vehicle: Option<Vehicle>,
}

/// Data for a booking that does not exist yet
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub vehicle_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub message: String,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn new(
        vehicle_id: i32,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_id,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: String::new(),
            message: String::new(),
            status: BookingStatus::Pending,
        }
    }

    pub fn validate(self) -> DomainResult<Self> {
        if self.customer_name.trim().is_empty() {
            return Err(DomainError::Validation("Customer name is required".into()));
        }
        if self.customer_email.trim().is_empty() {
            return Err(DomainError::Validation("Customer email is required".into()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown_and_mixed_case() {
        for raw in ["shipped", "Pending", ""] {
            let err = raw.parse::<BookingStatus>().unwrap_err();
            assert_eq!(err.to_string(), "Validation: Invalid status value");
        }
    }

    #[test]
    fn new_booking_starts_pending() {
        let booking = NewBooking::new(1, "Ann", "ann@example.com");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn blank_customer_name_is_rejected() {
        assert!(NewBooking::new(1, " ", "ann@example.com").validate().is_err());
    }

    #[test]
    fn open_statuses() {
        assert!(BookingStatus::Pending.is_open());
        assert!(BookingStatus::Contacted.is_open());
        assert!(!BookingStatus::Completed.is_open());
        assert!(!BookingStatus::Cancelled.is_open());
    }
}
