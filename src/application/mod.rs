//! Application layer: use-case orchestration over the repositories

pub mod services;

pub use services::{AnalyticsService, BookingService, BrandService, VehicleService};
