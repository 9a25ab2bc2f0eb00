pub mod analytics;
pub mod bookings;
pub mod brands;
pub mod health;
pub mod metrics;
pub mod request_id;
pub mod vehicles;
