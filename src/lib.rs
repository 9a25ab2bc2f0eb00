//! # Dealership Catalog Service
//!
//! REST backend for a vehicle dealership: brands, vehicles, customer
//! bookings and inventory analytics over SQLite.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository ports and analytics read models
//! - **application**: one service per resource
//! - **infrastructure**: SeaORM entities, migrations, repositories, seeding
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: error types, pagination and shutdown handling

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, seed_catalog, DatabaseConfig, SeaOrmRepositoryProvider};
pub use interfaces::http::create_api_router;
