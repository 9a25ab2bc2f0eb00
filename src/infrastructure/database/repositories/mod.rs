//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod analytics_repository;
pub mod booking_repository;
pub mod brand_repository;
pub mod repository_provider;
pub mod vehicle_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    log::debug!("Database error: {}", e);
    DomainError::from(e)
}

fn count(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}
