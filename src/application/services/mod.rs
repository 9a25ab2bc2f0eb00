//! Application services
//!
//! One service per resource. Handlers stay thin and delegate here; the
//! services own existence checks, uniqueness and merge-on-update.

mod analytics;
mod booking;
mod brand;
mod vehicle;

pub use analytics::AnalyticsService;
pub use booking::BookingService;
pub use brand::BrandService;
pub use vehicle::VehicleService;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::domain::RepositoryProvider;
    use crate::infrastructure::database::testing::setup_db;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    pub async fn repos() -> Arc<dyn RepositoryProvider> {
        Arc::new(SeaOrmRepositoryProvider::new(setup_db().await))
    }
}
