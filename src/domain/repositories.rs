//! Repository access for the domain layer

use super::analytics::AnalyticsRepository;
use super::booking::BookingRepository;
use super::brand::BrandRepository;
use super::vehicle::VehicleRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let brand = repos.brands().find_by_id(1).await?;
///     let page = repos.vehicles().search(&VehicleFilter::default()).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn brands(&self) -> &dyn BrandRepository;
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn analytics(&self) -> &dyn AnalyticsRepository;
}
