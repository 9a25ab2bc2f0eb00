//! API router with Swagger documentation

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AnalyticsService, BookingService, BrandService, VehicleService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ErrorBody, MessageResponse};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{analytics, bookings, brands, health, metrics, vehicles};

/// Shared state for every route.
///
/// Handlers extract only the slice they need via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub brands: Arc<BrandService>,
    pub vehicles: Arc<VehicleService>,
    pub bookings: Arc<BookingService>,
    pub analytics: Arc<AnalyticsService>,
    pub health: health::HealthState,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, db: DatabaseConnection) -> Self {
        Self {
            brands: Arc::new(BrandService::new(repos.clone())),
            vehicles: Arc::new(VehicleService::new(repos.clone())),
            bookings: Arc::new(BookingService::new(repos.clone())),
            analytics: Arc::new(AnalyticsService::new(repos)),
            health: health::HealthState::new(db),
        }
    }
}

impl FromRef<ApiState> for brands::BrandState {
    fn from_ref(s: &ApiState) -> Self {
        brands::BrandState {
            brands: Arc::clone(&s.brands),
        }
    }
}

impl FromRef<ApiState> for vehicles::VehicleState {
    fn from_ref(s: &ApiState) -> Self {
        vehicles::VehicleState {
            vehicles: Arc::clone(&s.vehicles),
        }
    }
}

impl FromRef<ApiState> for bookings::BookingState {
    fn from_ref(s: &ApiState) -> Self {
        bookings::BookingState {
            bookings: Arc::clone(&s.bookings),
        }
    }
}

impl FromRef<ApiState> for analytics::AnalyticsState {
    fn from_ref(s: &ApiState) -> Self {
        analytics::AnalyticsState {
            analytics: Arc::clone(&s.analytics),
        }
    }
}

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        s.health.clone()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Brands
        brands::list_brands,
        brands::get_brand,
        brands::create_brand,
        brands::update_brand,
        brands::delete_brand,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking_status,
        bookings::delete_booking,
        // Analytics
        analytics::get_summary,
        analytics::get_popular_vehicles,
        analytics::get_booking_trends,
        analytics::get_inventory_status,
    ),
    components(
        schemas(
            ErrorBody,
            MessageResponse,
            health::HealthResponse,
            health::ComponentHealth,
            vehicles::VehicleResponse,
            vehicles::VehicleListResponse,
            vehicles::CreateVehicleRequest,
            vehicles::UpdateVehicleRequest,
            brands::BrandResponse,
            brands::BrandDetailResponse,
            brands::CreateBrandRequest,
            brands::UpdateBrandRequest,
            bookings::BookingResponse,
            bookings::CreateBookingRequest,
            bookings::UpdateBookingStatusRequest,
            analytics::AnalyticsSummaryResponse,
            analytics::PriceRangeDto,
            analytics::PopularVehiclesResponse,
            analytics::PopularVehicleDto,
            analytics::BookingTrendsResponse,
            analytics::BookingTrendDto,
            analytics::InventoryStatusResponse,
            analytics::HighDemandVehicleDto,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "Vehicles", description = "Vehicle catalog search and inventory management"),
        (name = "Brands", description = "Vehicle brands"),
        (name = "Bookings", description = "Customer contact requests for vehicles"),
        (name = "Analytics", description = "Inventory and booking reports"),
    ),
    info(
        title = "Dealership Catalog API",
        version = "1.0.0",
        description = "REST API for a vehicle dealership catalog: brands, vehicles, bookings and analytics"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `GET /metrics` is only mounted when a Prometheus recorder handle is given.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let state = ApiState::new(repos, db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/vehicles", get(vehicles::list_vehicles))
        .route("/api/vehicles/{id}", get(vehicles::get_vehicle))
        .route("/api/brands", get(brands::list_brands))
        .route("/api/brands/{id}", get(brands::get_brand))
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/analytics/summary", get(analytics::get_summary))
        .route(
            "/api/analytics/popular-vehicles",
            get(analytics::get_popular_vehicles),
        )
        .route(
            "/api/analytics/booking-trends",
            get(analytics::get_booking_trends),
        )
        .route(
            "/api/analytics/inventory-status",
            get(analytics::get_inventory_status),
        );

    // No authentication in front of these
    let admin_routes = Router::new()
        .route("/api/admin/vehicles", post(vehicles::create_vehicle))
        .route(
            "/api/admin/vehicles/{id}",
            put(vehicles::update_vehicle).delete(vehicles::delete_vehicle),
        )
        .route("/api/admin/brands", post(brands::create_brand))
        .route(
            "/api/admin/brands/{id}",
            put(brands::update_brand).delete(brands::delete_brand),
        )
        .route("/api/admin/bookings", get(bookings::list_bookings))
        .route(
            "/api/admin/bookings/{id}",
            get(bookings::get_booking)
                .put(bookings::update_booking_status)
                .delete(bookings::delete_booking),
        );

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state);

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(metrics::track_http_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
}
