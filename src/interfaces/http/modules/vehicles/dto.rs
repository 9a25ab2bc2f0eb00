//! Vehicle API data transfer objects

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{NewVehicle, Vehicle, VehicleChanges, VehicleFilter};
use crate::interfaces::http::modules::brands::BrandResponse;
use crate::shared::PageRequest;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleResponse {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    /// Petrol, Diesel, Electric, Hybrid or any other stored value
    pub fuel_type: String,
    pub thumbnail_url: String,
    pub description: String,
    pub engine_specs: String,
    pub transmission: String,
    pub mileage: i32,
    pub exterior_color: String,
    pub interior_color: String,
    pub safety_features: String,
    pub financing_rate: f64,
    pub warranty_years: i32,
    pub dealer_info: String,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandResponse>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            brand_id: v.brand_id,
            name: v.name,
            model: v.model,
            year: v.year,
            price: v.price,
            fuel_type: v.fuel_type,
            thumbnail_url: v.thumbnail_url,
            description: v.description,
            engine_specs: v.engine_specs,
            transmission: v.transmission,
            mileage: v.mileage,
            exterior_color: v.exterior_color,
            interior_color: v.interior_color,
            safety_features: v.safety_features,
            financing_rate: v.financing_rate,
            warranty_years: v.warranty_years,
            dealer_info: v.dealer_info,
            availability: v.availability,
            created_at: v.created_at,
            updated_at: v.updated_at,
            brand: v.brand.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VehicleListResponse {
    pub vehicles: Vec<VehicleResponse>,
    /// Matches ignoring limit and offset
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Catalog query parameters.
///
/// Empty values and non-positive numbers are treated as absent.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VehicleQuery {
    #[serde(default, deserialize_with = "optional_param")]
    pub brand_id: Option<i32>,
    /// Exact, case-sensitive fuel type
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default, deserialize_with = "optional_param")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "optional_param")]
    pub max_price: Option<f64>,
    /// Case-insensitive match on vehicle name, model or brand name
    #[serde(default)]
    pub search: Option<String>,
    /// Page size, 20 by default
    #[serde(default, deserialize_with = "optional_param")]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "optional_param")]
    pub offset: Option<u64>,
}

impl VehicleQuery {
    pub fn into_filter(self) -> VehicleFilter {
        VehicleFilter {
            brand_id: self.brand_id.filter(|id| *id > 0),
            fuel_type: self.fuel_type.filter(|f| !f.is_empty()),
            min_price: self.min_price.filter(|p| *p > 0.0),
            max_price: self.max_price.filter(|p| *p > 0.0),
            search: self.search.filter(|s| !s.is_empty()),
            page: PageRequest::new(self.limit.filter(|l| *l > 0), self.offset),
        }
    }
}

/// Deserialize a query value through `FromStr`, mapping `key=` to `None`.
fn optional_param<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleRequest {
    pub brand_id: i32,
    #[validate(length(min = 1, message = "Vehicle name is required"))]
    pub name: String,
    pub model: Option<String>,
    pub year: i32,
    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "Fuel type is required"))]
    pub fuel_type: String,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub engine_specs: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i32>,
    pub exterior_color: Option<String>,
    pub interior_color: Option<String>,
    pub safety_features: Option<String>,
    pub financing_rate: Option<f64>,
    pub warranty_years: Option<i32>,
    pub dealer_info: Option<String>,
    /// Defaults to true
    pub availability: Option<bool>,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(r: CreateVehicleRequest) -> Self {
        let mut vehicle = NewVehicle::new(r.brand_id, r.name, r.year, r.price, r.fuel_type);
        vehicle.model = r.model.unwrap_or_default();
        vehicle.thumbnail_url = r.thumbnail_url.unwrap_or_default();
        vehicle.description = r.description.unwrap_or_default();
        vehicle.engine_specs = r.engine_specs.unwrap_or_default();
        vehicle.transmission = r.transmission.unwrap_or_default();
        vehicle.mileage = r.mileage.unwrap_or_default();
        vehicle.exterior_color = r.exterior_color.unwrap_or_default();
        vehicle.interior_color = r.interior_color.unwrap_or_default();
        vehicle.safety_features = r.safety_features.unwrap_or_default();
        vehicle.financing_rate = r.financing_rate.unwrap_or_default();
        vehicle.warranty_years = r.warranty_years.unwrap_or_default();
        vehicle.dealer_info = r.dealer_info.unwrap_or_default();
        vehicle.availability = r.availability.unwrap_or(true);
        vehicle
    }
}

/// Partial update; omitted fields keep their stored values.
///
/// Field rules are checked once the vehicle has been found.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleRequest {
    pub brand_id: Option<i32>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub fuel_type: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub engine_specs: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i32>,
    pub exterior_color: Option<String>,
    pub interior_color: Option<String>,
    pub safety_features: Option<String>,
    pub financing_rate: Option<f64>,
    pub warranty_years: Option<i32>,
    pub dealer_info: Option<String>,
    pub availability: Option<bool>,
}

impl From<UpdateVehicleRequest> for VehicleChanges {
    fn from(r: UpdateVehicleRequest) -> Self {
        Self {
            brand_id: r.brand_id,
            name: r.name,
            model: r.model,
            year: r.year,
            price: r.price,
            fuel_type: r.fuel_type,
            thumbnail_url: r.thumbnail_url,
            description: r.description,
            engine_specs: r.engine_specs,
            transmission: r.transmission,
            mileage: r.mileage,
            exterior_color: r.exterior_color,
            interior_color: r.interior_color,
            safety_features: r.safety_features,
            financing_rate: r.financing_rate,
            warranty_years: r.warranty_years,
            dealer_info: r.dealer_info,
            availability: r.availability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::rejection::QueryRejection;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(raw: &str) -> Result<VehicleQuery, QueryRejection> {
        let uri: Uri = format!("/api/vehicles?{}", raw).parse().unwrap();
        Query::<VehicleQuery>::try_from_uri(&uri).map(|Query(q)| q)
    }

    fn query(raw: &str) -> VehicleQuery {
        parse(raw).unwrap()
    }

    #[test]
    fn empty_query_uses_defaults() {
        let filter = query("").into_filter();
        assert_eq!(filter, VehicleFilter::default());
        assert_eq!(filter.page.limit, 20);
        assert_eq!(filter.page.offset, 0);
    }

    #[test]
    fn empty_and_non_positive_values_are_ignored() {
        let filter =
            query("brand_id=0&fuel_type=&min_price=0&max_price=-5&search=&limit=0&offset=")
                .into_filter();
        assert_eq!(filter, VehicleFilter::default());
    }

    #[test]
    fn populated_query_maps_every_field() {
        let filter = query(
            "brand_id=3&fuel_type=Electric&min_price=20000&max_price=50000.5&search=model&limit=5&offset=10",
        )
        .into_filter();
        assert_eq!(filter.brand_id, Some(3));
        assert_eq!(filter.fuel_type.as_deref(), Some("Electric"));
        assert_eq!(filter.min_price, Some(20000.0));
        assert_eq!(filter.max_price, Some(50000.5));
        assert_eq!(filter.search.as_deref(), Some("model"));
        assert_eq!(filter.page, PageRequest::new(Some(5), Some(10)));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(parse("limit=abc").is_err());
        assert!(parse("brand_id=x").is_err());
    }

    #[test]
    fn create_request_defaults_availability_to_true() {
        let req: CreateVehicleRequest = serde_json::from_value(serde_json::json!({
            "brand_id": 1,
            "name": "Camry",
            "year": 2024,
            "price": 28000.0,
            "fuel_type": "Petrol"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        let vehicle = NewVehicle::from(req);
        assert!(vehicle.availability);
        assert_eq!(vehicle.model, "");
    }

    #[test]
    fn negative_price_fails_validation() {
        let req: CreateVehicleRequest = serde_json::from_value(serde_json::json!({
            "brand_id": 1,
            "name": "Camry",
            "year": 2024,
            "price": -1.0,
            "fuel_type": "Petrol"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn brand_is_omitted_when_not_loaded() {
        let now = Utc::now();
        let mut vehicle = NewVehicle::new(1, "Camry", 2024, 28000.0, "Petrol");
        vehicle.model = "LE".into();
        let vehicle = Vehicle {
            id: 1,
            brand_id: vehicle.brand_id,
            name: vehicle.name,
            model: vehicle.model,
            year: vehicle.year,
            price: vehicle.price,
            fuel_type: vehicle.fuel_type,
            thumbnail_url: vehicle.thumbnail_url,
            description: vehicle.description,
            engine_specs: vehicle.engine_specs,
            transmission: vehicle.transmission,
            mileage: vehicle.mileage,
            exterior_color: vehicle.exterior_color,
            interior_color: vehicle.interior_color,
            safety_features: vehicle.safety_features,
            financing_rate: vehicle.financing_rate,
            warranty_years: vehicle.warranty_years,
            dealer_info: vehicle.dealer_info,
            availability: vehicle.availability,
            created_at: now,
            updated_at: now,
            brand: None,
        };
        let json = serde_json::to_value(VehicleResponse::from(vehicle)).unwrap();
        assert!(json.get("brand").is_none());
        assert_eq!(json["model"], "LE");
    }
}
