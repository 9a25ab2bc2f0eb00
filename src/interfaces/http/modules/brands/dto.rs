//! Brand API data transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Brand, BrandChanges, NewBrand};
use crate::interfaces::http::modules::vehicles::VehicleResponse;

/// Brand without its vehicles
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BrandResponse {
    pub id: i32,
    pub name: String,
    pub logo_url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Brand> for BrandResponse {
    fn from(b: Brand) -> Self {
        Self {
            id: b.id,
            name: b.name,
            logo_url: b.logo_url,
            description: b.description,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Brand with the vehicles it owns
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BrandDetailResponse {
    pub id: i32,
    pub name: String,
    pub logo_url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub vehicles: Vec<VehicleResponse>,
}

impl From<Brand> for BrandDetailResponse {
    fn from(mut b: Brand) -> Self {
        let vehicles = b
            .vehicles
            .take()
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();
        let brand = BrandResponse::from(b);
        Self {
            id: brand.id,
            name: brand.name,
            logo_url: brand.logo_url,
            description: brand.description,
            created_at: brand.created_at,
            updated_at: brand.updated_at,
            vehicles,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, message = "Brand name is required"))]
    pub name: String,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

impl From<CreateBrandRequest> for NewBrand {
    fn from(r: CreateBrandRequest) -> Self {
        Self {
            name: r.name,
            logo_url: r.logo_url.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
        }
    }
}

/// Partial update; omitted fields keep their stored values.
///
/// Field rules are checked once the brand has been found.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateBrandRequest> for BrandChanges {
    fn from(r: UpdateBrandRequest) -> Self {
        Self {
            name: r.name,
            logo_url: r.logo_url,
            description: r.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> Brand {
        let now = Utc::now();
        Brand {
            id: 1,
            name: "Toyota".into(),
            logo_url: String::new(),
            description: "Japanese automotive manufacturer".into(),
            created_at: now,
            updated_at: now,
            vehicles: None,
        }
    }

    #[test]
    fn list_response_has_no_vehicles_key() {
        let json = serde_json::to_value(BrandResponse::from(brand())).unwrap();
        assert_eq!(json["name"], "Toyota");
        assert!(json.get("vehicles").is_none());
    }

    #[test]
    fn detail_response_always_lists_vehicles() {
        let json = serde_json::to_value(BrandDetailResponse::from(brand())).unwrap();
        assert_eq!(json["vehicles"], serde_json::json!([]));
    }

    #[test]
    fn create_request_defaults_optional_fields() {
        let req: CreateBrandRequest = serde_json::from_str(r#"{"name":"Kia"}"#).unwrap();
        assert!(req.validate().is_ok());
        let new_brand = NewBrand::from(req);
        assert_eq!(new_brand.logo_url, "");
        assert_eq!(new_brand.description, "");
    }

    #[test]
    fn empty_name_fails_validation() {
        let req: CreateBrandRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
