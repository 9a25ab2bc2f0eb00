//! SeaORM implementation of VehicleRepository
//!
//! The catalog search builds one `Condition` from the filter and applies it
//! to both the page query and the count query, so `total` always agrees
//! with the listed rows.

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType,
    NotSet, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::brand_repository::brand_to_domain;
use super::db_err;
use crate::domain::vehicle::{NewVehicle, Vehicle, VehicleFilter, VehicleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{brand, vehicle};
use crate::shared::Page;

pub(super) fn vehicle_to_domain(v: vehicle::Model, b: Option<brand::Model>) -> Vehicle {
    Vehicle {
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
        brand: b.map(brand_to_domain),
    }
}

/// WHERE clause for the public catalog. Expects `brands` to be joined.
fn catalog_condition(filter: &VehicleFilter) -> Condition {
    let mut cond = Condition::all().add(vehicle::Column::Availability.eq(true));

    if let Some(brand_id) = filter.brand_id {
        cond = cond.add(vehicle::Column::BrandId.eq(brand_id));
    }
    if let Some(fuel_type) = &filter.fuel_type {
        cond = cond.add(vehicle::Column::FuelType.eq(fuel_type.as_str()));
    }
    if let Some(min_price) = filter.min_price {
        cond = cond.add(vehicle::Column::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        cond = cond.add(vehicle::Column::Price.lte(max_price));
    }
    if let Some(pattern) = filter.search_pattern() {
        let lower_like = |col: Expr| Expr::expr(Func::lower(col)).like(pattern.clone());
        cond = cond.add(
            Condition::any()
                .add(lower_like(Expr::col((vehicle::Entity, vehicle::Column::Name))))
                .add(lower_like(Expr::col((vehicle::Entity, vehicle::Column::Model))))
                .add(lower_like(Expr::col((brand::Entity, brand::Column::Name)))),
        );
    }

    cond
}

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_with_brand(&self, id: i32) -> DomainResult<Option<Vehicle>> {
        let row = vehicle::Entity::find_by_id(id)
            .find_also_related(brand::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(row.map(|(v, b)| vehicle_to_domain(v, b)))
    }
}

fn to_active_model(v: &NewVehicle) -> vehicle::ActiveModel {
    let now = chrono::Utc::now();
    vehicle::ActiveModel {
        id: NotSet,
        brand_id: Set(v.brand_id),
        name: Set(v.name.clone()),
        model: Set(v.model.clone()),
        year: Set(v.year),
        price: Set(v.price),
        fuel_type: Set(v.fuel_type.clone()),
        thumbnail_url: Set(v.thumbnail_url.clone()),
        description: Set(v.description.clone()),
        engine_specs: Set(v.engine_specs.clone()),
        transmission: Set(v.transmission.clone()),
        mileage: Set(v.mileage),
        exterior_color: Set(v.exterior_color.clone()),
        interior_color: Set(v.interior_color.clone()),
        safety_features: Set(v.safety_features.clone()),
        financing_rate: Set(v.financing_rate),
        warranty_years: Set(v.warranty_years),
        dealer_info: Set(v.dealer_info.clone()),
        availability: Set(v.availability),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn search(&self, filter: &VehicleFilter) -> DomainResult<Page<Vehicle>> {
        let cond = catalog_condition(filter);
        debug!("Vehicle search: {:?}", filter);

        let rows = vehicle::Entity::find()
            .find_also_related(brand::Entity)
            .filter(cond.clone())
            .order_by_asc(vehicle::Column::Id)
            .limit(filter.page.limit)
            .offset(filter.page.offset)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let total = vehicle::Entity::find()
            .join(JoinType::LeftJoin, vehicle::Relation::Brand.def())
            .filter(cond)
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let items = rows
            .into_iter()
            .map(|(v, b)| vehicle_to_domain(v, b))
            .collect();
        Ok(Page::new(items, total, filter.page))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vehicle>> {
        self.find_with_brand(id).await
    }

    async fn create(&self, v: NewVehicle) -> DomainResult<Vehicle> {
        let result = to_active_model(&v)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        info!("Vehicle created: {} ({})", result.name, result.id);

        self.find_with_brand(result.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vehicle", result.id))
    }

    async fn update(&self, v: &Vehicle) -> DomainResult<Vehicle> {
        let model = vehicle::ActiveModel {
            id: Set(v.id),
            brand_id: Set(v.brand_id),
            name: Set(v.name.clone()),
            model: Set(v.model.clone()),
            year: Set(v.year),
            price: Set(v.price),
            fuel_type: Set(v.fuel_type.clone()),
            thumbnail_url: Set(v.thumbnail_url.clone()),
            description: Set(v.description.clone()),
            engine_specs: Set(v.engine_specs.clone()),
            transmission: Set(v.transmission.clone()),
            mileage: Set(v.mileage),
            exterior_color: Set(v.exterior_color.clone()),
            interior_color: Set(v.interior_color.clone()),
            safety_features: Set(v.safety_features.clone()),
            financing_rate: Set(v.financing_rate),
            warranty_years: Set(v.warranty_years),
            dealer_info: Set(v.dealer_info.clone()),
            availability: Set(v.availability),
            created_at: Set(v.created_at),
            updated_at: Set(v.updated_at),
        };
        model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found("Vehicle", v.id),
            other => db_err(other),
        })?;
        info!("Vehicle updated: {} ({})", v.name, v.id);

        self.find_with_brand(v.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Vehicle", v.id))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = vehicle::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Vehicle", id));
        }
        info!("Vehicle deleted: {}", id);
        Ok(())
    }
}
