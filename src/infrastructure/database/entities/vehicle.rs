//! Vehicle entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub brand_id: i32,
    pub name: String,
    pub model: String,
    pub year: i32,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    /// Petrol, Diesel, Electric, Hybrid (not constrained)
    pub fuel_type: String,

    pub thumbnail_url: String,
    pub description: String,
    pub engine_specs: String,
    pub transmission: String,
    pub mileage: i32,
    pub exterior_color: String,
    pub interior_color: String,
    pub safety_features: String,

    #[sea_orm(column_type = "Double")]
    pub financing_rate: f64,

    pub warranty_years: i32,
    pub dealer_info: String,
    pub availability: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id",
        on_delete = "Restrict"
    )]
    Brand,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
