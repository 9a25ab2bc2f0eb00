//! In-memory database and row factories for repository tests

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};
use sea_orm_migration::MigratorTrait;

use super::entities::{booking, brand, vehicle};
use super::migrator::Migrator;
use super::{init_database, DatabaseConfig};

/// Fresh migrated in-memory database
pub async fn setup_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

pub async fn insert_brand(db: &DatabaseConnection, name: &str) -> brand::Model {
    let now = Utc::now();
    brand::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        logo_url: Set(format!("/images/brands/{}.png", name.to_lowercase())),
        description: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("insert brand")
}

/// Vehicle with the given searchable fields; everything else defaulted
pub async fn insert_vehicle(
    db: &DatabaseConnection,
    brand_id: i32,
    name: &str,
    model: &str,
    price: f64,
    fuel_type: &str,
    availability: bool,
) -> vehicle::Model {
    let now = Utc::now();
    vehicle::ActiveModel {
        id: NotSet,
        brand_id: Set(brand_id),
        name: Set(name.to_string()),
        model: Set(model.to_string()),
        year: Set(2024),
        price: Set(price),
        fuel_type: Set(fuel_type.to_string()),
        thumbnail_url: Set(String::new()),
        description: Set(String::new()),
        engine_specs: Set(String::new()),
        transmission: Set(String::new()),
        mileage: Set(0),
        exterior_color: Set(String::new()),
        interior_color: Set(String::new()),
        safety_features: Set(String::new()),
        financing_rate: Set(0.0),
        warranty_years: Set(0),
        dealer_info: Set(String::new()),
        availability: Set(availability),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("insert vehicle")
}

pub async fn insert_booking(
    db: &DatabaseConnection,
    vehicle_id: i32,
    status: booking::BookingStatus,
) -> booking::Model {
    insert_booking_at(db, vehicle_id, status, Utc::now()).await
}

pub async fn insert_booking_at(
    db: &DatabaseConnection,
    vehicle_id: i32,
    status: booking::BookingStatus,
    now: DateTime<Utc>,
) -> booking::Model {
    booking::ActiveModel {
        id: NotSet,
        vehicle_id: Set(vehicle_id),
        customer_name: Set("Jane Doe".to_string()),
        customer_email: Set("jane@example.com".to_string()),
        customer_phone: Set(String::new()),
        message: Set(String::new()),
        status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("insert booking")
}
