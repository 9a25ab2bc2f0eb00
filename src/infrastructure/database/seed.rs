//! Demo catalog inserted into an empty database

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, Set,
    TransactionTrait,
};
use tracing::info;

use super::entities::{brand, vehicle};

struct SeedBrand {
    name: &'static str,
    logo: &'static str,
    description: &'static str,
}

struct SeedVehicle {
    brand: &'static str,
    name: &'static str,
    model: &'static str,
    price: f64,
    fuel_type: &'static str,
    thumbnail: &'static str,
    description: &'static str,
    engine_specs: &'static str,
    transmission: &'static str,
    mileage: i32,
    exterior_color: &'static str,
    interior_color: &'static str,
    safety_features: &'static str,
    financing_rate: f64,
    warranty_years: i32,
    dealer_info: &'static str,
}

const SEED_YEAR: i32 = 2024;

const BRANDS: &[SeedBrand] = &[
    SeedBrand { name: "Toyota", logo: "toyota", description: "Quality and reliability leader" },
    SeedBrand { name: "Honda", logo: "honda", description: "Innovation and efficiency" },
    SeedBrand { name: "Ford", logo: "ford", description: "Built tough, built to last" },
    SeedBrand { name: "BMW", logo: "bmw", description: "The ultimate driving machine" },
    SeedBrand { name: "Mercedes-Benz", logo: "mercedes", description: "The best or nothing" },
    SeedBrand { name: "Audi", logo: "audi", description: "Vorsprung durch Technik" },
    SeedBrand {
        name: "Tesla",
        logo: "tesla",
        description: "Accelerating the world's transition to sustainable energy",
    },
    SeedBrand { name: "Volkswagen", logo: "volkswagen", description: "Das Auto" },
];

const VEHICLES: &[SeedVehicle] = &[
    SeedVehicle {
        brand: "Toyota",
        name: "Camry",
        model: "LE",
        price: 28_750.0,
        fuel_type: "Petrol",
        thumbnail: "toyota-camry-2024",
        description: "Reliable midsize sedan",
        engine_specs: "2.5L 4-Cylinder",
        transmission: "8-Speed Automatic",
        mileage: 32,
        exterior_color: "Midnight Black",
        interior_color: "Black Fabric",
        safety_features: "Toyota Safety Sense 2.0",
        financing_rate: 2.9,
        warranty_years: 3,
        dealer_info: "Downtown Toyota - (555) 123-4567",
    },
    SeedVehicle {
        brand: "Toyota",
        name: "Prius",
        model: "LE",
        price: 27_450.0,
        fuel_type: "Hybrid",
        thumbnail: "toyota-prius-2024",
        description: "Most fuel-efficient hybrid",
        engine_specs: "1.8L Hybrid",
        transmission: "CVT",
        mileage: 58,
        exterior_color: "Blue Crush",
        interior_color: "Black SofTex",
        safety_features: "Toyota Safety Sense 2.0",
        financing_rate: 2.4,
        warranty_years: 3,
        dealer_info: "Downtown Toyota - (555) 123-4567",
    },
    SeedVehicle {
        brand: "Honda",
        name: "Civic",
        model: "LX",
        price: 25_200.0,
        fuel_type: "Petrol",
        thumbnail: "honda-civic-2024",
        description: "Compact car with style",
        engine_specs: "2.0L 4-Cylinder",
        transmission: "CVT",
        mileage: 35,
        exterior_color: "Sonic Gray",
        interior_color: "Black Cloth",
        safety_features: "Honda Sensing",
        financing_rate: 3.1,
        warranty_years: 3,
        dealer_info: "Metro Honda - (555) 234-5678",
    },
    SeedVehicle {
        brand: "BMW",
        name: "3 Series",
        model: "330i",
        price: 45_950.0,
        fuel_type: "Petrol",
        thumbnail: "bmw-3series-2024",
        description: "Ultimate sport sedan",
        engine_specs: "2.0L TwinPower Turbo",
        transmission: "8-Speed Automatic",
        mileage: 28,
        exterior_color: "Alpine White",
        interior_color: "Black Sensatec",
        safety_features: "BMW Active Guard",
        financing_rate: 3.9,
        warranty_years: 4,
        dealer_info: "Luxury BMW - (555) 345-6789",
    },
    SeedVehicle {
        brand: "Tesla",
        name: "Model 3",
        model: "Long Range",
        price: 47_740.0,
        fuel_type: "Electric",
        thumbnail: "tesla-model3-2024",
        description: "Premium electric sedan",
        engine_specs: "Dual Motor AWD",
        transmission: "Single-Speed",
        mileage: 358,
        exterior_color: "Pearl White",
        interior_color: "Black Premium",
        safety_features: "Autopilot Included",
        financing_rate: 2.99,
        warranty_years: 4,
        dealer_info: "Tesla Service Center - (555) 456-7890",
    },
    SeedVehicle {
        brand: "Ford",
        name: "F-150",
        model: "XLT",
        price: 42_970.0,
        fuel_type: "Petrol",
        thumbnail: "ford-f150-2024",
        description: "America's best-selling truck",
        engine_specs: "3.3L V6",
        transmission: "10-Speed Automatic",
        mileage: 24,
        exterior_color: "Oxford White",
        interior_color: "Medium Earth Gray",
        safety_features: "Ford Co-Pilot360",
        financing_rate: 3.5,
        warranty_years: 3,
        dealer_info: "Ford Country - (555) 567-8901",
    },
    SeedVehicle {
        brand: "Mercedes-Benz",
        name: "C-Class",
        model: "C300",
        price: 47_850.0,
        fuel_type: "Petrol",
        thumbnail: "mercedes-c300-2024",
        description: "Luxury redefined",
        engine_specs: "2.0L Turbo",
        transmission: "9G-TRONIC",
        mileage: 26,
        exterior_color: "Obsidian Black",
        interior_color: "Black Artico",
        safety_features: "Mercedes-Benz Intelligent Drive",
        financing_rate: 4.2,
        warranty_years: 4,
        dealer_info: "Mercedes-Benz Elite - (555) 678-9012",
    },
    SeedVehicle {
        brand: "Audi",
        name: "A4",
        model: "Premium",
        price: 43_800.0,
        fuel_type: "Petrol",
        thumbnail: "audi-a4-2024",
        description: "Progressive luxury sedan",
        engine_specs: "2.0L TFSI",
        transmission: "7-Speed S tronic",
        mileage: 29,
        exterior_color: "Brilliant Black",
        interior_color: "Black Fine Nappa",
        safety_features: "Audi pre sense",
        financing_rate: 3.8,
        warranty_years: 4,
        dealer_info: "Audi Prestige - (555) 789-0123",
    },
];

/// Insert the demo brands and vehicles if the brands table is empty.
/// Returns whether anything was inserted.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<bool, DbErr> {
    if brand::Entity::find().count(db).await? > 0 {
        info!("Database already seeded");
        return Ok(false);
    }

    let now = Utc::now();
    let txn = db.begin().await?;

    let mut brand_ids = HashMap::with_capacity(BRANDS.len());
    for b in BRANDS {
        let model = brand::ActiveModel {
            id: NotSet,
            name: Set(b.name.to_string()),
            logo_url: Set(format!("/images/brands/{}.png", b.logo)),
            description: Set(b.description.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
        brand_ids.insert(b.name, model.id);
    }

    for v in VEHICLES {
        let brand_id = *brand_ids.get(v.brand).ok_or_else(|| {
            DbErr::Custom(format!("Seed vehicle references unknown brand {}", v.brand))
        })?;

        vehicle::ActiveModel {
            id: NotSet,
            brand_id: Set(brand_id),
            name: Set(v.name.to_string()),
            model: Set(v.model.to_string()),
            year: Set(SEED_YEAR),
            price: Set(v.price),
            fuel_type: Set(v.fuel_type.to_string()),
            thumbnail_url: Set(format!("/images/vehicles/{}.jpg", v.thumbnail)),
            description: Set(v.description.to_string()),
            engine_specs: Set(v.engine_specs.to_string()),
            transmission: Set(v.transmission.to_string()),
            mileage: Set(v.mileage),
            exterior_color: Set(v.exterior_color.to_string()),
            interior_color: Set(v.interior_color.to_string()),
            safety_features: Set(v.safety_features.to_string()),
            financing_rate: Set(v.financing_rate),
            warranty_years: Set(v.warranty_years),
            dealer_info: Set(v.dealer_info.to_string()),
            availability: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    info!(
        "Database seeded with {} brands and {} vehicles",
        BRANDS.len(),
        VEHICLES.len()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::{insert_brand, setup_db};

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let db = setup_db().await;

        assert!(seed_catalog(&db).await.unwrap());
        assert!(!seed_catalog(&db).await.unwrap());

        assert_eq!(brand::Entity::find().count(&db).await.unwrap(), 8);
        assert_eq!(vehicle::Entity::find().count(&db).await.unwrap(), 8);

        let model3 = vehicle::Entity::find_by_id(5).one(&db).await.unwrap().unwrap();
        assert_eq!(model3.name, "Model 3");
        assert_eq!(model3.brand_id, 7);
    }

    #[tokio::test]
    async fn existing_brand_skips_seeding() {
        let db = setup_db().await;
        insert_brand(&db, "Lada").await;

        assert!(!seed_catalog(&db).await.unwrap());
        assert_eq!(vehicle::Entity::find().count(&db).await.unwrap(), 0);
    }
}
