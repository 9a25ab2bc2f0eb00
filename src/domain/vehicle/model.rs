//! Vehicle domain entity

use chrono::{DateTime, Utc};

use crate::domain::brand::Brand;
use crate::domain::{DomainError, DomainResult};

/// A vehicle in the dealership inventory
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub fuel_type: String,
    pub thumbnail_url: String,
    pub description: String,
    pub engine_specs: String,
    pub transmission: String,
    /// Fuel economy in mpg, or range in miles for electric vehicles
    pub mileage: i32,
    pub exterior_color: String,
    pub interior_color: String,
    pub safety_features: String,
    /// Annual percentage rate
    pub financing_rate: f64,
    pub warranty_years: i32,
    pub dealer_info: String,
    /// Unavailable vehicles are hidden from the catalog and cannot be booked
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub brand: Option<Brand>,
}

impl Vehicle {
    pub fn is_bookable(&self) -> bool {
        self.availability
    }

    /// Merge the fields present in `changes` onto this vehicle.
    pub fn apply(&mut self, changes: VehicleChanges) -> DomainResult<()> {
        let VehicleChanges {
            brand_id,
            name,
            model,
            year,
            price,
            fuel_type,
            thumbnail_url,
            description,
            engine_specs,
            transmission,
            mileage,
            exterior_color,
            interior_color,
            safety_features,
            financing_rate,
            warranty_years,
            dealer_info,
            availability,
        } = changes;

        if let Some(brand_id) = brand_id {
            if brand_id != self.brand_id {
                // The loaded brand no longer matches
                self.brand = None;
            }
            self.brand_id = brand_id;
        }
        if let Some(name) = name {
            self.name = required("name", name)?;
        }
        if let Some(fuel_type) = fuel_type {
            self.fuel_type = required("fuel_type", fuel_type)?;
        }
        if let Some(price) = price {
            self.price = validate_price(price)?;
        }
        if let Some(year) = year {
            self.year = year;
        }

        merge(&mut self.model, model);
        merge(&mut self.thumbnail_url, thumbnail_url);
        merge(&mut self.description, description);
        merge(&mut self.engine_specs, engine_specs);
        merge(&mut self.transmission, transmission);
        merge(&mut self.mileage, mileage);
        merge(&mut self.exterior_color, exterior_color);
        merge(&mut self.interior_color, interior_color);
        merge(&mut self.safety_features, safety_features);
        merge(&mut self.financing_rate, financing_rate);
        merge(&mut self.warranty_years, warranty_years);
        merge(&mut self.dealer_info, dealer_info);
        merge(&mut self.availability, availability);

        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Data for a vehicle that does not exist yet
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub brand_id: i32,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
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
}

impl NewVehicle {
    /// Vehicle with the required fields set and every optional field empty.
    pub fn new(
        brand_id: i32,
        name: impl Into<String>,
        year: i32,
        price: f64,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            brand_id,
            name: name.into(),
            model: String::new(),
            year,
            price,
            fuel_type: fuel_type.into(),
            thumbnail_url: String::new(),
            description: String::new(),
            engine_specs: String::new(),
            transmission: String::new(),
            mileage: 0,
            exterior_color: String::new(),
            interior_color: String::new(),
            safety_features: String::new(),
            financing_rate: 0.0,
            warranty_years: 0,
            dealer_info: String::new(),
            availability: true,
        }
    }

    pub fn validate(mut self) -> DomainResult<Self> {
        self.name = required("name", self.name)?;
        self.fuel_type = required("fuel_type", self.fuel_type)?;
        self.price = validate_price(self.price)?;
        Ok(self)
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
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

fn merge<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn required(field: &str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("Vehicle {} is required", field)));
    }
    Ok(value)
}

fn validate_price(price: f64) -> DomainResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::Validation(
            "Vehicle price must be a non-negative number".into(),
        ));
    }
    Ok(price)
}
