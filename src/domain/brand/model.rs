//! Brand domain entity

use chrono::{DateTime, Utc};

use crate::domain::vehicle::Vehicle;
use crate::domain::{DomainError, DomainResult};

/// A vehicle manufacturer. Names are unique across the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub logo_url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only populated when the brand was fetched together with its vehicles
    pub vehicles: Option<Vec<Vehicle>>,
}

impl Brand {
    /// Merge the fields present in `changes` onto this brand.
    pub fn apply(&mut self, changes: BrandChanges) -> DomainResult<()> {
        if let Some(name) = changes.name {
            self.name = validate_name(name)?;
        }
        if let Some(logo_url) = changes.logo_url {
            self.logo_url = logo_url;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Data for a brand that does not exist yet
#[derive(Debug, Clone, Default)]
pub struct NewBrand {
    pub name: String,
    pub logo_url: String,
    pub description: String,
}

impl NewBrand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn validate(mut self) -> DomainResult<Self> {
        self.name = validate_name(self.name)?;
        Ok(self)
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct BrandChanges {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

fn validate_name(name: String) -> DomainResult<String> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("Brand name is required".into()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toyota() -> Brand {
        let now = Utc::now();
        Brand {
            id: 1,
            name: "Toyota".into(),
            logo_url: "/images/brands/toyota.png".into(),
            description: "Quality and reliability leader".into(),
            created_at: now,
            updated_at: now,
            vehicles: None,
        }
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut brand = toyota();
        brand
            .apply(BrandChanges {
                description: Some("Let's go places".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(brand.name, "Toyota");
        assert_eq!(brand.logo_url, "/images/brands/toyota.png");
        assert_eq!(brand.description, "Let's go places");
    }

    #[test]
    fn apply_rejects_blank_name() {
        let mut brand = toyota();
        let err = brand
            .apply(BrandChanges {
                name: Some("   ".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(brand.name, "Toyota");
    }

    #[test]
    fn new_brand_requires_name() {
        assert!(NewBrand::new("").validate().is_err());
        assert!(NewBrand::new("Honda").validate().is_ok());
    }
}
