//! SeaORM implementation of BrandRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use super::vehicle_repository::vehicle_to_domain;
use crate::domain::brand::{Brand, BrandRepository, NewBrand};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{brand, vehicle};

pub(super) fn brand_to_domain(b: brand::Model) -> Brand {
    Brand {
        id: b.id,
        name: b.name,
        logo_url: b.logo_url,
        description: b.description,
        created_at: b.created_at,
        updated_at: b.updated_at,
        vehicles: None,
    }
}

pub struct SeaOrmBrandRepository {
    db: DatabaseConnection,
}

impl SeaOrmBrandRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BrandRepository for SeaOrmBrandRepository {
    async fn find_all(&self) -> DomainResult<Vec<Brand>> {
        let models = brand::Entity::find()
            .order_by_asc(brand::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(brand_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Brand>> {
        let model = brand::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(brand_to_domain))
    }

    async fn find_with_vehicles(&self, id: i32) -> DomainResult<Option<Brand>> {
        let Some(model) = brand::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let vehicles = model
            .find_related(vehicle::Entity)
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut brand = brand_to_domain(model);
        brand.vehicles = Some(
            vehicles
                .into_iter()
                .map(|v| vehicle_to_domain(v, None))
                .collect(),
        );
        Ok(Some(brand))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Brand>> {
        let model = brand::Entity::find()
            .filter(brand::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(brand_to_domain))
    }

    async fn create(&self, b: NewBrand) -> DomainResult<Brand> {
        let now = chrono::Utc::now();
        let model = brand::ActiveModel {
            id: NotSet,
            name: Set(b.name),
            logo_url: Set(b.logo_url),
            description: Set(b.description),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Brand created: {} ({})", result.name, result.id);
        Ok(brand_to_domain(result))
    }

    async fn update(&self, b: &Brand) -> DomainResult<Brand> {
        let model = brand::ActiveModel {
            id: Set(b.id),
            name: Set(b.name.clone()),
            logo_url: Set(b.logo_url.clone()),
            description: Set(b.description.clone()),
            created_at: Set(b.created_at),
            updated_at: Set(b.updated_at),
        };
        let result = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found("Brand", b.id),
            other => db_err(other),
        })?;
        info!("Brand updated: {} ({})", result.name, result.id);
        Ok(brand_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = brand::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Brand", id));
        }
        info!("Brand deleted: {}", id);
        Ok(())
    }

    async fn count_vehicles(&self, brand_id: i32) -> DomainResult<u64> {
        vehicle::Entity::find()
            .filter(vehicle::Column::BrandId.eq(brand_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::{insert_brand, insert_vehicle, setup_db};

    #[tokio::test]
    async fn create_and_find_by_name() {
        let db = setup_db().await;
        let repo = SeaOrmBrandRepository::new(db);

        let created = repo
            .create(NewBrand {
                name: "Toyota".into(),
                logo_url: "/images/brands/toyota.png".into(),
                description: "Quality and reliability leader".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let found = repo.find_by_name("Toyota").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(found.vehicles.is_none());
        assert!(repo.find_by_name("toyota").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let db = setup_db().await;
        insert_brand(&db, "Honda").await;
        let repo = SeaOrmBrandRepository::new(db);

        let err = repo.create(NewBrand::new("Honda")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn find_with_vehicles_preloads_in_id_order() {
        let db = setup_db().await;
        let ford = insert_brand(&db, "Ford").await;
        insert_vehicle(&db, ford.id, "F-150", "XLT", 42_970.0, "Petrol", true).await;
        insert_vehicle(&db, ford.id, "Mustang", "GT", 45_000.0, "Petrol", false).await;
        let repo = SeaOrmBrandRepository::new(db);

        let brand = repo.find_with_vehicles(ford.id).await.unwrap().unwrap();
        let names: Vec<_> = brand
            .vehicles
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["F-150", "Mustang"]);
        assert_eq!(repo.count_vehicles(ford.id).await.unwrap(), 2);
        assert!(repo.find_with_vehicles(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_brand_is_not_found() {
        let db = setup_db().await;
        let existing = insert_brand(&db, "Audi").await;
        let repo = SeaOrmBrandRepository::new(db);

        let mut ghost = brand_to_domain(existing);
        ghost.id = 42;
        let err = repo.update(&ghost).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let db = setup_db().await;
        let tesla = insert_brand(&db, "Tesla").await;
        let repo = SeaOrmBrandRepository::new(db);

        repo.delete(tesla.id).await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(tesla.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
