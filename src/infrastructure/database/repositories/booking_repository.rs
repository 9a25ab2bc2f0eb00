//! SeaORM implementation of BookingRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::brand_repository::brand_to_domain;
use super::db_err;
use super::vehicle_repository::vehicle_to_domain;
use crate::domain::booking::{Booking, BookingRepository, BookingStatus, NewBooking};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{booking, brand, vehicle};

// ── Conversion helpers ──────────────────────────────────────────

impl From<booking::BookingStatus> for BookingStatus {
    fn from(s: booking::BookingStatus) -> Self {
        match s {
            booking::BookingStatus::Pending => Self::Pending,
            booking::BookingStatus::Contacted => Self::Contacted,
            booking::BookingStatus::Completed => Self::Completed,
            booking::BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<BookingStatus> for booking::BookingStatus {
    fn from(s: BookingStatus) -> Self {
        match s {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Contacted => Self::Contacted,
            BookingStatus::Completed => Self::Completed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

fn booking_to_domain(b: booking::Model) -> Booking {
    Booking {
        id: b.id,
        vehicle_id: b.vehicle_id,
        customer_name: b.customer_name,
        customer_email: b.customer_email,
        customer_phone: b.customer_phone,
        message: b.message,
        status: b.status.into(),
        created_at: b.created_at,
        updated_at: b.updated_at,
        vehicle: None,
    }
}

// ── SeaOrmBookingRepository ─────────────────────────────────────

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach vehicle and brand to each booking row.
    async fn hydrate(
        &self,
        rows: Vec<(booking::Model, Option<vehicle::Model>)>,
    ) -> DomainResult<Vec<Booking>> {
        let mut brand_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, v)| v.as_ref().map(|v| v.brand_id))
            .collect();
        brand_ids.sort_unstable();
        brand_ids.dedup();

        let brands: HashMap<i32, brand::Model> = if brand_ids.is_empty() {
            HashMap::new()
        } else {
            brand::Entity::find()
                .filter(brand::Column::Id.is_in(brand_ids))
                .all(&self.db)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(|b| (b.id, b))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|(b, v)| {
                let mut booking = booking_to_domain(b);
                booking.vehicle = v.map(|v| {
                    let brand = brands.get(&v.brand_id).cloned();
                    vehicle_to_domain(v, brand)
                });
                booking
            })
            .collect())
    }
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn find_all(&self, status: Option<BookingStatus>) -> DomainResult<Vec<Booking>> {
        let mut query = booking::Entity::find().find_also_related(vehicle::Entity);
        if let Some(status) = status {
            query = query.filter(booking::Column::Status.eq(booking::BookingStatus::from(status)));
        }

        let rows = query
            .order_by_desc(booking::Column::CreatedAt)
            .order_by_desc(booking::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        self.hydrate(rows).await
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Booking>> {
        let Some(row) = booking::Entity::find_by_id(id)
            .find_also_related(vehicle::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![row]).await?.pop())
    }

    async fn create(&self, b: NewBooking) -> DomainResult<Booking> {
        let now = Utc::now();
        let model = booking::ActiveModel {
            id: NotSet,
            vehicle_id: Set(b.vehicle_id),
            customer_name: Set(b.customer_name),
            customer_email: Set(b.customer_email),
            customer_phone: Set(b.customer_phone),
            message: Set(b.message),
            status: Set(b.status.into()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Booking created: {} for vehicle {} ({})",
            result.id, result.vehicle_id, result.customer_email
        );

        self.find_by_id(result.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", result.id))
    }

    async fn update_status(&self, id: i32, status: BookingStatus) -> DomainResult<()> {
        let model = booking::ActiveModel {
            id: Set(id),
            status: Set(status.into()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found("Booking", id),
            other => db_err(other),
        })?;
        info!("Booking {} status -> {}", id, status);
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = booking::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Booking", id));
        }
        info!("Booking deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::{
        insert_booking, insert_brand, insert_vehicle, setup_db,
    };

    async fn repo_with_vehicle() -> (SeaOrmBookingRepository, i32) {
        let db = setup_db().await;
        let honda = insert_brand(&db, "Honda").await;
        let civic = insert_vehicle(&db, honda.id, "Civic", "LX", 25_200.0, "Petrol", true).await;
        (SeaOrmBookingRepository::new(db), civic.id)
    }

    #[tokio::test]
    async fn create_returns_vehicle_and_brand() {
        let (repo, vehicle_id) = repo_with_vehicle().await;
        let mut new = NewBooking::new(vehicle_id, "Sam Lee", "sam@example.com");
        new.customer_phone = "555-0100".into();

        let booking = repo.create(new).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.customer_phone, "555-0100");
        let vehicle = booking.vehicle.unwrap();
        assert_eq!(vehicle.name, "Civic");
        assert_eq!(vehicle.brand.unwrap().name, "Honda");
    }

    #[tokio::test]
    async fn find_all_filters_by_status_newest_first() {
        let (repo, vehicle_id) = repo_with_vehicle().await;
        let first = insert_booking(&repo.db, vehicle_id, booking::BookingStatus::Pending).await;
        let second = insert_booking(&repo.db, vehicle_id, booking::BookingStatus::Completed).await;
        let third = insert_booking(&repo.db, vehicle_id, booking::BookingStatus::Pending).await;

        let all = repo.find_all(None).await.unwrap();
        let ids: Vec<_> = all.iter().map(|b| b.id).collect();
        assert_eq!(ids, [third.id, second.id, first.id]);
        assert!(all.iter().all(|b| b.vehicle.as_ref().and_then(|v| v.brand.as_ref()).is_some()));

        let pending = repo.find_all(Some(BookingStatus::Pending)).await.unwrap();
        let ids: Vec<_> = pending.iter().map(|b| b.id).collect();
        assert_eq!(ids, [third.id, first.id]);

        assert!(repo
            .find_all(Some(BookingStatus::Cancelled))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn update_status_persists_any_transition() {
        let (repo, vehicle_id) = repo_with_vehicle().await;
        let row = insert_booking(&repo.db, vehicle_id, booking::BookingStatus::Completed).await;

        for status in [BookingStatus::Pending, BookingStatus::Cancelled, BookingStatus::Contacted] {
            repo.update_status(row.id, status).await.unwrap();
            let stored = repo.find_by_id(row.id).await.unwrap().unwrap();
            assert_eq!(stored.status, status);
            assert_eq!(stored.customer_name, "Jane Doe");
        }
    }

    #[tokio::test]
    async fn missing_booking_is_not_found() {
        let (repo, _) = repo_with_vehicle().await;
        assert!(repo.find_by_id(5).await.unwrap().is_none());
        assert!(matches!(
            repo.update_status(5, BookingStatus::Completed).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(5).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
