//! SeaORM implementation of AnalyticsRepository
//!
//! Every report is a handful of independent aggregate queries; nothing is
//! cached between calls.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use super::{count, db_err};
use crate::domain::analytics::{
    AnalyticsRepository, DailyBookings, HighDemandVehicle, InventoryStatus, InventorySummary,
    PopularVehicle, PriceRange,
};
use crate::domain::{BookingStatus, DomainError, DomainResult};
use crate::infrastructure::database::entities::{booking, brand, vehicle};

#[derive(Debug, FromQueryResult)]
struct VehicleBookings {
    vehicle_id: i32,
    vehicle_name: String,
    brand_name: String,
    booking_count: i64,
    price: f64,
}

fn booking_count() -> SimpleExpr {
    Expr::col((booking::Entity, booking::Column::Id)).count()
}

fn booking_day() -> SimpleExpr {
    Expr::cust("DATE(bookings.created_at)")
}

fn into_counts(rows: Vec<(String, i64)>) -> BTreeMap<String, u64> {
    rows.into_iter().map(|(k, n)| (k, count(n))).collect()
}

pub struct SeaOrmAnalyticsRepository {
    db: DatabaseConnection,
}

impl SeaOrmAnalyticsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnalyticsRepository for SeaOrmAnalyticsRepository {
    async fn summary(&self) -> DomainResult<InventorySummary> {
        let total_vehicles = vehicle::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let by_brand: Vec<(String, i64)> = vehicle::Entity::find()
            .select_only()
            .column_as(brand::Column::Name, "brand_name")
            .column_as(Expr::col((vehicle::Entity, vehicle::Column::Id)).count(), "count")
            .join(JoinType::InnerJoin, vehicle::Relation::Brand.def())
            .group_by(brand::Column::Name)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let by_fuel: Vec<(String, i64)> = vehicle::Entity::find()
            .select_only()
            .column(vehicle::Column::FuelType)
            .column_as(Expr::col((vehicle::Entity, vehicle::Column::Id)).count(), "count")
            .group_by(vehicle::Column::FuelType)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let total_bookings = booking::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let by_status: Vec<(String, i64)> = booking::Entity::find()
            .select_only()
            .column(booking::Column::Status)
            .column_as(booking_count(), "count")
            .group_by(booking::Column::Status)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let price = Expr::col((vehicle::Entity, vehicle::Column::Price));
        let stats: Option<(Option<f64>, Option<f64>, Option<f64>)> = vehicle::Entity::find()
            .select_only()
            .column_as(SimpleExpr::from(Func::avg(price.clone())), "average")
            .column_as(SimpleExpr::from(Func::min(price.clone())), "min_price")
            .column_as(SimpleExpr::from(Func::max(price)), "max_price")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let (average, min, max) = stats.unwrap_or_default();

        Ok(InventorySummary {
            total_vehicles,
            vehicles_by_brand: into_counts(by_brand),
            vehicles_by_fuel: into_counts(by_fuel),
            total_bookings,
            bookings_by_status: into_counts(by_status),
            average_price: average.unwrap_or(0.0),
            price_range: PriceRange {
                min: min.unwrap_or(0.0),
                max: max.unwrap_or(0.0),
            },
        })
    }

    async fn popular_vehicles(&self, limit: u64) -> DomainResult<Vec<PopularVehicle>> {
        let rows = booking::Entity::find()
            .select_only()
            .column_as(vehicle::Column::Id, "vehicle_id")
            .column_as(vehicle::Column::Name, "vehicle_name")
            .column_as(brand::Column::Name, "brand_name")
            .column_as(booking_count(), "booking_count")
            .column_as(vehicle::Column::Price, "price")
            .join(JoinType::InnerJoin, booking::Relation::Vehicle.def())
            .join(JoinType::InnerJoin, vehicle::Relation::Brand.def())
            .group_by(vehicle::Column::Id)
            .group_by(vehicle::Column::Name)
            .group_by(brand::Column::Name)
            .group_by(vehicle::Column::Price)
            .order_by_desc(booking_count())
            .order_by_asc(vehicle::Column::Id)
            .limit(limit)
            .into_model::<VehicleBookings>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| PopularVehicle {
                vehicle_id: r.vehicle_id,
                vehicle_name: r.vehicle_name,
                brand_name: r.brand_name,
                booking_count: count(r.booking_count),
                price: r.price,
            })
            .collect())
    }

    async fn booking_trends(&self, days: u64) -> DomainResult<Vec<DailyBookings>> {
        let rows: Vec<(String, i64)> = booking::Entity::find()
            .select_only()
            .column_as(booking_day(), "date")
            .column_as(booking_count(), "count")
            .group_by(booking_day())
            .order_by_desc(booking_day())
            .limit(days)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        rows.into_iter()
            .map(|(date, n)| {
                let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                    DomainError::Storage(format!("Unexpected booking date '{}': {}", date, e))
                })?;
                Ok(DailyBookings {
                    date,
                    count: count(n),
                })
            })
            .collect()
    }

    async fn inventory_status(&self, threshold: i64) -> DomainResult<InventoryStatus> {
        let available_vehicles = vehicle::Entity::find()
            .filter(vehicle::Column::Availability.eq(true))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        let unavailable_vehicles = vehicle::Entity::find()
            .filter(vehicle::Column::Availability.eq(false))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let open_statuses: Vec<&str> = BookingStatus::ALL
            .iter()
            .filter(|s| s.is_open())
            .map(|s| s.as_str())
            .collect();

        let rows: Vec<(i32, String, String, i64)> = booking::Entity::find()
            .select_only()
            .column_as(vehicle::Column::Id, "vehicle_id")
            .column_as(vehicle::Column::Name, "vehicle_name")
            .column_as(brand::Column::Name, "brand_name")
            .column_as(booking_count(), "booking_count")
            .join(JoinType::InnerJoin, booking::Relation::Vehicle.def())
            .join(JoinType::InnerJoin, vehicle::Relation::Brand.def())
            .filter(booking::Column::Status.is_in(open_statuses))
            .group_by(vehicle::Column::Id)
            .group_by(vehicle::Column::Name)
            .group_by(brand::Column::Name)
            .having(Expr::expr(booking_count()).gt(threshold))
            .order_by_desc(booking_count())
            .order_by_asc(vehicle::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let high_demand_vehicles = rows
            .into_iter()
            .map(
                |(vehicle_id, vehicle_name, brand_name, n)| HighDemandVehicle {
                    vehicle_id,
                    vehicle_name,
                    brand_name,
                    booking_count: count(n),
                },
            )
            .collect();

        Ok(InventoryStatus {
            available_vehicles,
            unavailable_vehicles,
            high_demand_vehicles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{HIGH_DEMAND_THRESHOLD, POPULAR_VEHICLES_LIMIT, TREND_DAYS};
    use crate::infrastructure::database::entities::booking::BookingStatus as Status;
    use crate::infrastructure::database::testing::{
        insert_booking, insert_booking_at, insert_brand, insert_vehicle, setup_db,
    };

    #[tokio::test]
    async fn summary_of_empty_store_is_zeroed() {
        let repo = SeaOrmAnalyticsRepository::new(setup_db().await);
        let summary = repo.summary().await.unwrap();
        assert_eq!(summary, InventorySummary::default());
    }

    #[tokio::test]
    async fn summary_breakdowns_sum_to_totals() {
        let db = setup_db().await;
        let toyota = insert_brand(&db, "Toyota").await;
        let tesla = insert_brand(&db, "Tesla").await;
        insert_brand(&db, "Audi").await;
        let camry = insert_vehicle(&db, toyota.id, "Camry", "LE", 20_000.0, "Petrol", true).await;
        insert_vehicle(&db, toyota.id, "Prius", "LE", 30_000.0, "Hybrid", false).await;
        insert_vehicle(&db, tesla.id, "Model 3", "LR", 40_000.0, "Electric", true).await;
        insert_booking(&db, camry.id, Status::Pending).await;
        insert_booking(&db, camry.id, Status::Pending).await;
        insert_booking(&db, camry.id, Status::Completed).await;
        let repo = SeaOrmAnalyticsRepository::new(db);

        let s = repo.summary().await.unwrap();

        assert_eq!(s.total_vehicles, 3);
        assert_eq!(s.vehicles_by_brand.get("Toyota"), Some(&2));
        assert_eq!(s.vehicles_by_brand.get("Tesla"), Some(&1));
        assert!(!s.vehicles_by_brand.contains_key("Audi"));
        assert_eq!(s.vehicles_by_brand.values().sum::<u64>(), s.total_vehicles);
        assert_eq!(s.vehicles_by_fuel.len(), 3);

        assert_eq!(s.total_bookings, 3);
        assert_eq!(s.bookings_by_status.get("pending"), Some(&2));
        assert_eq!(s.bookings_by_status.get("completed"), Some(&1));
        assert_eq!(s.bookings_by_status.values().sum::<u64>(), s.total_bookings);

        assert_eq!(s.average_price, 30_000.0);
        assert_eq!(s.price_range, PriceRange { min: 20_000.0, max: 40_000.0 });
    }

    #[tokio::test]
    async fn popular_vehicles_ranked_by_bookings() {
        let db = setup_db().await;
        let bmw = insert_brand(&db, "BMW").await;
        let a = insert_vehicle(&db, bmw.id, "3 Series", "330i", 45_950.0, "Petrol", true).await;
        let b = insert_vehicle(&db, bmw.id, "X5", "xDrive40i", 65_000.0, "Petrol", false).await;
        insert_vehicle(&db, bmw.id, "i4", "eDrive40", 52_000.0, "Electric", true).await;
        insert_booking(&db, a.id, Status::Pending).await;
        for _ in 0..3 {
            insert_booking(&db, b.id, Status::Cancelled).await;
        }
        let repo = SeaOrmAnalyticsRepository::new(db);

        let popular = repo.popular_vehicles(POPULAR_VEHICLES_LIMIT).await.unwrap();

        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].vehicle_name, "X5");
        assert_eq!(popular[0].booking_count, 3);
        assert_eq!(popular[0].price, 65_000.0);
        assert_eq!(popular[1].vehicle_id, a.id);
        assert_eq!(popular[1].brand_name, "BMW");

        assert_eq!(repo.popular_vehicles(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn booking_trends_group_by_day() {
        let db = setup_db().await;
        let ford = insert_brand(&db, "Ford").await;
        let f150 = insert_vehicle(&db, ford.id, "F-150", "XLT", 42_970.0, "Petrol", true).await;
        insert_booking(&db, f150.id, Status::Pending).await;
        insert_booking(&db, f150.id, Status::Contacted).await;
        let repo = SeaOrmAnalyticsRepository::new(db);

        let trends = repo.booking_trends(TREND_DAYS).await.unwrap();

        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].count, 2);
        assert_eq!(trends[0].date, chrono::Utc::now().date_naive());
    }

    #[tokio::test]
    async fn booking_trends_keep_most_recent_days_descending() {
        let db = setup_db().await;
        let ford = insert_brand(&db, "Ford").await;
        let focus = insert_vehicle(&db, ford.id, "Focus", "ST", 31_000.0, "Petrol", true).await;
        let latest = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();
        for back in 0..35 {
            let at = latest - chrono::Duration::days(back);
            insert_booking_at(&db, focus.id, Status::Pending, at).await;
            if back % 2 == 0 {
                insert_booking_at(&db, focus.id, Status::Completed, at).await;
            }
        }
        let repo = SeaOrmAnalyticsRepository::new(db);

        let trends = repo.booking_trends(TREND_DAYS).await.unwrap();

        assert_eq!(trends.len(), TREND_DAYS as usize);
        assert_eq!(trends[0].date, latest.date_naive());
        assert_eq!(trends[0].count, 2);
        assert_eq!(trends[1].count, 1);
        assert!(trends.windows(2).all(|w| w[0].date > w[1].date));
        let oldest_kept = latest.date_naive() - chrono::Duration::days(29);
        assert_eq!(trends.last().unwrap().date, oldest_kept);
    }

    #[tokio::test]
    async fn high_demand_counts_only_open_bookings() {
        let db = setup_db().await;
        let audi = insert_brand(&db, "Audi").await;
        let a4 = insert_vehicle(&db, audi.id, "A4", "Premium", 43_800.0, "Petrol", true).await;
        let q5 = insert_vehicle(&db, audi.id, "Q5", "Premium", 48_000.0, "Petrol", false).await;
        // A4: 2 pending + 1 contacted = 3 open
        insert_booking(&db, a4.id, Status::Pending).await;
        insert_booking(&db, a4.id, Status::Pending).await;
        insert_booking(&db, a4.id, Status::Contacted).await;
        // Q5: 2 open, 2 closed
        insert_booking(&db, q5.id, Status::Pending).await;
        insert_booking(&db, q5.id, Status::Contacted).await;
        insert_booking(&db, q5.id, Status::Completed).await;
        insert_booking(&db, q5.id, Status::Cancelled).await;
        let repo = SeaOrmAnalyticsRepository::new(db);

        let status = repo.inventory_status(HIGH_DEMAND_THRESHOLD).await.unwrap();

        assert_eq!(status.available_vehicles, 1);
        assert_eq!(status.unavailable_vehicles, 1);
        assert_eq!(
            status.high_demand_vehicles,
            vec![HighDemandVehicle {
                vehicle_id: a4.id,
                vehicle_name: "A4".into(),
                brand_name: "Audi".into(),
                booking_count: 3,
            }]
        );
    }
}
