//! Consistency coordinator for the price history
//!
//! A vehicle's `fuel_price_id` must always resolve to the current entry for
//! its fuel name. Both write paths into the price-history table therefore
//! live here, and the vehicle repoint pass runs inside the same transaction
//! as the mutation: a reader can never observe a deleted price with vehicles
//! still pointing at it. Events go out only after commit.

use crate::models::FuelPrice;
use crate::services::price_events::{PriceEvent, PriceEventBus};
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;

pub struct PriceSyncCoordinator {
    pool: SqlitePool,
    events: PriceEventBus,
}

impl PriceSyncCoordinator {
    pub fn new(pool: SqlitePool, events: PriceEventBus) -> Self {
        Self { pool, events }
    }

    /// Insert a new price-history entry for `name` and repoint every vehicle
    /// whose reference resolves to an entry with that name. The fresh row
    /// wins the tie-break (same-or-newer valid_from, higher id), so it is the
    /// current entry the moment it exists.
    pub async fn add_price(
        &self,
        name: String,
        price_per_liter: f64,
        valid_from: String,
    ) -> Result<FuelPrice, AppError> {
        let mut tx = self.pool.begin().await?;

        let price = sqlx::query_as::<_, FuelPrice>(
            r#"
            INSERT INTO fuel_prices (name, price_per_liter, valid_from)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&name)
        .bind(price_per_liter)
        .bind(&valid_from)
        .fetch_one(&mut *tx)
        .await?;

        let repointed = sqlx::query(
            r#"
            UPDATE vehicles SET fuel_price_id = ?
            WHERE fuel_price_id IN (SELECT id FROM fuel_prices WHERE name = ?)
            "#,
        )
        .bind(price.id)
        .bind(&name)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Recorded price {} for '{}' valid from {}, repointed {} vehicle(s)",
            price.price_per_liter,
            price.name,
            price.valid_from,
            repointed.rows_affected()
        );

        self.events.publish(PriceEvent::Added {
            id: price.id,
            name: price.name.clone(),
        });

        Ok(price)
    }

    /// Delete a price-history entry and repoint the vehicles that referenced
    /// it to the next-most-recent entry for the same name, or to NULL when
    /// the deleted row was the last one.
    pub async fn delete_price(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query_as::<_, FuelPrice>("SELECT * FROM fuel_prices WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Fuel price", id))?;

        sqlx::query("DELETE FROM fuel_prices WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // Recomputed after the delete so the removed row cannot win
        let next_current: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM fuel_prices WHERE name = ? ORDER BY valid_from DESC, id DESC LIMIT 1",
        )
        .bind(&deleted.name)
        .fetch_optional(&mut *tx)
        .await?;

        let repointed = sqlx::query("UPDATE vehicles SET fuel_price_id = ? WHERE fuel_price_id = ?")
            .bind(next_current.map(|r| r.0))
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "Deleted price entry {} for '{}', repointed {} vehicle(s)",
            id,
            deleted.name,
            repointed.rows_affected()
        );

        self.events.publish(PriceEvent::Removed {
            id,
            name: deleted.name,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection::create_pool, schema::create_tables};
    use crate::repositories::VehicleRepository;

    async fn test_pool() -> SqlitePool {
        let pool = create_pool(Some("sqlite::memory:")).await.unwrap();
        create_tables(&pool).await.unwrap();
        pool
    }

    fn coordinator(pool: &SqlitePool) -> PriceSyncCoordinator {
        PriceSyncCoordinator::new(pool.clone(), PriceEventBus::default())
    }

    async fn vehicle_reference(pool: &SqlitePool, vehicle_id: i64) -> Option<i64> {
        let row: (Option<i64>,) = sqlx::query_as("SELECT fuel_price_id FROM vehicles WHERE id = ?")
            .bind(vehicle_id)
            .fetch_one(pool)
            .await
            .unwrap();
        row.0
    }

    #[tokio::test]
    async fn test_add_price_repoints_vehicles_with_same_fuel_name() {
        let pool = test_pool().await;
        let sync = coordinator(&pool);
        let vehicles = VehicleRepository::new(pool.clone());

        let old = sync
            .add_price("Diesel".to_string(), 1450.0, "2024-01-01".to_string())
            .await
            .unwrap();
        let other = sync
            .add_price("Sans plomb 95".to_string(), 1700.0, "2024-01-01".to_string())
            .await
            .unwrap();

        let diesel_car = vehicles
            .create("AB-123-CD".to_string(), None, None, 2019, Some(old.id))
            .await
            .unwrap();
        let petrol_car = vehicles
            .create("EF-456-GH".to_string(), None, None, 2021, Some(other.id))
            .await
            .unwrap();

        let new = sync
            .add_price("Diesel".to_string(), 1600.0, "2024-06-01".to_string())
            .await
            .unwrap();

        assert_eq!(vehicle_reference(&pool, diesel_car.id).await, Some(new.id));
        // Vehicles on a different fuel name are untouched
        assert_eq!(vehicle_reference(&pool, petrol_car.id).await, Some(other.id));
    }

    #[tokio::test]
    async fn test_delete_price_repoints_to_next_most_recent() {
        let pool = test_pool().await;
        let sync = coordinator(&pool);
        let vehicles = VehicleRepository::new(pool.clone());

        let a = sync
            .add_price("Diesel".to_string(), 1450.0, "2024-01-01".to_string())
            .await
            .unwrap();
        let b = sync
            .add_price("Diesel".to_string(), 1600.0, "2024-06-01".to_string())
            .await
            .unwrap();

        let car = vehicles
            .create("AB-123-CD".to_string(), None, None, 2019, Some(b.id))
            .await
            .unwrap();

        sync.delete_price(b.id).await.unwrap();

        assert_eq!(vehicle_reference(&pool, car.id).await, Some(a.id));
    }

    #[tokio::test]
    async fn test_delete_last_price_nulls_vehicle_reference() {
        let pool = test_pool().await;
        let sync = coordinator(&pool);
        let vehicles = VehicleRepository::new(pool.clone());

        let only = sync
            .add_price("Diesel".to_string(), 1450.0, "2024-01-01".to_string())
            .await
            .unwrap();
        let car = vehicles
            .create("AB-123-CD".to_string(), None, None, 2019, Some(only.id))
            .await
            .unwrap();

        sync.delete_price(only.id).await.unwrap();

        assert_eq!(vehicle_reference(&pool, car.id).await, None);
    }

    #[tokio::test]
    async fn test_delete_missing_price_is_not_found() {
        let pool = test_pool().await;
        let sync = coordinator(&pool);

        let err = sync.delete_price(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_events_published_after_commit() {
        let pool = test_pool().await;
        let bus = PriceEventBus::default();
        let mut rx = bus.subscribe();
        let sync = PriceSyncCoordinator::new(pool.clone(), bus);

        let price = sync
            .add_price("Diesel".to_string(), 1450.0, "2024-01-01".to_string())
            .await
            .unwrap();
        sync.delete_price(price.id).await.unwrap();

        assert!(matches!(rx.recv().await.unwrap(), PriceEvent::Added { .. }));
        assert!(matches!(rx.recv().await.unwrap(), PriceEvent::Removed { .. }));
    }
}
