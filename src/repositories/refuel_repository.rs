//! Refuel Ledger
//!
//! Fill-up events referencing a vehicle. Values are stored, not recomputed
//! live: editing never re-derives liters/total price from the fuel price in
//! force at edit time.

use crate::models::{RefuelEvent, RefuelWithVehicle};
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct RefuelRepository {
    pool: SqlitePool,
}

impl RefuelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: i64,
        timestamp: String,
        previous_odo: i64,
        current_odo: i64,
        liters: f64,
        total_price: Option<f64>,
    ) -> Result<RefuelEvent, AppError> {
        let event = sqlx::query_as::<_, RefuelEvent>(
            r#"
            INSERT INTO refuel_events (vehicle_id, timestamp, previous_odo, current_odo, liters, total_price)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(timestamp)
        .bind(previous_odo)
        .bind(current_odo)
        .bind(liters)
        .bind(total_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<RefuelEvent>, AppError> {
        let event = sqlx::query_as::<_, RefuelEvent>("SELECT * FROM refuel_events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Partial overwrite of stored values
    pub async fn update(
        &self,
        id: i64,
        vehicle_id: Option<i64>,
        timestamp: Option<String>,
        previous_odo: Option<i64>,
        current_odo: Option<i64>,
        liters: Option<f64>,
        total_price: Option<f64>,
    ) -> Result<RefuelEvent, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Refuel event not found".to_string()))?;

        let event = sqlx::query_as::<_, RefuelEvent>(
            r#"
            UPDATE refuel_events
            SET vehicle_id = ?, timestamp = ?, previous_odo = ?, current_odo = ?, liters = ?, total_price = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(vehicle_id.unwrap_or(current.vehicle_id))
        .bind(timestamp.unwrap_or(current.timestamp))
        .bind(previous_odo.unwrap_or(current.previous_odo))
        .bind(current_odo.unwrap_or(current.current_odo))
        .bind(liters.unwrap_or(current.liters))
        .bind(total_price.or(current.total_price))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM refuel_events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Refuel event not found".to_string()));
        }

        Ok(())
    }

    /// Fill-ups joined with their vehicle, newest first. Display needs the
    /// registration plate and brand/model alongside each event.
    pub async fn list_all_with_vehicle(&self) -> Result<Vec<RefuelWithVehicle>, AppError> {
        let events = sqlx::query_as::<_, RefuelWithVehicle>(
            r#"
            SELECT re.id, re.vehicle_id, re.timestamp, re.previous_odo, re.current_odo,
                   re.liters, re.total_price, v.license_plate, v.brand, v.model
            FROM refuel_events re
            JOIN vehicles v ON re.vehicle_id = v.id
            ORDER BY re.timestamp DESC, re.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// `current_odo` of the vehicle's most recent fill-up (by timestamp, not
    /// insertion order), 0 when the vehicle has none. Used to prefill the
    /// next entry's previous-odometer.
    pub async fn suggest_previous_odometer(&self, vehicle_id: i64) -> Result<i64, AppError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT current_odo FROM refuel_events
            WHERE vehicle_id = ?
            ORDER BY timestamp DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.0).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection::create_pool, schema::create_tables};

    async fn test_pool() -> SqlitePool {
        let pool = create_pool(Some("sqlite::memory:")).await.unwrap();
        create_tables(&pool).await.unwrap();
        pool
    }

    async fn insert_vehicle(pool: &SqlitePool, plate: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO vehicles (license_plate, brand, model, year) VALUES (?, 'Peugeot', '308', 2019) RETURNING id",
        )
        .bind(plate)
        .fetch_one(pool)
        .await
        .unwrap();
        row.0
    }

    #[tokio::test]
    async fn test_suggest_previous_odometer_uses_timestamp_not_insertion_order() {
        let pool = test_pool().await;
        let repo = RefuelRepository::new(pool.clone());
        let vehicle_id = insert_vehicle(&pool, "AB-123-CD").await;

        // Inserted out of chronological order on purpose
        repo.create(vehicle_id, "2024-03-10T09:00".to_string(), 50000, 51200, 38.0, None)
            .await
            .unwrap();
        repo.create(vehicle_id, "2024-02-01T18:30".to_string(), 49400, 50600, 35.0, None)
            .await
            .unwrap();

        let suggestion = repo.suggest_previous_odometer(vehicle_id).await.unwrap();
        assert_eq!(suggestion, 51200);
    }

    #[tokio::test]
    async fn test_suggest_previous_odometer_defaults_to_zero() {
        let pool = test_pool().await;
        let repo = RefuelRepository::new(pool.clone());
        let vehicle_id = insert_vehicle(&pool, "AB-123-CD").await;

        assert_eq!(repo.suggest_previous_odometer(vehicle_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_with_vehicle_orders_by_timestamp_desc() {
        let pool = test_pool().await;
        let repo = RefuelRepository::new(pool.clone());
        let v1 = insert_vehicle(&pool, "AB-123-CD").await;
        let v2 = insert_vehicle(&pool, "EF-456-GH").await;

        repo.create(v1, "2024-01-05T08:00".to_string(), 100, 400, 20.0, Some(30000.0))
            .await
            .unwrap();
        repo.create(v2, "2024-04-20T12:00".to_string(), 0, 350, 25.0, None)
            .await
            .unwrap();
        repo.create(v1, "2024-02-14T19:45".to_string(), 400, 780, 22.5, None)
            .await
            .unwrap();

        let list = repo.list_all_with_vehicle().await.unwrap();
        let stamps: Vec<&str> = list.iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(
            stamps,
            vec!["2024-04-20T12:00", "2024-02-14T19:45", "2024-01-05T08:00"]
        );
        assert_eq!(list[0].license_plate, "EF-456-GH");
        assert_eq!(list[1].distance_km(), 380);

        // No intervening writes: identical result
        let again = repo.list_all_with_vehicle().await.unwrap();
        assert_eq!(again.len(), list.len());
        assert!(again.iter().zip(&list).all(|(a, b)| a.id == b.id));
    }

    #[tokio::test]
    async fn test_update_overwrites_only_supplied_fields() {
        let pool = test_pool().await;
        let repo = RefuelRepository::new(pool.clone());
        let vehicle_id = insert_vehicle(&pool, "AB-123-CD").await;

        let event = repo
            .create(vehicle_id, "2024-03-10T09:00".to_string(), 50000, 51200, 38.0, Some(57000.0))
            .await
            .unwrap();

        let updated = repo
            .update(event.id, None, None, None, Some(51250), None, None)
            .await
            .unwrap();
        assert_eq!(updated.current_odo, 51250);
        assert_eq!(updated.liters, 38.0);
        assert_eq!(updated.total_price, Some(57000.0));
    }

    #[tokio::test]
    async fn test_delete_missing_event_is_not_found() {
        let pool = test_pool().await;
        let repo = RefuelRepository::new(pool);

        let err = repo.delete(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
