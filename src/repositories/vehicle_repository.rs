//! Vehicle Registry
//!
//! Vehicles reference a price-history entry through `fuel_price_id`.
//! Deleting a vehicle does not cascade to its refuel events; recorded
//! fill-ups stay as history.

use crate::models::Vehicle;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        license_plate: String,
        brand: Option<String>,
        model: Option<String>,
        year: i64,
        fuel_price_id: Option<i64>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (license_plate, brand, model, year, fuel_price_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(license_plate)
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(fuel_price_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE license_plate = ? AND id != ?)",
        )
        .bind(license_plate)
        .bind(exclude_id.unwrap_or(-1))
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Partial update: unsupplied fields keep their stored value. Supplying
    /// `fuel_price_id` repoints the vehicle explicitly (the caller validates
    /// the target row exists).
    pub async fn update(
        &self,
        id: i64,
        license_plate: Option<String>,
        brand: Option<String>,
        model: Option<String>,
        year: Option<i64>,
        fuel_price_id: Option<i64>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET license_plate = ?, brand = ?, model = ?, year = ?, fuel_price_id = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(brand.or(current.brand))
        .bind(model.or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(fuel_price_id.or(current.fuel_price_id))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }
}
