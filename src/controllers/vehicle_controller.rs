//! Vehicle registry operations

use chrono::{Datelike, Utc};
use sqlx::SqlitePool;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::{FuelPriceRepository, VehicleRepository};
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::{validate_license_plate, validate_not_empty, validate_range};

pub struct VehicleController {
    repository: VehicleRepository,
    fuel_prices: FuelPriceRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            fuel_prices: FuelPriceRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        self.validate_plate(&request.license_plate)?;
        self.validate_year(request.year)?;

        // The registration form requires a fuel type even though the column
        // is nullable (repointing may null it later)
        let fuel_price_id = request
            .fuel_price_id
            .ok_or_else(|| AppError::Validation("Fuel type is required".to_string()))?;
        self.validate_fuel_price_ref(fuel_price_id).await?;

        if self
            .repository
            .license_plate_exists(&request.license_plate, None)
            .await?
        {
            return Err(conflict_error("Vehicle", "license plate", &request.license_plate));
        }

        let vehicle = self
            .repository
            .create(
                request.license_plate,
                request.brand,
                request.model,
                request.year,
                Some(fuel_price_id),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle registered".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        if let Some(plate) = &request.license_plate {
            self.validate_plate(plate)?;
            if self.repository.license_plate_exists(plate, Some(id)).await? {
                return Err(conflict_error("Vehicle", "license plate", plate));
            }
        }
        if let Some(year) = request.year {
            self.validate_year(year)?;
        }
        if let Some(fuel_price_id) = request.fuel_price_id {
            self.validate_fuel_price_ref(fuel_price_id).await?;
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.license_plate,
                request.brand,
                request.model,
                request.year,
                request.fuel_price_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle updated".to_string(),
        ))
    }

    /// Refuel events referencing the vehicle are kept as history (no cascade)
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    fn validate_plate(&self, plate: &str) -> Result<(), AppError> {
        if validate_not_empty(plate).is_err() {
            return Err(AppError::Validation(
                "Registration plate is required".to_string(),
            ));
        }
        if validate_license_plate(plate).is_err() {
            return Err(AppError::Validation(
                "Registration plate format is invalid".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_year(&self, year: i64) -> Result<(), AppError> {
        let current_year = Utc::now().year() as i64;
        if validate_range(year, 1900, current_year).is_err() {
            return Err(AppError::Validation(format!(
                "Year must be between 1900 and {}",
                current_year
            )));
        }
        Ok(())
    }

    async fn validate_fuel_price_ref(&self, fuel_price_id: i64) -> Result<(), AppError> {
        if self.fuel_prices.find_by_id(fuel_price_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Fuel type '{}' does not exist",
                fuel_price_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection::create_pool, schema::create_tables};

    async fn setup() -> (SqlitePool, VehicleController, i64) {
        let pool = create_pool(Some("sqlite::memory:")).await.unwrap();
        create_tables(&pool).await.unwrap();
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO fuel_prices (name, price_per_liter, valid_from) VALUES ('Diesel', 1450.0, '2024-01-01') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        (pool.clone(), VehicleController::new(pool), row.0)
    }

    fn request(plate: &str, fuel_price_id: Option<i64>) -> CreateVehicleRequest {
        CreateVehicleRequest {
            license_plate: plate.to_string(),
            brand: Some("Peugeot".to_string()),
            model: Some("308".to_string()),
            year: 2019,
            fuel_price_id,
        }
    }

    #[tokio::test]
    async fn test_duplicate_plate_is_a_conflict() {
        let (_pool, ctl, price_id) = setup().await;

        ctl.create(request("AB-123-CD", Some(price_id))).await.unwrap();
        let err = ctl
            .create(request("AB-123-CD", Some(price_id)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_missing_fuel_type_is_a_validation_error() {
        let (_pool, ctl, _price_id) = setup().await;

        let err = ctl.create(request("AB-123-CD", None)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_dangling_fuel_type_is_a_validation_error() {
        let (_pool, ctl, _price_id) = setup().await;

        let err = ctl.create(request("AB-123-CD", Some(999))).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_plate_taken_by_another_vehicle() {
        let (_pool, ctl, price_id) = setup().await;

        ctl.create(request("AB-123-CD", Some(price_id))).await.unwrap();
        let second = ctl
            .create(request("EF-456-GH", Some(price_id)))
            .await
            .unwrap()
            .data
            .unwrap();

        let err = ctl
            .update(
                second.id,
                UpdateVehicleRequest {
                    license_plate: Some("AB-123-CD".to_string()),
                    brand: None,
                    model: None,
                    year: None,
                    fuel_price_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_keeps_refuel_history() {
        let (pool, ctl, price_id) = setup().await;

        let vehicle = ctl
            .create(request("AB-123-CD", Some(price_id)))
            .await
            .unwrap()
            .data
            .unwrap();
        sqlx::query(
            "INSERT INTO refuel_events (vehicle_id, timestamp, previous_odo, current_odo, liters) VALUES (?, '2024-03-10T09:00', 100, 400, 20.0)",
        )
        .bind(vehicle.id)
        .execute(&pool)
        .await
        .unwrap();

        ctl.delete(vehicle.id).await.unwrap();

        let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM refuel_events")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining.0, 1);
    }
}
