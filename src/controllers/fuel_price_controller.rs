//! Price-history operations

use crate::dto::common::ApiResponse;
use crate::dto::fuel_price_dto::{CreateFuelPriceRequest, FuelPriceResponse};
use crate::repositories::FuelPriceRepository;
use crate::services::{PriceEventBus, PriceSyncCoordinator};
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_not_empty, validate_positive};
use sqlx::SqlitePool;

pub struct FuelPriceController {
    repository: FuelPriceRepository,
    sync: PriceSyncCoordinator,
}

impl FuelPriceController {
    pub fn new(pool: SqlitePool, events: PriceEventBus) -> Self {
        Self {
            repository: FuelPriceRepository::new(pool.clone()),
            sync: PriceSyncCoordinator::new(pool, events),
        }
    }

    pub async fn create(
        &self,
        request: CreateFuelPriceRequest,
    ) -> Result<ApiResponse<FuelPriceResponse>, AppError> {
        if validate_not_empty(&request.name).is_err() {
            return Err(AppError::Validation("Fuel name is required".to_string()));
        }
        if validate_positive(request.price_per_liter).is_err() {
            return Err(AppError::Validation(
                "Price per liter must be a positive number".to_string(),
            ));
        }
        if validate_date(&request.valid_from).is_err() {
            return Err(AppError::Validation(
                "Validity date must be a YYYY-MM-DD date".to_string(),
            ));
        }

        let price = self
            .sync
            .add_price(
                request.name.trim().to_string(),
                request.price_per_liter,
                request.valid_from,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            price.into(),
            "Fuel price recorded".to_string(),
        ))
    }

    /// The current entry for a fuel name (greatest validity date, ties broken
    /// by the most recently created entry)
    pub async fn resolve_current(&self, name: &str) -> Result<FuelPriceResponse, AppError> {
        let price = self
            .repository
            .resolve_current(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No price recorded for '{}'", name)))?;

        Ok(price.into())
    }

    pub async fn list(&self) -> Result<Vec<FuelPriceResponse>, AppError> {
        let prices = self.repository.list_all().await?;
        Ok(prices.into_iter().map(FuelPriceResponse::from).collect())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.sync.delete_price(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection::create_pool, schema::create_tables};

    async fn controller() -> FuelPriceController {
        let pool = create_pool(Some("sqlite::memory:")).await.unwrap();
        create_tables(&pool).await.unwrap();
        FuelPriceController::new(pool, PriceEventBus::default())
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let ctl = controller().await;
        let err = ctl
            .create(CreateFuelPriceRequest {
                name: "  ".to_string(),
                price_per_liter: 1450.0,
                valid_from: "2024-01-01".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let ctl = controller().await;
        let err = ctl
            .create(CreateFuelPriceRequest {
                name: "Diesel".to_string(),
                price_per_liter: 0.0,
                valid_from: "2024-01-01".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_date() {
        let ctl = controller().await;
        let err = ctl
            .create(CreateFuelPriceRequest {
                name: "Diesel".to_string(),
                price_per_liter: 1450.0,
                valid_from: "01/06/2024".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_resolve_current_after_inserts() {
        let ctl = controller().await;
        ctl.create(CreateFuelPriceRequest {
            name: "Diesel".to_string(),
            price_per_liter: 1450.0,
            valid_from: "2024-01-01".to_string(),
        })
        .await
        .unwrap();
        ctl.create(CreateFuelPriceRequest {
            name: "Diesel".to_string(),
            price_per_liter: 1600.0,
            valid_from: "2024-06-01".to_string(),
        })
        .await
        .unwrap();

        let current = ctl.resolve_current("Diesel").await.unwrap();
        assert_eq!(current.price_per_liter, 1600.0);

        let err = ctl.resolve_current("Kerosene").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
