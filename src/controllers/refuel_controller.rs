//! Refuel ledger operations
//!
//! The one derivation rule of the ledger lives here: when a fill-up is
//! recorded with only one of liters/total price, the other is computed from
//! the vehicle's currently referenced price per liter. If the vehicle has no
//! resolvable price the missing field stays zero/unset rather than failing.
//! Edits never re-derive — stored values are overwritten as supplied.

use sqlx::SqlitePool;

use crate::dto::common::ApiResponse;
use crate::dto::refuel_dto::{
    CreateRefuelRequest, OdometerSuggestionResponse, RefuelResponse, RefuelWithVehicleResponse,
    UpdateRefuelRequest,
};
use crate::repositories::{FuelPriceRepository, RefuelRepository, VehicleRepository};
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_datetime, validate_non_negative};

pub struct RefuelController {
    repository: RefuelRepository,
    vehicles: VehicleRepository,
    fuel_prices: FuelPriceRepository,
}

impl RefuelController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RefuelRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            fuel_prices: FuelPriceRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRefuelRequest,
    ) -> Result<ApiResponse<RefuelResponse>, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if validate_datetime(&request.timestamp).is_err() {
            return Err(AppError::Validation(
                "Timestamp must be a YYYY-MM-DDTHH:MM datetime".to_string(),
            ));
        }
        if validate_non_negative(request.previous_odo).is_err() {
            return Err(AppError::Validation(
                "Previous odometer cannot be negative".to_string(),
            ));
        }
        if request.liters.is_none() && request.total_price.is_none() {
            return Err(AppError::Validation(
                "Either liters or total price must be provided".to_string(),
            ));
        }
        if let Some(liters) = request.liters {
            if liters <= 0.0 {
                return Err(AppError::Validation(
                    "Liters must be a positive number".to_string(),
                ));
            }
        }

        let price_per_liter = match vehicle.fuel_price_id {
            Some(fuel_price_id) => self
                .fuel_prices
                .find_by_id(fuel_price_id)
                .await?
                .map(|p| p.price_per_liter),
            None => None,
        };

        let (liters, total_price) =
            derive_liters_and_price(request.liters, request.total_price, price_per_liter);

        let event = self
            .repository
            .create(
                request.vehicle_id,
                request.timestamp,
                request.previous_odo,
                request.current_odo,
                liters,
                total_price,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            event.into(),
            "Refuel recorded".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateRefuelRequest,
    ) -> Result<ApiResponse<RefuelResponse>, AppError> {
        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
        }
        if let Some(timestamp) = &request.timestamp {
            if validate_datetime(timestamp).is_err() {
                return Err(AppError::Validation(
                    "Timestamp must be a YYYY-MM-DDTHH:MM datetime".to_string(),
                ));
            }
        }
        if let Some(previous_odo) = request.previous_odo {
            if validate_non_negative(previous_odo).is_err() {
                return Err(AppError::Validation(
                    "Previous odometer cannot be negative".to_string(),
                ));
            }
        }

        let event = self
            .repository
            .update(
                id,
                request.vehicle_id,
                request.timestamp,
                request.previous_odo,
                request.current_odo,
                request.liters,
                request.total_price,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            event.into(),
            "Refuel updated".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    pub async fn list_with_vehicle(&self) -> Result<Vec<RefuelWithVehicleResponse>, AppError> {
        let events = self.repository.list_all_with_vehicle().await?;
        Ok(events
            .into_iter()
            .map(RefuelWithVehicleResponse::from)
            .collect())
    }

    pub async fn suggest_previous_odometer(
        &self,
        vehicle_id: i64,
    ) -> Result<OdometerSuggestionResponse, AppError> {
        let previous_odo = self.repository.suggest_previous_odometer(vehicle_id).await?;
        Ok(OdometerSuggestionResponse {
            vehicle_id,
            previous_odo,
        })
    }
}

/// Fill in the missing half of liters/total price when the vehicle's price
/// per liter is known. Without a resolvable price, missing liters become 0
/// and a missing total price stays unset.
fn derive_liters_and_price(
    liters: Option<f64>,
    total_price: Option<f64>,
    price_per_liter: Option<f64>,
) -> (f64, Option<f64>) {
    match (liters, total_price, price_per_liter) {
        (Some(l), Some(t), _) => (l, Some(t)),
        (Some(l), None, Some(ppl)) => (l, Some(l * ppl)),
        (Some(l), None, None) => (l, None),
        (None, Some(t), Some(ppl)) if ppl > 0.0 => (t / ppl, Some(t)),
        (None, Some(t), _) => (0.0, Some(t)),
        (None, None, _) => (0.0, None),
    }
}
