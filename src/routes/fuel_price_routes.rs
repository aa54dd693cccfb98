use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::FuelPriceController;
use crate::dto::common::ApiResponse;
use crate::dto::fuel_price_dto::{CreateFuelPriceRequest, FuelPriceResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_price_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fuel_price))
        .route("/", get(list_fuel_prices))
        .route("/current/:name", get(resolve_current_price))
        .route("/:id", delete(delete_fuel_price))
}

async fn create_fuel_price(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelPriceRequest>,
) -> Result<Json<ApiResponse<FuelPriceResponse>>, AppError> {
    let controller = FuelPriceController::new(state.pool.clone(), state.price_events.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_fuel_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelPriceResponse>>, AppError> {
    let controller = FuelPriceController::new(state.pool.clone(), state.price_events.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn resolve_current_price(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FuelPriceResponse>, AppError> {
    let controller = FuelPriceController::new(state.pool.clone(), state.price_events.clone());
    let response = controller.resolve_current(&name).await?;
    Ok(Json(response))
}

async fn delete_fuel_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FuelPriceController::new(state.pool.clone(), state.price_events.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Fuel price deleted"
    })))
}
