use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::RefuelController;
use crate::dto::common::ApiResponse;
use crate::dto::refuel_dto::{
    CreateRefuelRequest, OdometerSuggestionResponse, RefuelResponse, RefuelWithVehicleResponse,
    UpdateRefuelRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_refuel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_refuel))
        .route("/", get(list_refuels))
        .route("/:id", put(update_refuel))
        .route("/:id", delete(delete_refuel))
        .route("/suggest-odometer/:vehicle_id", get(suggest_odometer))
}

async fn create_refuel(
    State(state): State<AppState>,
    Json(request): Json<CreateRefuelRequest>,
) -> Result<Json<ApiResponse<RefuelResponse>>, AppError> {
    let controller = RefuelController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_refuels(
    State(state): State<AppState>,
) -> Result<Json<Vec<RefuelWithVehicleResponse>>, AppError> {
    let controller = RefuelController::new(state.pool.clone());
    let response = controller.list_with_vehicle().await?;
    Ok(Json(response))
}

async fn update_refuel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRefuelRequest>,
) -> Result<Json<ApiResponse<RefuelResponse>>, AppError> {
    let controller = RefuelController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_refuel(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RefuelController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Refuel deleted"
    })))
}

async fn suggest_odometer(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Json<OdometerSuggestionResponse>, AppError> {
    let controller = RefuelController::new(state.pool.clone());
    let response = controller.suggest_previous_odometer(vehicle_id).await?;
    Ok(Json(response))
}
