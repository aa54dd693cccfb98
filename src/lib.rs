//! Personal fuel-expense tracker backend
//!
//! Records vehicles, fuel-price history and refuel events ("pleins") in a
//! local SQLite database and keeps vehicle fuel-price references consistent
//! across price-history mutations.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the full API router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/fuel-price", routes::fuel_price_routes::create_fuel_price_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/refuel", routes::refuel_routes::create_refuel_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Simple liveness endpoint
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Fuel tracker API up and running",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
