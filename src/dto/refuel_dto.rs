use serde::{Deserialize, Serialize};

use crate::models::{RefuelEvent, RefuelWithVehicle};

// Request to record a fill-up. One of liters/total_price may be omitted;
// the missing half is derived from the vehicle's resolved price per liter
// when that price exists.
#[derive(Debug, Deserialize)]
pub struct CreateRefuelRequest {
    pub vehicle_id: i64,
    /// YYYY-MM-DDTHH:MM
    pub timestamp: String,
    pub previous_odo: i64,
    pub current_odo: i64,
    pub liters: Option<f64>,
    pub total_price: Option<f64>,
}

// Request to edit a fill-up. Supplied fields overwrite stored values as-is;
// derived figures are never recomputed after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateRefuelRequest {
    pub vehicle_id: Option<i64>,
    pub timestamp: Option<String>,
    pub previous_odo: Option<i64>,
    pub current_odo: Option<i64>,
    pub liters: Option<f64>,
    pub total_price: Option<f64>,
}

// Fill-up response
#[derive(Debug, Serialize)]
pub struct RefuelResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub timestamp: String,
    pub previous_odo: i64,
    pub current_odo: i64,
    pub liters: f64,
    pub total_price: Option<f64>,
}

// Fill-up joined with its vehicle, for display lists
#[derive(Debug, Serialize)]
pub struct RefuelWithVehicleResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub timestamp: String,
    pub previous_odo: i64,
    pub current_odo: i64,
    pub liters: f64,
    pub total_price: Option<f64>,
    pub distance_km: i64,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
}

// Suggested previous-odometer prefill for the next entry
#[derive(Debug, Serialize)]
pub struct OdometerSuggestionResponse {
    pub vehicle_id: i64,
    pub previous_odo: i64,
}

impl From<RefuelEvent> for RefuelResponse {
    fn from(event: RefuelEvent) -> Self {
        Self {
            id: event.id,
            vehicle_id: event.vehicle_id,
            timestamp: event.timestamp,
            previous_odo: event.previous_odo,
            current_odo: event.current_odo,
            liters: event.liters,
            total_price: event.total_price,
        }
    }
}

impl From<RefuelWithVehicle> for RefuelWithVehicleResponse {
    fn from(row: RefuelWithVehicle) -> Self {
        let distance_km = row.distance_km();
        Self {
            id: row.id,
            vehicle_id: row.vehicle_id,
            timestamp: row.timestamp,
            previous_odo: row.previous_odo,
            current_odo: row.current_odo,
            liters: row.liters,
            total_price: row.total_price,
            distance_km,
            license_plate: row.license_plate,
            brand: row.brand,
            model: row.model,
        }
    }
}
