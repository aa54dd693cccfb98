//! Refuel event ("plein")
//!
//! A fill-up is immutable with respect to price history once recorded:
//! later fuel-price changes never recompute its stored liters/total price.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefuelEvent {
    pub id: i64,
    pub vehicle_id: i64,
    /// Minute-precision local datetime, stored as TEXT (YYYY-MM-DDTHH:MM)
    pub timestamp: String,
    pub previous_odo: i64,
    pub current_odo: i64,
    pub liters: f64,
    pub total_price: Option<f64>,
}

/// Refuel event joined with its vehicle, for display lists
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RefuelWithVehicle {
    pub id: i64,
    pub vehicle_id: i64,
    pub timestamp: String,
    pub previous_odo: i64,
    pub current_odo: i64,
    pub liters: f64,
    pub total_price: Option<f64>,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl RefuelWithVehicle {
    /// Distance covered by this fill-up. May be negative when the odometers
    /// were entered backwards; displayed as-is rather than rejected.
    pub fn distance_km(&self) -> i64 {
        self.current_odo - self.previous_odo
    }
}
