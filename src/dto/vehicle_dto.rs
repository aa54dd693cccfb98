use serde::{Deserialize, Serialize};

use crate::models::Vehicle;

// Request to register a vehicle
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: i64,
    pub fuel_price_id: Option<i64>,
}

// Request to update a vehicle (partial)
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub license_plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i64>,
    pub fuel_price_id: Option<i64>,
}

// Vehicle response
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: i64,
    pub fuel_price_id: Option<i64>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            license_plate: vehicle.license_plate,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            fuel_price_id: vehicle.fuel_price_id,
        }
    }
}
