use serde::{Deserialize, Serialize};

use crate::models::FuelPrice;

// Request to record a new price for a fuel name
#[derive(Debug, Deserialize)]
pub struct CreateFuelPriceRequest {
    pub name: String,
    pub price_per_liter: f64,
    /// ISO date (YYYY-MM-DD) from which the price applies
    pub valid_from: String,
}

// Response for a price-history entry
#[derive(Debug, Serialize)]
pub struct FuelPriceResponse {
    pub id: i64,
    pub name: String,
    pub price_per_liter: f64,
    pub valid_from: String,
}

impl From<FuelPrice> for FuelPriceResponse {
    fn from(price: FuelPrice) -> Self {
        Self {
            id: price.id,
            name: price.name,
            price_per_liter: price.price_per_liter,
            valid_from: price.valid_from,
        }
    }
}
