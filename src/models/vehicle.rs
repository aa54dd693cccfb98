//! Vehicle entity
//!
//! `fuel_price_id` references the current price-history entry for the
//! vehicle's fuel name. The column is nullable: deleting the last entry for
//! a name leaves the vehicles that used it with no reference. The consistency
//! coordinator keeps the reference pointed at the current entry across
//! price-history mutations.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: i64,
    pub fuel_price_id: Option<i64>,
}
