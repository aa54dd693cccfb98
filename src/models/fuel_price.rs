//! Fuel price history entry
//!
//! A price change is a new row, never an in-place update. Several rows may
//! share a `name`; the one with the greatest `valid_from` (ties broken by
//! greatest `id`) is the current entry for that fuel name. `valid_from` is a
//! fixed-width ISO date (YYYY-MM-DD), so lexicographic ordering matches
//! temporal ordering.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelPrice {
    pub id: i64,
    pub name: String,
    pub price_per_liter: f64,
    pub valid_from: String,
}
