//! Price History Store (reads)
//!
//! Versioned fuel-price entries keyed by name. "Current" for a name means
//! greatest `valid_from`, ties broken by greatest `id` (the most recently
//! created entry wins) — deterministic, not insertion-order-dependent.

use crate::models::FuelPrice;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct FuelPriceRepository {
    pool: SqlitePool,
}

impl FuelPriceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<FuelPrice>, AppError> {
        let price = sqlx::query_as::<_, FuelPrice>("SELECT * FROM fuel_prices WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(price)
    }

    /// The current entry for a fuel name, or None when the name has no
    /// entries at all.
    pub async fn resolve_current(&self, name: &str) -> Result<Option<FuelPrice>, AppError> {
        let price = sqlx::query_as::<_, FuelPrice>(
            "SELECT * FROM fuel_prices WHERE name = ? ORDER BY valid_from DESC, id DESC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(price)
    }

    /// Full history, most recent validity first
    pub async fn list_all(&self) -> Result<Vec<FuelPrice>, AppError> {
        let prices = sqlx::query_as::<_, FuelPrice>(
            "SELECT * FROM fuel_prices ORDER BY valid_from DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(prices)
    }
}
