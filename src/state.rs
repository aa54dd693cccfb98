//! Shared application state
//!
//! Passed through the axum router to every handler.

use sqlx::SqlitePool;

use crate::services::PriceEventBus;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub price_events: PriceEventBus,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            price_events: PriceEventBus::default(),
        }
    }
}
