//! Schema bootstrap
//!
//! The three persisted entities and their integrity constraints. Executed
//! idempotently at startup; SQLite assigns ids monotonically through
//! AUTOINCREMENT so a deleted row's id is never reused.

use sqlx::SqlitePool;

/// Create the tables if they do not exist yet
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fuel_prices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price_per_liter REAL NOT NULL,
            valid_from TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            license_plate TEXT NOT NULL UNIQUE,
            brand TEXT,
            model TEXT,
            year INTEGER,
            fuel_price_id INTEGER,
            FOREIGN KEY (fuel_price_id) REFERENCES fuel_prices(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS refuel_events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_id INTEGER NOT NULL,
            timestamp TEXT NOT NULL,
            previous_odo INTEGER NOT NULL,
            current_odo INTEGER NOT NULL,
            liters REAL NOT NULL,
            total_price REAL,
            FOREIGN KEY (vehicle_id) REFERENCES vehicles(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
