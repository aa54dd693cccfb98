//! Environment configuration
//!
//! Runtime configuration read from environment variables. The tracker is a
//! single-user tool, so everything has a sensible local default.

use std::env;

/// Environment configuration
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    /// SQLite connection string; `mode=rwc` creates the file on first run
    pub database_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://carburant.db?mode=rwc".to_string()),
        }
    }
}
