use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use carburant_tracker::config::EnvironmentConfig;
use carburant_tracker::database::{connection::create_pool, schema::create_tables};
use carburant_tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Configure logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("⛽ Carburant Tracker - Fuel Expense API");
    info!("=======================================");

    let config = EnvironmentConfig::default();

    // Initialize database
    let pool = match create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Failed to connect to the database: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };
    create_tables(&pool).await?;
    info!("✅ Database ready at {}", config.database_url);

    let app = carburant_tracker::create_app(AppState::new(pool));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET  /test - Liveness check");
    info!("⛽ Fuel prices:");
    info!("   POST   /api/fuel-price - Record a price");
    info!("   GET    /api/fuel-price - Price history");
    info!("   GET    /api/fuel-price/current/:name - Current price for a fuel name");
    info!("   DELETE /api/fuel-price/:id - Delete a price entry");
    info!("🚗 Vehicles:");
    info!("   POST   /api/vehicle - Register a vehicle");
    info!("   GET    /api/vehicle - List vehicles");
    info!("   GET    /api/vehicle/:id - Get a vehicle");
    info!("   PUT    /api/vehicle/:id - Update a vehicle");
    info!("   DELETE /api/vehicle/:id - Delete a vehicle");
    info!("⛽ Refuels:");
    info!("   POST   /api/refuel - Record a fill-up");
    info!("   GET    /api/refuel - Fill-ups with vehicle info");
    info!("   PUT    /api/refuel/:id - Edit a fill-up");
    info!("   DELETE /api/refuel/:id - Delete a fill-up");
    info!("   GET    /api/refuel/suggest-odometer/:vehicle_id - Previous-odometer prefill");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            e
        })?;

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
