use anyhow::{Context, Result};
use cart::{config::Config, handler::AppRouter, state::AppState};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("cart-service", config.is_dev, config.is_enable_file_log);

    info!("🚀 Starting Cart Service initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool.clone()).await;

    info!("✅ Application setup completed successfully.");

    let served = AppRouter::serve(config.port, state).await;

    info!("🛑 Draining database pool...");
    db_pool.close().await;
    info!("✅ Cart Service shutdown complete.");

    served.context("Failed to run server")
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
