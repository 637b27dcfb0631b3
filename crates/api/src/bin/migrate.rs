//! Apply pending database migrations and exit.
//!
//! Exits non-zero if any migration fails; sqlx rolls back the failing
//! migration's transaction so the schema is never left half-applied.

use anyhow::Context;

use portfolio_api::config::LogFormat;
use portfolio_api::telemetry;
use portfolio_db::DatabaseConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing(LogFormat::from_value(
        std::env::var("LOG_FORMAT").ok().as_deref(),
    ));

    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;
    let pool = portfolio_db::create_pool(&db_config).context("Invalid DATABASE_URL")?;

    tracing::info!("Starting database migration");
    let result = portfolio_db::run_migrations(&pool).await;
    pool.close().await;

    match result {
        Ok(()) => {
            tracing::info!("Migration completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Migration failed");
            Err(e).context("Migration failed")
        }
    }
}
