//! Database access for the portfolio backend.
//!
//! Owns the connection provider ([`create_pool`]), embedded migrations, the
//! row models, and the repositories that query them.

pub mod config;
pub mod models;
pub mod repositories;

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub use config::{DatabaseConfig, Environment};

pub type DbPool = sqlx::PgPool;

/// Create the process-wide connection pool.
///
/// The pool connects lazily: an unreachable server does not fail here, the
/// error surfaces on the first query instead. Only a malformed connection
/// string is rejected up front.
pub fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = match &config.url {
        Some(url) => PgConnectOptions::from_str(url)?,
        None => {
            tracing::warn!("DATABASE_URL is not set, falling back to PG* environment defaults");
            PgConnectOptions::new()
        }
    };
    let ssl_mode = config.ssl_mode();
    tracing::debug!(environment = ?config.environment, ?ssl_mode, "Configuring database TLS");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy_with(options.ssl_mode(ssl_mode));
    Ok(pool)
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
///
/// Each migration runs inside its own transaction.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
