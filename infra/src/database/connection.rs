//! Database connection pool setup.

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{MySqlPool, Row};

use rems_shared::config::DatabaseConfig;

/// Creates the MySQL connection pool from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "creating database connection pool"
    );

    let connect_options = MySqlConnectOptions::from_str(&config.url)?;

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .idle_timeout(Duration::from_secs(600))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
}

/// Verifies connectivity with a trivial query.
pub async fn health_check(pool: &MySqlPool) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1").fetch_one(pool).await?;
    let value: i32 = row.try_get(0)?;
    Ok(value == 1)
}
