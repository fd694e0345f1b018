use crate::config::Config;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use std::time::Duration;

/// Build the process-wide MySQL pool from discrete connection parameters.
///
/// Requests beyond `db_connection_limit` queue on acquire and fail with a
/// pool timeout once `db_acquire_timeout_seconds` elapses.
pub async fn create_pool(config: &Config) -> anyhow::Result<MySqlPool> {
    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_database);

    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_connection_limit)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_seconds))
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Lazy variant used where a pool handle is needed before the database is
/// reachable (connections are only opened on first acquire).
pub fn create_pool_lazy(config: &Config) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_database);

    MySqlPoolOptions::new()
        .max_connections(config.db_connection_limit)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_seconds))
        .connect_lazy_with(options)
}
