//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`,
//! so the service can be configured identically on bare metal and in containers.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `DB_HOST`: MySQL server hostname
//! - `DB_USER`: MySQL username
//! - `DB_PASSWORD`: MySQL password
//! - `DB_DATABASE`: Database holding the `products` table
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,suggest_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3001)
//! - `DB_PORT`: MySQL server port (default: 3306)
//! - `DB_CONNECTION_LIMIT`: Maximum pooled connections (default: 10)
//! - `DB_ACQUIRE_TIMEOUT_SECONDS`: Seconds to wait for a pooled connection (default: 10)

/// Complete server configuration loaded from environment.
///
/// All fields are populated from environment variables at startup, with
/// sensible defaults provided where appropriate.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// MySQL server hostname
    pub db_host: String,

    /// MySQL server port
    pub db_port: u16,

    /// MySQL username
    pub db_user: String,

    /// MySQL password
    pub db_password: String,

    /// Database holding the `products` table
    pub db_database: String,

    /// Maximum number of concurrent database connections
    pub db_connection_limit: u32,

    /// Seconds a request waits for a pooled connection before failing
    pub db_acquire_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3001)?,
            db_host: env_required("DB_HOST")?,
            db_port: env_or("DB_PORT", 3306)?,
            db_user: env_required("DB_USER")?,
            db_password: env_required("DB_PASSWORD")?,
            db_database: env_required("DB_DATABASE")?,
            db_connection_limit: env_or("DB_CONNECTION_LIMIT", 10)?,
            db_acquire_timeout_seconds: env_or("DB_ACQUIRE_TIMEOUT_SECONDS", 10)?,
        })
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
