//! Database configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `DB_HOST`: MySQL host (default: localhost)
//! - `DB_USER`: MySQL user (default: root)
//! - `DB_PASSWORD`: MySQL password (default: empty)
//! - `DB_NAME`: database name (default: clientes)
//! - `DB_PORT`: MySQL port (default: 3306 when absent or empty)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 10)

use sqlx::mysql::MySqlConnectOptions;

/// Default MySQL port when `DB_PORT` is absent, empty, or not numeric.
const DEFAULT_PORT: u16 = 3306;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database connection configuration
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load config from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            host: env_or("DB_HOST", "localhost"),
            user: env_or("DB_USER", "root"),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            database: env_or("DB_NAME", "clientes"),
            port: port_from(std::env::var("DB_PORT").ok()),
            max_connections: max_connections_from(std::env::var("DB_MAX_CONNECTIONS").ok()),
        }
    }

    /// Connect options for the sqlx pool.
    ///
    /// Built field by field rather than via a URL string so credentials
    /// never need URL escaping.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Read an environment variable, treating empty as unset.
fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}

/// Parse a port value, defaulting when absent, empty, or not numeric.
fn port_from(raw: Option<String>) -> u16 {
    raw.as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Parse the pool size, defaulting when absent, empty, or not numeric.
fn max_connections_from(raw: Option<String>) -> u32 {
    raw.as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}
