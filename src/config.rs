//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Default values used when a variable is not set.
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;

    pub const DB_HOST: &str = "localhost";
    pub const DB_USERNAME: &str = "postgres";
    pub const DB_PASSWORD: &str = "postgres";
    pub const DB_NAME: &str = "postgres";
    pub const DB_PORT: u16 = 5432;
    pub const DB_SSL_MODE: &str = "disable";
    pub const DB_MAX_IDLE_CONNECTIONS: u32 = 10;
    pub const DB_CONNECTION_MAX_IDLE_TIME_MINS: u64 = 5;
    pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;
}

/// `sslmode` values PostgreSQL accepts.
const SSL_MODES: [&str; 6] = [
    "disable",
    "allow",
    "prefer",
    "require",
    "verify-ca",
    "verify-full",
];

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PostgreSQL connection configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub ssl_mode: String,
    /// Upper bound on pooled connections
    pub max_idle_connections: u32,
    /// Minutes an idle connection is kept before it is closed
    pub connection_max_idle_time_mins: u64,
    /// Seconds to wait for a free connection
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Connection URL with credentials percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name,
            self.ssl_mode
        )
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_max_idle_time_mins * 60)
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HOST`: Server host (default: 0.0.0.0)
    /// - `PORT`: Server port (default: 8080)
    /// - `POSTGRES_HOSTNAME`: Database host (default: localhost)
    /// - `POSTGRES_USER` / `POSTGRES_PASSWORD`: Credentials (default: postgres/postgres)
    /// - `POSTGRES_DB`: Database name (default: postgres)
    /// - `POSTGRES_PORT`: Database port (default: 5432)
    /// - `POSTGRES_SSL`: `sslmode` (default: disable)
    /// - `POSTGRES_MAX_IDLE_CONNS`: Pool size (default: 10)
    /// - `POSTGRES_CONN_MAX_IDLE_TIME`: Idle connection lifetime in minutes (default: 5)
    /// - `POSTGRES_ACQUIRE_TIMEOUT_SECS`: Connection acquire timeout (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("PORT must be a valid port number"))?,
            None => defaults::PORT,
        };

        let db_port = match lookup("POSTGRES_PORT") {
            Some(v) => v.parse::<u16>().map_err(|_| {
                ConfigError::InvalidValue("POSTGRES_PORT must be a valid port number")
            })?,
            None => defaults::DB_PORT,
        };

        let ssl_mode = var("POSTGRES_SSL", defaults::DB_SSL_MODE);
        if !SSL_MODES.contains(&ssl_mode.as_str()) {
            return Err(ConfigError::InvalidValue(
                "POSTGRES_SSL must be one of disable, allow, prefer, require, verify-ca, verify-full",
            ));
        }

        let database = DatabaseConfig {
            host: var("POSTGRES_HOSTNAME", defaults::DB_HOST),
            username: var("POSTGRES_USER", defaults::DB_USERNAME),
            password: var("POSTGRES_PASSWORD", defaults::DB_PASSWORD),
            name: var("POSTGRES_DB", defaults::DB_NAME),
            port: db_port,
            ssl_mode,
            max_idle_connections: parse_or_default(
                "POSTGRES_MAX_IDLE_CONNS",
                lookup("POSTGRES_MAX_IDLE_CONNS"),
                defaults::DB_MAX_IDLE_CONNECTIONS,
            ),
            connection_max_idle_time_mins: parse_or_default(
                "POSTGRES_CONN_MAX_IDLE_TIME",
                lookup("POSTGRES_CONN_MAX_IDLE_TIME"),
                defaults::DB_CONNECTION_MAX_IDLE_TIME_MINS,
            ),
            acquire_timeout_secs: parse_or_default(
                "POSTGRES_ACQUIRE_TIMEOUT_SECS",
                lookup("POSTGRES_ACQUIRE_TIMEOUT_SECS"),
                defaults::DB_ACQUIRE_TIMEOUT_SECS,
            ),
        };

        let server = ServerConfig {
            host: var("HOST", defaults::HOST),
            port,
        };

        Ok(Config { server, database })
    }
}

/// Parse a numeric setting, falling back to `default` with a warning when it is malformed.
fn parse_or_default<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Invalid numeric setting, using default");
            default
        }),
        None => default,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),
}
