use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),

    #[error("CORS_ORIGINS must list explicit origins; '*' cannot be combined with credentials")]
    WildcardCorsOrigin,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection URL.
    pub database_url: String,
    pub database_max_connections: u32,
    /// JSON file the startup seed loader reads from.
    pub seed_data_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                             |
    /// |----------------------------|-------------------------------------|
    /// | `HOST`                     | `0.0.0.0`                           |
    /// | `PORT`                     | `8000`                              |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`             |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                |
    /// | `DATABASE_URL`             | `sqlite://collectibles.db?mode=rwc` |
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                                 |
    /// | `SEED_DATA_PATH`           | `data/collectibles_data.json`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                if origin == "*" {
                    return Err(ConfigError::WildcardCorsOrigin);
                }
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: parse("PORT", "u16", var("PORT", "8000"))?,
            cors_origins,
            request_timeout_secs: parse(
                "REQUEST_TIMEOUT_SECS",
                "u64",
                var("REQUEST_TIMEOUT_SECS", "30"),
            )?,
            database_url: var("DATABASE_URL", "sqlite://collectibles.db?mode=rwc"),
            database_max_connections: parse(
                "DATABASE_MAX_CONNECTIONS",
                "u32",
                var("DATABASE_MAX_CONNECTIONS", "5"),
            )?,
            seed_data_path: PathBuf::from(var("SEED_DATA_PATH", "data/collectibles_data.json")),
        })
    }
}

fn parse<T: FromStr>(
    name: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        expected,
        value,
    })
}
