//! Configuration for the Task API service.

use std::time::Duration;

use taskhub_auth_core::AuthConfig;
use taskhub_db::PoolSettings;

/// Task API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Database pool sizing and acquire timeout
    pub pool: PoolSettings,

    /// Auth core configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Database
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        // Server port
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Token secret (minimum 32 bytes). There is deliberately no default:
        // a missing secret must fail startup, never fall back.
        let token_secret = std::env::var("AUTH_TOKEN_SECRET")
            .map_err(|_| ConfigError::Missing("AUTH_TOKEN_SECRET"))?;

        // Token lifetime (default 24 hours)
        let token_ttl_hours: u64 = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_TTL_HOURS"))?;

        // Database pool sizing
        let defaults = PoolSettings::default();
        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map_or(Ok(defaults.max_connections), |v| v.parse())
            .map_err(|_| ConfigError::Invalid("DB_MAX_CONNECTIONS"))?;
        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .map_or(Ok(defaults.acquire_timeout.as_secs()), |v| v.parse())
            .map_err(|_| ConfigError::Invalid("DB_ACQUIRE_TIMEOUT_SECS"))?;

        let auth = AuthConfig::try_new(token_secret)
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?
            .with_token_ttl(Duration::from_secs(token_ttl_hours * 3600));

        Ok(Self {
            http_port,
            database_url,
            pool: PoolSettings {
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            auth,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}
