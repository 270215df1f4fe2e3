/// Configuration management for the board feed service.
///
/// Everything is loaded from environment variables; a `.env` file is honored
/// for local development.
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Feed window size used when FEED_LIMIT is not set.
const DEFAULT_FEED_LIMIT: u32 = 20;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Feed window configuration
    pub feed: FeedConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Feed window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Number of most recent posts shown on the front page
    pub limit: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL environment variable not set".into()))?;

        let limit = match std::env::var("FEED_LIMIT") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::Config(format!("failed to parse FEED_LIMIT='{}': {}", raw, e))
            })?,
            Err(_) => DEFAULT_FEED_LIMIT,
        };

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("BOARD_FEED_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BOARD_FEED_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                url,
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            feed: FeedConfig { limit },
        })
    }
}
