//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TROLLEY_FEED_URL` - Promotions feed endpoint (default:
//!   `http://127.0.0.1:5001/api/promotions`)
//! - `TROLLEY_DATA_DIR` - Data directory for persisted lists and the
//!   cart (default: `.trolley`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use trolley_feed::DEFAULT_FEED_URL;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".trolley";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Promotions feed endpoint.
    pub feed_url: Url,
    /// Directory holding the key-value store.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `TROLLEY_FEED_URL` is set but not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let feed_url = get_env_or_default("TROLLEY_FEED_URL", DEFAULT_FEED_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("TROLLEY_FEED_URL".to_owned(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("TROLLEY_DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self { feed_url, data_dir })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
