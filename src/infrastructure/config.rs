//! Application configuration management.
//!
//! Configuration is read from environment variables, after loading a `.env`
//! file if one is present. Every value is optional and has a default.
//!
//! # Environment Variables
//!
//! - `SUMMARIZATION_MAX_DAYS`: Window length in days (default: 30)
//! - `SUMMARIZATION_FIXTURE`: Path of the JSON fixture (default: `fixtures/demo.json`)
//! - `SUMMARIZATION_LOG_FILTER`: `tracing` filter used when `RUST_LOG` is unset
//!   (default: `info,financial_summarization=debug`)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const MAX_DAYS_KEY: &str = "SUMMARIZATION_MAX_DAYS";
pub const FIXTURE_KEY: &str = "SUMMARIZATION_FIXTURE";
pub const LOG_FILTER_KEY: &str = "SUMMARIZATION_LOG_FILTER";

const DEFAULT_MAX_DAYS: u32 = 30;
const DEFAULT_FIXTURE: &str = "fixtures/demo.json";
const DEFAULT_LOG_FILTER: &str = "info,financial_summarization=debug";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Default length of the summarization window, in calendar days.
    pub max_days_to_process: u32,
    /// JSON fixture seeding the in-memory collaborators.
    pub fixture_path: PathBuf,
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_days_to_process: DEFAULT_MAX_DAYS,
            fixture_path: PathBuf::from(DEFAULT_FIXTURE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_days_to_process =
            get_optional_parsed(&lookup, MAX_DAYS_KEY, defaults.max_days_to_process)?;
        let fixture_path = lookup(FIXTURE_KEY).map_or(defaults.fixture_path, PathBuf::from);
        let log_filter = lookup(LOG_FILTER_KEY).unwrap_or(defaults.log_filter);

        Ok(Self {
            max_days_to_process,
            fixture_path,
            log_filter,
        })
    }
}

/// Parses an optional variable, falling back to `default` when unset.
fn get_optional_parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or_else(
        || Ok(default),
        |value| {
            value
                .trim()
                .parse()
                .map_err(|error: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
