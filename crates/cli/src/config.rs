//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SOVA_CART_FILE` - YAML/JSON cart file (default: built-in demo cart)
//! - `SOVA_STRICT_EMAIL` - Also check email format (`true`/`false`, default: false)
//! - `SOVA_EXIT_URL` - Where the customer is sent after ordering (default: /)
//! - `SOVA_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//!
//! Command-line flags take precedence over these values.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Cart file to load instead of the demo cart
    pub cart_file: Option<PathBuf>,
    /// Reject malformed email addresses
    pub strict_email: bool,
    /// Navigation target handed back after an order is placed
    pub exit_url: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            cart_file: None,
            strict_email: false,
            exit_url: "/".to_owned(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cart_file = lookup("SOVA_CART_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let strict_email = lookup("SOVA_STRICT_EMAIL")
            .map(|v| parse_bool("SOVA_STRICT_EMAIL", &v))
            .transpose()?
            .unwrap_or(defaults.strict_email);
        let exit_url = lookup("SOVA_EXIT_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.exit_url);
        let log_format = lookup("SOVA_LOG_FORMAT")
            .map(|v| {
                v.parse::<LogFormat>()
                    .map_err(|e| ConfigError::InvalidEnvVar("SOVA_LOG_FORMAT".to_string(), e))
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            cart_file,
            strict_email,
            exit_url,
            log_format,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}
