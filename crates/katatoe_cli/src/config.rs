//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV: &str = "KATATOE_SEED";

/// Tracing filter used when no config supplies one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// How the final state is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text board and score lines.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Configuration for a scripted session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct DriverConfig {
    /// Seed for the starting-player draw; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Output format.
    #[serde(default)]
    format: OutputFormat,

    /// Print every intermediate state.
    #[serde(default)]
    trace: bool,

    /// Abort on the first rejected action.
    #[serde(default)]
    stop_on_error: bool,

    /// Default tracing filter when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[instrument]
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Log level to start tracing with, whether or not the config loaded.
///
/// A failed load still gets a subscriber so the error is logged.
pub fn startup_log_level(loaded: &Result<DriverConfig, ConfigError>) -> &str {
    match loaded {
        Ok(config) => config.log_level(),
        Err(_) => DEFAULT_LOG_LEVEL,
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            format: OutputFormat::default(),
            trace: false,
            stop_on_error: false,
            log_level: default_log_level(),
        }
    }
}

impl DriverConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, format = ?config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies a seed from the environment value, if present.
    #[instrument(skip(self))]
    pub fn apply_env_seed(self, value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(raw) => {
                let seed = raw.trim().parse::<u64>().map_err(|e| {
                    ConfigError::new(format!("{} must be an unsigned integer: {}", SEED_ENV, e))
                })?;
                debug!(seed, "Seed taken from environment");
                Ok(self.with_seed(Some(seed)))
            }
            None => Ok(self),
        }
    }

    /// Applies the `KATATOE_SEED` environment variable.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        let value = std::env::var(SEED_ENV).ok();
        self.apply_env_seed(value.as_deref())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
