//! Configuration management for the DAO analysis service.
//!
//! # Configuration Priority
//!
//! 1. Environment variables
//! 2. Default values
//!
//! # Environment Variable Mapping
//!
//! - `PORT` → service.port
//! - `DAO_LOG_LEVEL` → observability.log_level
//! - `DAO_LOG_FORMAT` → observability.log_format

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default listening port for the analysis service.
const DEFAULT_PORT: u16 = 8000;

// ============================================================================
// Service Configuration
// ============================================================================

/// Network configuration for the HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

// ============================================================================
// Observability Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Base log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format: "json" for structured JSON, "pretty" for human-readable.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

// ============================================================================
// Top-level Configuration
// ============================================================================

/// Top-level configuration for the analysis service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging settings
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from defaults with environment overrides applied.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse() {
                self.service.port = p;
            }
        }
        if let Ok(level) = std::env::var("DAO_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Ok(format) = std::env::var("DAO_LOG_FORMAT") {
            self.observability.log_format = format;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.service.port == 0 {
            return Err(Error::Config(
                "service.port must be between 1 and 65535".into(),
            ));
        }

        match self.observability.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(Error::Config(format!(
                    "invalid log level '{other}': must be one of trace, debug, info, warn, error"
                )));
            }
        }

        match self.observability.log_format.as_str() {
            "json" | "pretty" => {}
            other => {
                return Err(Error::Config(format!(
                    "invalid log format '{other}': must be 'json' or 'pretty'"
                )));
            }
        }

        Ok(())
    }
}
