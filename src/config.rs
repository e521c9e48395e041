//! Configuration file support for uiloop.
//!
//! Configuration is loaded from `~/.config/uiloop/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/uiloop/config.toml
//! tick_period_ms = 16
//! tick_budget_ms = 4
//! queue_capacity = 64
//! swipe_velocity = 8
//! log_events = true
//! log_dir = "/tmp/uiloop-logs"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable overriding `tick_period_ms`
pub const TICK_ENV_VAR: &str = "UILOOP_TICK_MS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// System tick period in milliseconds
    pub tick_period_ms: u64,

    /// Time a tick handler may take before it is logged as an overrun
    pub tick_budget_ms: u64,

    /// Maximum number of events waiting in the dispatch queue
    pub queue_capacity: usize,

    /// Velocity reported for swipes translated from scroll input
    pub swipe_velocity: i16,

    /// Log every delivered event
    pub log_events: bool,

    /// Directory for log files
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_period_ms: 16,
            tick_budget_ms: 4,
            queue_capacity: 64,
            swipe_velocity: 8,
            log_events: false,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default().with_env();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config.with_env(),
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default().with_env()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("uiloop")
    }

    /// Apply environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Some(ms) = std::env::var(TICK_ENV_VAR)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            self.tick_period_ms = ms;
        }
        self
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, tick_period_ms: Option<u64>, log_events: Option<bool>) -> Self {
        if let Some(ms) = tick_period_ms {
            self.tick_period_ms = ms;
        }
        if let Some(log_events) = log_events {
            self.log_events = log_events;
        }
        self
    }

    /// Tick period, never shorter than one millisecond.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(1))
    }

    pub fn tick_budget(&self) -> Duration {
        Duration::from_millis(self.tick_budget_ms)
    }

    /// Get the log directory, falling back to `~/.uiloop/logs`.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(crate::log::default_dir)
    }
}
