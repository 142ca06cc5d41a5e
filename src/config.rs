//! Solver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::SearchConfig;
use tracing::{debug, info, instrument};

/// Configuration for the solver binary.
///
/// ```toml
/// log_filter = "debug"
///
/// [search]
/// pruning = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Search engine settings.
    #[serde(default)]
    search: SearchConfig,

    /// `tracing-subscriber` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(pruning = config.search.pruning(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` when given, otherwise the defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Disables alpha-beta pruning, keeping everything else.
    pub fn without_pruning(self) -> Self {
        Self {
            search: self.search.with_pruning(false),
            ..self
        }
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert!(*config.search().pruning());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(SolverConfig::from_toml("").unwrap(), SolverConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = SolverConfig::from_toml("[search]\npruning = false\n").unwrap();
        assert!(!*config.search().pruning());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_bad_toml() {
        let err = SolverConfig::from_toml("log_filter = 3").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_without_pruning() {
        let config = SolverConfig::default().without_pruning();
        assert!(!*config.search().pruning());
    }
}
