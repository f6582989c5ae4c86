//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading timesheet
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TimesheetConfig;

/// Loads and provides access to timesheet configuration.
///
/// # Example
///
/// ```no_run
/// use weekly_timesheet::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timesheet.yaml").unwrap();
/// println!("Overtime after {}h", loader.config().weekly_overtime_threshold_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: TimesheetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or unknown values
    /// - A value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Builds configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        let config = if content.trim().is_empty() {
            TimesheetConfig::default()
        } else {
            serde_yaml::from_str::<TimesheetConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: "<inline>".to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: TimesheetConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &TimesheetConfig {
        &self.config
    }
}
