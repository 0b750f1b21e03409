//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the planning
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PlanningConfig;

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "planning.yaml";

/// Loads and provides access to the planning configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── planning.yaml   # Active statuses, clipping, and rounding
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_planning_engine::config::ConfigLoader;
/// use labor_planning_engine::models::EmploymentStatus;
///
/// let loader = ConfigLoader::load("./config")?;
/// assert!(loader.config().is_active_status(EmploymentStatus::Active));
/// # Ok::<(), labor_planning_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PlanningConfig,
}

impl ConfigLoader {
    /// Loads `planning.yaml` from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        Self::load_file(path.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration from an explicit file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<PlanningConfig>(path)?;
        config.validate()?;

        debug!(
            path = %path.display(),
            active_statuses = config.active_statuses.len(),
            amount_scale = config.amount_scale,
            "Loaded planning configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PlanningConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentStatus;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config"
    }

    /// Writes `content` to a fresh file under the system temp directory.
    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "labor-planning-engine-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config, PlanningConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains(CONFIG_FILE_NAME));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let path = write_temp_config("malformed", "active_statuses: [active\n");
        match ConfigLoader::load_file(&path) {
            Err(EngineError::ConfigParseError { path: p, .. }) => {
                assert!(p.contains(CONFIG_FILE_NAME));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_value_returns_invalid_config() {
        let path = write_temp_config("invalid", "amount_scale: 40\n");
        assert!(matches!(
            ConfigLoader::load_file(&path),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_load_custom_statuses() {
        let path = write_temp_config("custom", "active_statuses: [active]\namount_scale: 0\n");
        let loader = ConfigLoader::load_file(&path).unwrap();
        assert!(loader.config().is_active_status(EmploymentStatus::Active));
        assert!(!loader.config().is_active_status(EmploymentStatus::OnLeave));
        assert_eq!(loader.config().amount_scale, 0);
    }
}
