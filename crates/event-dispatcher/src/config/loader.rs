//! Configuration loader for listener bindings

use std::{fs, path::Path};

use tracing::debug;

use super::BindingConfig;
use crate::error::{DispatchError, Result};

/// Loads [`BindingConfig`] from YAML
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load bindings from a YAML file
    ///
    /// A missing file is not an error and yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or fails
    /// validation.
    pub fn load_from_path(path: &Path) -> Result<BindingConfig> {
        if !path.exists() {
            debug!(path = %path.display(), "No binding configuration file");
            return Ok(BindingConfig::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse_yaml(&content)?;
        debug!(
            path = %path.display(),
            listeners = config.listeners.len(),
            events = config.events.len(),
            "Loaded binding configuration"
        );
        Ok(config)
    }

    /// Parse and validate YAML content
    ///
    /// Expected format:
    /// ```yaml
    /// listeners:
    ///   audit: {}
    /// all_events: [audit]
    /// events:
    ///   file_saved: [audit]
    /// ```
    ///
    /// Every section is optional; an empty document is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::SerializationError`] for malformed YAML and
    /// [`DispatchError::InvalidConfiguration`] for invalid bindings.
    pub fn parse_yaml(content: &str) -> Result<BindingConfig> {
        if content.trim().is_empty() {
            return Ok(BindingConfig::default());
        }

        let config: BindingConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render a configuration back to YAML
    pub fn to_yaml(config: &BindingConfig) -> Result<String> {
        serde_yaml::to_string(config).map_err(DispatchError::from)
    }
}
