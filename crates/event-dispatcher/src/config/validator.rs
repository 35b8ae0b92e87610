//! Binding configuration validation

use super::BindingConfig;
use crate::error::{DispatchError, Result};

/// Validator for [`BindingConfig`]
///
/// Checks that:
/// - Event names are non-empty
/// - Listener names are non-empty
/// - When a `listeners` section is present, every bound name is declared in it
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a binding configuration
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidConfiguration`] describing the first problem found.
    pub fn validate(config: &BindingConfig) -> Result<()> {
        for name in config.listeners.keys() {
            Self::validate_listener_name(name)?;
        }

        for name in &config.all_events {
            Self::validate_reference(config, name, None)?;
        }

        for (event, names) in &config.events {
            Self::validate_event_name(event)?;
            for name in names {
                Self::validate_reference(config, name, Some(event))?;
            }
        }

        Ok(())
    }

    /// Event names are matched exactly, so any non-empty string is accepted
    fn validate_event_name(event: &str) -> Result<()> {
        if event.is_empty() {
            return Err(DispatchError::InvalidConfiguration(
                "Event name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_listener_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(DispatchError::InvalidConfiguration(
                "Listener name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_reference(config: &BindingConfig, name: &str, event: Option<&str>) -> Result<()> {
        Self::validate_listener_name(name)?;

        if !config.listeners.is_empty() && !config.listeners.contains_key(name) {
            let scope = match event {
                Some(event) => format!("event '{}'", event),
                None => "all events".to_string(),
            };
            return Err(DispatchError::InvalidConfiguration(format!(
                "Listener '{}' bound to {} is not declared",
                name, scope
            )));
        }
        Ok(())
    }
}
