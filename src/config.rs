// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity configuration types.
//!
//! One configuration entry describes one entity: which PLC variables it is
//! bound to and its display name. Configurations deserialize from the host
//! platform's config format via serde, or can be built in code with the
//! constructor methods.

use serde::Deserialize;

use crate::error::ConfigError;

fn default_light_name() -> String {
    "ADS Light".to_string()
}

fn default_switch_name() -> String {
    "ADS Switch".to_string()
}

/// Configuration for a light entity.
///
/// Which optional variables are present decides the light's
/// [`ColorMode`](crate::ColorMode): an `rgbw_variable` selects RGBW color,
/// otherwise a `brightness_variable` selects brightness, otherwise the
/// light is on/off only.
///
/// # Examples
///
/// ```
/// use adslink::LightConfig;
///
/// let config = LightConfig::new("GVL.bKitchenLight")
///     .with_brightness_variable("GVL.nKitchenDimmer")
///     .with_name("Kitchen");
/// assert_eq!(config.name, "Kitchen");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LightConfig {
    /// Boolean status variable, written by turn on/off (required).
    pub status_variable: String,
    /// Display name of the entity.
    #[serde(default = "default_light_name")]
    pub name: String,
    /// Unsigned 16-bit brightness variable.
    #[serde(default)]
    pub brightness_variable: Option<String>,
    /// 4-element unsigned 16-bit RGBW color array variable.
    #[serde(default)]
    pub rgbw_variable: Option<String>,
}

impl LightConfig {
    /// Creates a configuration for an on/off-only light.
    #[must_use]
    pub fn new(status_variable: impl Into<String>) -> Self {
        Self {
            status_variable: status_variable.into(),
            name: default_light_name(),
            brightness_variable: None,
            rgbw_variable: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the brightness variable.
    #[must_use]
    pub fn with_brightness_variable(mut self, variable: impl Into<String>) -> Self {
        self.brightness_variable = Some(variable.into());
        self
    }

    /// Sets the RGBW color variable.
    #[must_use]
    pub fn with_rgbw_variable(mut self, variable: impl Into<String>) -> Self {
        self.rgbw_variable = Some(variable.into());
        self
    }

    /// Checks the configuration for blank variable names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the status variable or any configured
    /// optional variable is empty or whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_blank("status_variable", Some(&self.status_variable))?;
        require_non_blank("brightness_variable", self.brightness_variable.as_deref())?;
        require_non_blank("rgbw_variable", self.rgbw_variable.as_deref())?;
        Ok(())
    }
}

/// Configuration for a switch entity.
///
/// The status variable is read for on/off state and written when no
/// dedicated command variable is configured. `turn_on_variable` and
/// `turn_off_variable` are edge-triggered command variables that receive a
/// `true` pulse instead.
///
/// # Examples
///
/// ```
/// use adslink::SwitchConfig;
///
/// let config = SwitchConfig::new("GVL.bPumpRunning")
///     .with_turn_on_variable("GVL.bPumpStart")
///     .with_turn_off_variable("GVL.bPumpStop");
/// assert_eq!(config.name, "ADS Switch");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SwitchConfig {
    /// Boolean status variable (required).
    pub status_variable: String,
    /// Display name of the entity.
    #[serde(default = "default_switch_name")]
    pub name: String,
    /// Dedicated turn-on command variable.
    #[serde(default)]
    pub turn_on_variable: Option<String>,
    /// Dedicated turn-off command variable.
    #[serde(default)]
    pub turn_off_variable: Option<String>,
}

impl SwitchConfig {
    /// Creates a configuration for a plain switch.
    #[must_use]
    pub fn new(status_variable: impl Into<String>) -> Self {
        Self {
            status_variable: status_variable.into(),
            name: default_switch_name(),
            turn_on_variable: None,
            turn_off_variable: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the dedicated turn-on command variable.
    #[must_use]
    pub fn with_turn_on_variable(mut self, variable: impl Into<String>) -> Self {
        self.turn_on_variable = Some(variable.into());
        self
    }

    /// Sets the dedicated turn-off command variable.
    #[must_use]
    pub fn with_turn_off_variable(mut self, variable: impl Into<String>) -> Self {
        self.turn_off_variable = Some(variable.into());
        self
    }

    /// Checks the configuration for blank variable names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the status variable or any configured
    /// command variable is empty or whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_blank("status_variable", Some(&self.status_variable))?;
        require_non_blank("turn_on_variable", self.turn_on_variable.as_deref())?;
        require_non_blank("turn_off_variable", self.turn_off_variable.as_deref())?;
        Ok(())
    }
}

fn require_non_blank(field: &str, value: Option<&str>) -> Result<(), ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyVariable(field.to_string())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_config_defaults() {
        let config = LightConfig::new("GVL.bLight");
        assert_eq!(config.name, "ADS Light");
        assert!(config.brightness_variable.is_none());
        assert!(config.rgbw_variable.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn light_config_builder() {
        let config = LightConfig::new("GVL.bLight")
            .with_name("Hallway")
            .with_brightness_variable("GVL.nDimmer")
            .with_rgbw_variable("GVL.aColor");
        assert_eq!(config.name, "Hallway");
        assert_eq!(config.brightness_variable.as_deref(), Some("GVL.nDimmer"));
        assert_eq!(config.rgbw_variable.as_deref(), Some("GVL.aColor"));
    }

    #[test]
    fn light_config_rejects_blank_status() {
        let config = LightConfig::new("  ");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyVariable("status_variable".to_string()))
        );
    }

    #[test]
    fn light_config_rejects_blank_optional() {
        let config = LightConfig::new("GVL.bLight").with_brightness_variable("");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyVariable("brightness_variable".to_string()))
        );
    }

    #[test]
    fn light_config_from_json() {
        let config: LightConfig = serde_json::from_str(
            r#"{
                "status_variable": "GVL.bLight",
                "rgbw_variable": "GVL.aColor"
            }"#,
        )
        .unwrap();
        assert_eq!(config.status_variable, "GVL.bLight");
        assert_eq!(config.name, "ADS Light");
        assert!(config.brightness_variable.is_none());
        assert_eq!(config.rgbw_variable.as_deref(), Some("GVL.aColor"));
    }

    #[test]
    fn light_config_json_requires_status() {
        let result: Result<LightConfig, _> = serde_json::from_str(r#"{"name": "Lamp"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn switch_config_defaults() {
        let config = SwitchConfig::new("GVL.bPump");
        assert_eq!(config.name, "ADS Switch");
        assert!(config.turn_on_variable.is_none());
        assert!(config.turn_off_variable.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn switch_config_from_json() {
        let config: SwitchConfig = serde_json::from_str(
            r#"{
                "status_variable": "GVL.bPumpRunning",
                "name": "Pool pump",
                "turn_off_variable": "GVL.bPumpStop"
            }"#,
        )
        .unwrap();
        assert_eq!(config.name, "Pool pump");
        assert!(config.turn_on_variable.is_none());
        assert_eq!(config.turn_off_variable.as_deref(), Some("GVL.bPumpStop"));
    }

    #[test]
    fn switch_config_rejects_blank_command_variable() {
        let config = SwitchConfig::new("GVL.bPump").with_turn_off_variable(" ");
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyVariable("turn_off_variable".to_string()))
        );
    }
}
