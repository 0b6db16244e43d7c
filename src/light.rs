// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light entity bound to PLC variables.
//!
//! An [`AdsLight`] maps on/off, brightness, and RGBW color between
//! entity-level commands and up to three remote variables:
//!
//! - a boolean status variable (required)
//! - an unsigned 16-bit brightness variable (optional)
//! - a 4-element unsigned 16-bit RGBW array variable (optional)
//!
//! The configured variables fix the [`ColorMode`] at construction, with
//! RGBW taking priority over brightness.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::binding::VariableBinding;
use crate::capabilities::ColorMode;
use crate::config::LightConfig;
use crate::entity::Entity;
use crate::error::Result;
use crate::state::LightState;
use crate::types::{PlcType, PlcValue, RGBW_CHANNELS, RgbwColor};

/// Parameters for a turn-on command.
///
/// Both fields are optional; an empty request turns the light on without
/// touching brightness or color. `rgbw_color` is a free-length sequence on
/// purpose: a payload that does not have exactly 4 elements is dropped
/// without a write and without an error.
///
/// # Examples
///
/// ```
/// use adslink::TurnOnRequest;
///
/// let request = TurnOnRequest::new()
///     .with_brightness(200)
///     .with_rgbw_color([255, 0, 0, 0]);
/// assert_eq!(request.brightness, Some(200));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnOnRequest {
    /// Brightness to write, if the light has a brightness variable.
    pub brightness: Option<u16>,
    /// RGBW channels to write, if the light has a color variable.
    pub rgbw_color: Option<Vec<u8>>,
}

impl TurnOnRequest {
    /// Creates an empty request (plain turn-on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the brightness to write.
    #[must_use]
    pub fn with_brightness(mut self, brightness: u16) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the RGBW channels to write.
    #[must_use]
    pub fn with_rgbw_color(mut self, channels: impl Into<Vec<u8>>) -> Self {
        self.rgbw_color = Some(channels.into());
        self
    }
}

impl From<RgbwColor> for TurnOnRequest {
    fn from(color: RgbwColor) -> Self {
        let (r, g, b, w) = color.channels();
        Self::new().with_rgbw_color([r, g, b, w])
    }
}

/// A light entity backed by PLC variables.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use adslink::{AdsLight, LightConfig, MemoryPlc, TurnOnRequest};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> adslink::Result<()> {
/// let plc = Arc::new(MemoryPlc::new());
/// let config = LightConfig::new("GVL.bLight").with_brightness_variable("GVL.nDimmer");
/// let light = AdsLight::new(Arc::clone(&plc), config)?;
/// light.register().await?;
///
/// light.turn_on(&TurnOnRequest::new().with_brightness(128)).await?;
/// assert_eq!(light.brightness(), Some(128));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AdsLight<B: VariableBinding> {
    binding: Arc<B>,
    name: String,
    status_variable: String,
    brightness_variable: Option<String>,
    rgbw_variable: Option<String>,
    color_mode: ColorMode,
    state: Arc<RwLock<LightState>>,
}

impl<B: VariableBinding> AdsLight<B> {
    /// Creates a light entity from its configuration.
    ///
    /// The capability mode is fixed here: a configured RGBW variable
    /// selects [`ColorMode::Rgbw`] even when a brightness variable is
    /// also configured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the
    /// configuration carries blank variable names.
    pub fn new(binding: Arc<B>, config: LightConfig) -> Result<Self> {
        config.validate()?;
        let color_mode = ColorMode::select(
            config.brightness_variable.is_some(),
            config.rgbw_variable.is_some(),
        );
        Ok(Self {
            binding,
            name: config.name,
            status_variable: config.status_variable,
            brightness_variable: config.brightness_variable,
            rgbw_variable: config.rgbw_variable,
            color_mode,
            state: Arc::new(RwLock::new(LightState::new())),
        })
    }

    /// Registers the device notifications this light depends on.
    ///
    /// Subscribes to the status variable as a `BOOL` and, when configured,
    /// to the brightness variable as a `UINT` and the color variable as a
    /// 4-element `UINT` array. Each notification updates its own state
    /// slot, last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Binding`](crate::Error::Binding) if a subscription
    /// cannot be registered.
    pub async fn register(&self) -> Result<()> {
        let state = Arc::clone(&self.state);
        let variable = self.status_variable.clone();
        self.binding
            .subscribe(
                &self.status_variable,
                PlcType::Bool,
                Box::new(move |value| match value.as_bool() {
                    Some(on) => state.write().set_on(on),
                    None => tracing::warn!(
                        variable = %variable,
                        value = ?value,
                        "status notification is not a BOOL, ignoring"
                    ),
                }),
            )
            .await?;

        if let Some(brightness_variable) = &self.brightness_variable {
            let state = Arc::clone(&self.state);
            let variable = brightness_variable.clone();
            self.binding
                .subscribe(
                    brightness_variable,
                    PlcType::Uint,
                    Box::new(move |value| match value.as_u16() {
                        Some(brightness) => state.write().set_brightness(brightness),
                        None => tracing::warn!(
                            variable = %variable,
                            value = ?value,
                            "brightness notification is not a UINT, ignoring"
                        ),
                    }),
                )
                .await?;
        }

        if let Some(rgbw_variable) = &self.rgbw_variable {
            let state = Arc::clone(&self.state);
            self.binding
                .subscribe(
                    rgbw_variable,
                    PlcType::UintArray(RGBW_CHANNELS),
                    // The raw sample is stored as-is; decoding and clamping
                    // happen on read so malformed samples never poison the
                    // previous slot value permanently.
                    Box::new(move |value| state.write().set_rgbw_raw(value)),
                )
                .await?;
        }

        Ok(())
    }

    /// Returns the capability mode fixed at construction.
    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Returns the last-notified brightness, unchanged and unclamped.
    ///
    /// `None` until a brightness notification arrives, and always `None`
    /// when no brightness variable is configured.
    #[must_use]
    pub fn brightness(&self) -> Option<u16> {
        self.state.read().brightness()
    }

    /// Returns the last-notified RGBW color, decoded defensively.
    ///
    /// Out-of-range channels are clamped to 0-255; otherwise-malformed
    /// samples yield `None` with a logged warning. See
    /// [`RgbwColor::from_plc`] for the exact contract.
    #[must_use]
    pub fn rgbw_color(&self) -> Option<RgbwColor> {
        let raw = self.state.read().rgbw_raw().cloned();
        raw.as_ref().and_then(RgbwColor::from_plc)
    }

    /// Turns the light on, optionally setting brightness and color.
    ///
    /// Always writes `true` to the status variable. A supplied brightness
    /// is written whenever a brightness variable is configured, regardless
    /// of the selected color mode. A supplied color is written only when a
    /// color variable is configured and the payload has exactly 4
    /// elements; other lengths are dropped silently.
    ///
    /// # Errors
    ///
    /// Binding-layer write failures propagate unmodified.
    pub async fn turn_on(&self, request: &TurnOnRequest) -> Result<()> {
        self.binding
            .write_by_name(&self.status_variable, PlcValue::Bool(true), PlcType::Bool)
            .await?;

        if let (Some(variable), Some(brightness)) =
            (&self.brightness_variable, request.brightness)
        {
            self.binding
                .write_by_name(variable, PlcValue::Uint(brightness), PlcType::Uint)
                .await?;
        }

        if let (Some(variable), Some(channels)) =
            (&self.rgbw_variable, request.rgbw_color.as_deref())
        {
            if channels.len() == RGBW_CHANNELS {
                let value = PlcValue::Array(
                    channels
                        .iter()
                        .map(|&c| PlcValue::Uint(u16::from(c)))
                        .collect(),
                );
                self.binding
                    .write_by_name(variable, value, PlcType::UintArray(RGBW_CHANNELS))
                    .await?;
            }
            // Payloads that are not exactly 4 channels are dropped.
        }

        Ok(())
    }

    /// Turns the light off.
    ///
    /// Writes `false` to the status variable; brightness and color are not
    /// touched.
    ///
    /// # Errors
    ///
    /// Binding-layer write failures propagate unmodified.
    pub async fn turn_off(&self) -> Result<()> {
        self.binding
            .write_by_name(&self.status_variable, PlcValue::Bool(false), PlcType::Bool)
            .await?;
        Ok(())
    }
}

impl<B: VariableBinding> Entity for AdsLight<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_on(&self) -> Option<bool> {
        self.state.read().on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LightConfig;
    use crate::error::Error;
    use crate::{ConfigError, MemoryPlc};

    fn light(config: LightConfig) -> AdsLight<MemoryPlc> {
        AdsLight::new(Arc::new(MemoryPlc::new()), config).unwrap()
    }

    #[test]
    fn color_mode_rgbw_wins_over_brightness() {
        let light = light(
            LightConfig::new("GVL.bLight")
                .with_brightness_variable("GVL.nDimmer")
                .with_rgbw_variable("GVL.aColor"),
        );
        assert_eq!(light.color_mode(), ColorMode::Rgbw);
    }

    #[test]
    fn color_mode_rgbw_only() {
        let light = light(LightConfig::new("GVL.bLight").with_rgbw_variable("GVL.aColor"));
        assert_eq!(light.color_mode(), ColorMode::Rgbw);
    }

    #[test]
    fn color_mode_brightness_only() {
        let light = light(LightConfig::new("GVL.bLight").with_brightness_variable("GVL.nDimmer"));
        assert_eq!(light.color_mode(), ColorMode::Brightness);
    }

    #[test]
    fn color_mode_onoff_by_default() {
        let light = light(LightConfig::new("GVL.bLight"));
        assert_eq!(light.color_mode(), ColorMode::OnOff);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = AdsLight::new(
            Arc::new(MemoryPlc::new()),
            LightConfig::new("GVL.bLight").with_rgbw_variable(""),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::EmptyVariable(_))
        ));
    }

    #[test]
    fn state_unknown_before_register() {
        let light = light(LightConfig::new("GVL.bLight").with_rgbw_variable("GVL.aColor"));
        assert_eq!(light.is_on(), None);
        assert_eq!(light.brightness(), None);
        assert_eq!(light.rgbw_color(), None);
    }

    #[test]
    fn turn_on_request_builder() {
        let request = TurnOnRequest::new()
            .with_brightness(77)
            .with_rgbw_color(vec![1, 2, 3]);
        assert_eq!(request.brightness, Some(77));
        assert_eq!(request.rgbw_color, Some(vec![1, 2, 3]));
    }

    #[test]
    fn turn_on_request_from_color() {
        let request = TurnOnRequest::from(RgbwColor::new(10, 20, 30, 40));
        assert_eq!(request.rgbw_color, Some(vec![10, 20, 30, 40]));
        assert_eq!(request.brightness, None);
    }

    #[test]
    fn entity_name() {
        let light = light(LightConfig::new("GVL.bLight").with_name("Workbench"));
        assert_eq!(light.name(), "Workbench");
    }
}
