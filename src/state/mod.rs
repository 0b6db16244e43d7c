// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity state tracking.
//!
//! State is re-derived entirely from binding-layer notifications: every
//! slot starts as `None` and stays `None` until the first notification for
//! its variable arrives. Slots are independent and last-write-wins; the
//! color slot keeps the *raw* sample so the defensive decode happens on
//! read, the same way a fresh notification would be decoded.

use crate::types::PlcValue;

/// Tracked state of a light entity.
///
/// # Examples
///
/// ```
/// use adslink::state::LightState;
///
/// let mut state = LightState::new();
/// assert_eq!(state.on(), None);
/// state.set_on(true);
/// assert_eq!(state.on(), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightState {
    /// On/off status from the status variable.
    on: Option<bool>,
    /// Brightness as last notified, unclamped.
    brightness: Option<u16>,
    /// Raw RGBW sample as last notified; decoded on read.
    rgbw_raw: Option<PlcValue>,
}

impl LightState {
    /// Creates a new empty light state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the on/off status.
    #[must_use]
    pub fn on(&self) -> Option<bool> {
        self.on
    }

    /// Sets the on/off status.
    pub fn set_on(&mut self, on: bool) {
        self.on = Some(on);
    }

    /// Gets the brightness as last notified.
    #[must_use]
    pub fn brightness(&self) -> Option<u16> {
        self.brightness
    }

    /// Sets the brightness.
    pub fn set_brightness(&mut self, brightness: u16) {
        self.brightness = Some(brightness);
    }

    /// Gets the raw RGBW sample as last notified.
    #[must_use]
    pub fn rgbw_raw(&self) -> Option<&PlcValue> {
        self.rgbw_raw.as_ref()
    }

    /// Stores a raw RGBW sample.
    pub fn set_rgbw_raw(&mut self, raw: PlcValue) {
        self.rgbw_raw = Some(raw);
    }
}

/// Tracked state of a switch entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchState {
    on: Option<bool>,
}

impl SwitchState {
    /// Creates a new empty switch state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the on/off status.
    #[must_use]
    pub fn on(&self) -> Option<bool> {
        self.on
    }

    /// Sets the on/off status.
    pub fn set_on(&mut self, on: bool) {
        self.on = Some(on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_state_starts_unknown() {
        let state = LightState::new();
        assert_eq!(state.on(), None);
        assert_eq!(state.brightness(), None);
        assert!(state.rgbw_raw().is_none());
    }

    #[test]
    fn light_state_slots_are_independent() {
        let mut state = LightState::new();
        state.set_brightness(300);
        assert_eq!(state.on(), None);
        assert_eq!(state.brightness(), Some(300));

        state.set_on(false);
        assert_eq!(state.brightness(), Some(300));
    }

    #[test]
    fn light_state_last_write_wins() {
        let mut state = LightState::new();
        state.set_rgbw_raw(PlcValue::Uint(1));
        state.set_rgbw_raw(PlcValue::Bool(false));
        assert_eq!(state.rgbw_raw(), Some(&PlcValue::Bool(false)));
    }

    #[test]
    fn switch_state_on_off() {
        let mut state = SwitchState::new();
        assert_eq!(state.on(), None);
        state.set_on(true);
        assert_eq!(state.on(), Some(true));
        state.set_on(false);
        assert_eq!(state.on(), Some(false));
    }
}
