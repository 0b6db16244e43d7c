// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light capability modes.
//!
//! A light's capability mode is fixed at construction by which optional
//! variables its configuration carries. It never changes over the entity's
//! lifetime.

/// The feature set a light entity supports.
///
/// Selection follows the configured variables, with RGBW taking priority
/// over brightness when both are configured:
///
/// ```
/// use adslink::ColorMode;
///
/// // rgbw wins even when a brightness variable is also present
/// let mode = ColorMode::select(true, true);
/// assert_eq!(mode, ColorMode::Rgbw);
///
/// assert_eq!(ColorMode::select(true, false), ColorMode::Brightness);
/// assert_eq!(ColorMode::select(false, false), ColorMode::OnOff);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// On/off control only.
    OnOff,
    /// On/off plus a brightness channel.
    Brightness,
    /// On/off plus a 4-channel RGBW color.
    Rgbw,
}

impl ColorMode {
    /// Selects the capability mode from which optional variables are
    /// configured.
    #[must_use]
    pub fn select(has_brightness: bool, has_rgbw: bool) -> Self {
        if has_rgbw {
            Self::Rgbw
        } else if has_brightness {
            Self::Brightness
        } else {
            Self::OnOff
        }
    }

    /// Returns `true` for modes with a brightness channel.
    #[must_use]
    pub fn supports_brightness(self) -> bool {
        matches!(self, Self::Brightness)
    }

    /// Returns `true` for the RGBW color mode.
    #[must_use]
    pub fn supports_rgbw(self) -> bool {
        matches!(self, Self::Rgbw)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnOff => write!(f, "onoff"),
            Self::Brightness => write!(f, "brightness"),
            Self::Rgbw => write!(f, "rgbw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgbw_takes_priority_over_brightness() {
        assert_eq!(ColorMode::select(true, true), ColorMode::Rgbw);
        assert_eq!(ColorMode::select(false, true), ColorMode::Rgbw);
    }

    #[test]
    fn brightness_without_rgbw() {
        assert_eq!(ColorMode::select(true, false), ColorMode::Brightness);
    }

    #[test]
    fn onoff_without_optionals() {
        assert_eq!(ColorMode::select(false, false), ColorMode::OnOff);
    }

    #[test]
    fn predicates() {
        assert!(ColorMode::Rgbw.supports_rgbw());
        assert!(!ColorMode::Rgbw.supports_brightness());
        assert!(ColorMode::Brightness.supports_brightness());
        assert!(!ColorMode::OnOff.supports_brightness());
        assert!(!ColorMode::OnOff.supports_rgbw());
    }

    #[test]
    fn display() {
        assert_eq!(ColorMode::Rgbw.to_string(), "rgbw");
        assert_eq!(ColorMode::OnOff.to_string(), "onoff");
    }
}
