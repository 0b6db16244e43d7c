// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGBW color type with defensive decoding from raw PLC samples.
//!
//! RGBW lights expose their color as a 4-element `UINT` array on the PLC.
//! What actually arrives through a notification is untrusted: the symbol may
//! be mis-declared, the array may have the wrong length, elements may not be
//! numeric, and numeric elements may exceed the 0-255 channel range (a
//! `UINT` holds up to 65535). [`RgbwColor::from_plc`] absorbs all of that
//! without panicking.

use std::fmt;

use crate::types::PlcValue;

/// Number of channels in an RGBW color array.
pub const RGBW_CHANNELS: usize = 4;

/// RGBW color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use adslink::types::RgbwColor;
///
/// let warm = RgbwColor::new(255, 160, 60, 40);
/// assert_eq!(warm.red(), 255);
/// assert_eq!(warm.white(), 40);
/// assert_eq!(warm.to_string(), "#FFA03C28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbwColor {
    red: u8,
    green: u8,
    blue: u8,
    white: u8,
}

impl RgbwColor {
    /// Creates a new RGBW color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Decodes an RGBW color from a raw PLC sample.
    ///
    /// Expects a 4-element array whose elements coerce to integers. The
    /// decode is lenient on range: out-of-range channels are clamped to
    /// 0-255 and the sample is kept, with a warning naming each channel.
    /// Anything else malformed (wrong shape, wrong length, non-numeric
    /// element) degrades to `None` plus a warning. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use adslink::types::{PlcValue, RgbwColor};
    ///
    /// let raw = PlcValue::Array(vec![
    ///     PlcValue::Uint(300),
    ///     PlcValue::Int(-5),
    ///     PlcValue::Uint(128),
    ///     PlcValue::Uint(256),
    /// ]);
    /// assert_eq!(RgbwColor::from_plc(&raw), Some(RgbwColor::new(255, 0, 128, 255)));
    ///
    /// assert_eq!(RgbwColor::from_plc(&PlcValue::Uint(7)), None);
    /// ```
    #[must_use]
    pub fn from_plc(raw: &PlcValue) -> Option<Self> {
        let PlcValue::Array(items) = raw else {
            tracing::warn!(
                sample = ?raw,
                "unexpected rgbw_color value (expected 4-element array)"
            );
            return None;
        };
        if items.len() != RGBW_CHANNELS {
            tracing::warn!(
                len = items.len(),
                sample = ?raw,
                "unexpected rgbw_color value (expected 4-element array)"
            );
            return None;
        }

        let mut channels = [0i64; RGBW_CHANNELS];
        for (slot, item) in channels.iter_mut().zip(items) {
            match item.as_i64() {
                Some(v) => *slot = v,
                None => {
                    tracing::warn!(sample = ?raw, "rgbw_color has non-integer values");
                    return None;
                }
            }
        }

        let [r, g, b, w] = channels;
        if channels.iter().any(|v| !(0..=255).contains(v)) {
            tracing::warn!(
                r, g, b, w,
                "rgbw_color values out of range 0-255, clamping"
            );
        }

        Some(Self::new(clamp(r), clamp(g), clamp(b), clamp(w)))
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the white channel.
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// Returns the channels as an ordered `(R, G, B, W)` tuple.
    #[must_use]
    pub const fn channels(&self) -> (u8, u8, u8, u8) {
        (self.red, self.green, self.blue, self.white)
    }

    /// Encodes this color as a 4-element `UINT` array for a PLC write.
    #[must_use]
    pub fn to_plc(&self) -> PlcValue {
        PlcValue::Array(vec![
            PlcValue::Uint(u16::from(self.red)),
            PlcValue::Uint(u16::from(self.green)),
            PlcValue::Uint(u16::from(self.blue)),
            PlcValue::Uint(u16::from(self.white)),
        ])
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

impl From<[u8; RGBW_CHANNELS]> for RgbwColor {
    fn from([red, green, blue, white]: [u8; RGBW_CHANNELS]) -> Self {
        Self::new(red, green, blue, white)
    }
}

impl From<(u8, u8, u8, u8)> for RgbwColor {
    fn from((red, green, blue, white): (u8, u8, u8, u8)) -> Self {
        Self::new(red, green, blue, white)
    }
}

impl fmt::Display for RgbwColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.white
        )
    }
}
