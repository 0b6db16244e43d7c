// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types exchanged with the PLC.
//!
//! - [`PlcType`] - declared type tag of a remote variable
//! - [`PlcValue`] - dynamic, untrusted value as delivered by the binding layer
//! - [`RgbwColor`] - 4-channel color with defensive decoding

mod plc_value;
mod rgbw;

pub use plc_value::{PlcType, PlcValue};
pub use rgbw::{RGBW_CHANNELS, RgbwColor};
