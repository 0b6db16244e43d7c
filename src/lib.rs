// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `adslink` - A Rust library to bridge Beckhoff ADS PLC variables to
//! home-automation entities.
//!
//! PLC programs expose their state as named, typed memory variables. This
//! library maps those variables onto two entity types a home-automation
//! host can drive:
//!
//! - **Lights**: on/off status, optional brightness, optional 4-channel
//!   RGBW color, each bound to its own remote variable
//! - **Switches**: on/off status, with optional dedicated edge-triggered
//!   turn-on / turn-off command variables
//!
//! Device I/O goes through the [`VariableBinding`] trait: entities are
//! generic over it, so any ADS client (or the bundled in-memory
//! [`MemoryPlc`]) can back them. State flows in push-based: the binding
//! notifies on value changes, entities keep the last notified value per
//! slot, and reads never block.
//!
//! Values coming out of notifications are treated as untrusted. Reads are
//! lenient: a color sample with out-of-range channels is clamped with a
//! logged warning, and anything malformed beyond repair degrades to an
//! unknown value instead of an error.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use adslink::{AdsLight, Entity, LightConfig, MemoryPlc, TurnOnRequest};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> adslink::Result<()> {
//!     let plc = Arc::new(MemoryPlc::new());
//!
//!     let config = LightConfig::new("GVL.bDeskLight")
//!         .with_brightness_variable("GVL.nDeskDimmer")
//!         .with_name("Desk light");
//!     let light = AdsLight::new(Arc::clone(&plc), config)?;
//!     light.register().await?;
//!
//!     light.turn_on(&TurnOnRequest::new().with_brightness(180)).await?;
//!     assert_eq!(light.is_on(), Some(true));
//!     assert_eq!(light.brightness(), Some(180));
//!
//!     light.turn_off().await?;
//!     assert_eq!(light.is_on(), Some(false));
//!     Ok(())
//! }
//! ```
//!
//! # Switches with command variables
//!
//! ```
//! use std::sync::Arc;
//! use adslink::{AdsSwitch, MemoryPlc, SwitchConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> adslink::Result<()> {
//!     let plc = Arc::new(MemoryPlc::new());
//!
//!     // bStop is edge-triggered on the PLC side: turning off pulses it
//!     // with `true` instead of writing `false` to the status variable.
//!     let config = SwitchConfig::new("GVL.bPumpRunning")
//!         .with_turn_on_variable("GVL.bPumpStart")
//!         .with_turn_off_variable("GVL.bPumpStop");
//!     let switch = AdsSwitch::new(Arc::clone(&plc), config)?;
//!     switch.register().await?;
//!
//!     switch.turn_off().await?;
//!     assert_eq!(
//!         plc.writes("GVL.bPumpStop"),
//!         vec![adslink::PlcValue::Bool(true)]
//!     );
//!     Ok(())
//! }
//! ```

pub mod binding;
mod capabilities;
mod config;
mod entity;
pub mod error;
mod light;
pub mod state;
mod switch;
pub mod types;

pub use binding::{MemoryPlc, NotificationHandler, VariableBinding};
pub use capabilities::ColorMode;
pub use config::{LightConfig, SwitchConfig};
pub use entity::Entity;
pub use error::{BindingError, ConfigError, Error, Result};
pub use light::{AdsLight, TurnOnRequest};
pub use switch::AdsSwitch;
pub use types::{PlcType, PlcValue, RgbwColor};
