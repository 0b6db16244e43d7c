// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switch entity bound to PLC variables.
//!
//! An [`AdsSwitch`] reads its on/off state from one boolean status
//! variable. Commands either toggle that same variable or, when dedicated
//! command variables are configured, pulse those instead: PLC programs
//! often expose edge-triggered `bStart`/`bStop` flags rather than a
//! level-held state, so a dedicated turn-off variable receives `true`,
//! not `false`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::binding::VariableBinding;
use crate::config::SwitchConfig;
use crate::entity::Entity;
use crate::error::Result;
use crate::state::SwitchState;
use crate::types::{PlcType, PlcValue};

/// A switch entity backed by PLC variables.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use adslink::{AdsSwitch, Entity, MemoryPlc, SwitchConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> adslink::Result<()> {
/// let plc = Arc::new(MemoryPlc::new());
/// let switch = AdsSwitch::new(Arc::clone(&plc), SwitchConfig::new("GVL.bPump"))?;
/// switch.register().await?;
///
/// switch.turn_on().await?;
/// assert_eq!(switch.is_on(), Some(true));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AdsSwitch<B: VariableBinding> {
    binding: Arc<B>,
    name: String,
    status_variable: String,
    turn_on_variable: Option<String>,
    turn_off_variable: Option<String>,
    state: Arc<RwLock<SwitchState>>,
}

impl<B: VariableBinding> AdsSwitch<B> {
    /// Creates a switch entity from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the
    /// configuration carries blank variable names.
    pub fn new(binding: Arc<B>, config: SwitchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            binding,
            name: config.name,
            status_variable: config.status_variable,
            turn_on_variable: config.turn_on_variable,
            turn_off_variable: config.turn_off_variable,
            state: Arc::new(RwLock::new(SwitchState::new())),
        })
    }

    /// Registers the device notification for the status variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Binding`](crate::Error::Binding) if the
    /// subscription cannot be registered.
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
        Ok(())
    }

    /// Turns the switch on.
    ///
    /// Writes `true` to the dedicated turn-on variable when configured,
    /// otherwise to the status variable itself.
    ///
    /// # Errors
    ///
    /// Binding-layer write failures propagate unmodified.
    pub async fn turn_on(&self) -> Result<()> {
        let variable = self
            .turn_on_variable
            .as_deref()
            .unwrap_or(&self.status_variable);
        self.binding
            .write_by_name(variable, PlcValue::Bool(true), PlcType::Bool)
            .await?;
        Ok(())
    }

    /// Turns the switch off.
    ///
    /// A dedicated turn-off variable is edge-triggered and receives a
    /// `true` pulse; without one, `false` is written to the status
    /// variable itself.
    ///
    /// # Errors
    ///
    /// Binding-layer write failures propagate unmodified.
    pub async fn turn_off(&self) -> Result<()> {
        match &self.turn_off_variable {
            Some(variable) => {
                self.binding
                    .write_by_name(variable, PlcValue::Bool(true), PlcType::Bool)
                    .await?;
            }
            None => {
                self.binding
                    .write_by_name(&self.status_variable, PlcValue::Bool(false), PlcType::Bool)
                    .await?;
            }
        }
        Ok(())
    }
}

impl<B: VariableBinding> Entity for AdsSwitch<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_on(&self) -> Option<bool> {
        self.state.read().on()
    }
}
