// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory variable binding backed by a symbol table.
//!
//! [`MemoryPlc`] simulates a PLC for tests, doc examples, and loopback
//! setups: writes land in a `HashMap`, notifications fire synchronously,
//! and every write is recorded per symbol so tests can assert the exact
//! write sequence an entity produced.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::binding::{NotificationHandler, VariableBinding};
use crate::error::BindingError;
use crate::types::{PlcType, PlcValue};

#[derive(Default)]
struct Symbol {
    value: Option<PlcValue>,
    handlers: Vec<NotificationHandler>,
    writes: Vec<PlcValue>,
}

/// An in-memory simulated PLC.
///
/// Symbols are created on first use; there is no predeclared symbol table.
/// Writes are type-checked against the declared [`PlcType`], while
/// [`notify`](Self::notify) deliberately bypasses the check so tests can
/// reproduce a mis-declared symbol delivering malformed samples.
///
/// # Examples
///
/// ```
/// use adslink::{MemoryPlc, PlcType, PlcValue, VariableBinding};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), adslink::BindingError> {
/// let plc = MemoryPlc::new();
/// plc.write_by_name("GVL.bLight", PlcValue::Bool(true), PlcType::Bool).await?;
/// assert_eq!(plc.value("GVL.bLight"), Some(PlcValue::Bool(true)));
/// # Ok(())
/// # }
/// ```
pub struct MemoryPlc {
    symbols: RwLock<HashMap<String, Symbol>>,
    offline: RwLock<bool>,
}

impl MemoryPlc {
    /// Creates a new empty simulated PLC.
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: RwLock::new(HashMap::new()),
            offline: RwLock::new(false),
        }
    }

    /// Seeds a symbol with a value without firing notifications or
    /// recording a write.
    ///
    /// Useful to model state that exists before any subscriber registers;
    /// a later [`subscribe`](VariableBinding::subscribe) delivers it as the
    /// initial notification.
    pub fn preload(&self, variable: &str, value: PlcValue) {
        let mut symbols = self.symbols.write();
        symbols.entry(variable.to_string()).or_default().value = Some(value);
    }

    /// Simulates a device-side change: stores the value and fires all
    /// handlers registered for the symbol.
    ///
    /// No type check is applied, so tests can deliver samples that a
    /// correctly declared symbol would never produce.
    pub fn notify(&self, variable: &str, value: PlcValue) {
        // Handlers run outside the table lock; they may call back into us.
        let handlers: Vec<NotificationHandler> = {
            let mut symbols = self.symbols.write();
            let symbol = symbols.entry(variable.to_string()).or_default();
            symbol.value = Some(value.clone());
            std::mem::take(&mut symbol.handlers)
        };
        for handler in &handlers {
            handler(value.clone());
        }
        self.symbols
            .write()
            .entry(variable.to_string())
            .or_default()
            .handlers
            .extend(handlers);
    }

    /// Returns the current value of a symbol, if any.
    #[must_use]
    pub fn value(&self, variable: &str) -> Option<PlcValue> {
        self.symbols.read().get(variable).and_then(|s| s.value.clone())
    }

    /// Returns the values written to a symbol via
    /// [`write_by_name`](VariableBinding::write_by_name), oldest first.
    #[must_use]
    pub fn writes(&self, variable: &str) -> Vec<PlcValue> {
        self.symbols
            .read()
            .get(variable)
            .map(|s| s.writes.clone())
            .unwrap_or_default()
    }

    /// Returns the total number of writes across all symbols.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.symbols.read().values().map(|s| s.writes.len()).sum()
    }

    /// Switches the simulated connection on or off.
    ///
    /// While offline, writes and subscriptions fail with
    /// [`BindingError::ConnectionLost`].
    pub fn set_offline(&self, offline: bool) {
        *self.offline.write() = offline;
    }

    fn check_online(&self) -> Result<(), BindingError> {
        if *self.offline.read() {
            return Err(BindingError::ConnectionLost(
                "simulated PLC is offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryPlc {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryPlc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPlc")
            .field("symbols", &self.symbols.read().len())
            .field("offline", &*self.offline.read())
            .finish()
    }
}

impl VariableBinding for MemoryPlc {
    async fn subscribe(
        &self,
        variable: &str,
        plc_type: PlcType,
        handler: NotificationHandler,
    ) -> Result<(), BindingError> {
        self.check_online()?;
        tracing::debug!(variable, %plc_type, "registering device notification");

        // First notification delivers the current value, when one exists.
        let current = self.value(variable);
        if let Some(value) = current {
            handler(value);
        }

        self.symbols
            .write()
            .entry(variable.to_string())
            .or_default()
            .handlers
            .push(handler);
        Ok(())
    }

    async fn write_by_name(
        &self,
        variable: &str,
        value: PlcValue,
        plc_type: PlcType,
    ) -> Result<(), BindingError> {
        self.check_online()?;
        if !value.matches(plc_type) {
            return Err(BindingError::TypeMismatch {
                variable: variable.to_string(),
                expected: plc_type,
                actual: format!("{value:?}"),
            });
        }
        tracing::debug!(variable, %plc_type, value = ?value, "write by name");

        let handlers: Vec<NotificationHandler> = {
            let mut symbols = self.symbols.write();
            let symbol = symbols.entry(variable.to_string()).or_default();
            symbol.value = Some(value.clone());
            symbol.writes.push(value.clone());
            std::mem::take(&mut symbol.handlers)
        };
        for handler in &handlers {
            handler(value.clone());
        }
        self.symbols
            .write()
            .entry(variable.to_string())
            .or_default()
            .handlers
            .extend(handlers);

        Ok(())
    }
}
