// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The variable binding layer.
//!
//! A [`VariableBinding`] gives entities access to named, typed memory
//! locations on a PLC: writes by symbol name and push-based change
//! notifications. The single binding instance backing a PLC connection is
//! shared across all entities and passed to each entity at construction.
//!
//! This crate ships one implementation, [`MemoryPlc`], an in-memory
//! simulated PLC used by tests, examples, and loopback setups. Bindings
//! backed by a real ADS router live outside this crate; anything
//! implementing the trait plugs in the same way.

mod memory;

pub use memory::MemoryPlc;

use crate::error::BindingError;
use crate::types::{PlcType, PlcValue};

/// Change-notification callback for a subscribed variable.
///
/// Handlers may run concurrently with command execution; they should only
/// update state and return quickly.
pub type NotificationHandler = Box<dyn Fn(PlcValue) + Send + Sync>;

/// Access to named remote variables on a PLC.
///
/// Entities are generic over this trait, so the binding implementation is
/// chosen at compile time. All methods take the variable's symbolic name
/// and its declared [`PlcType`].
pub trait VariableBinding: Send + Sync {
    /// Registers a change-notification callback for a variable.
    ///
    /// If the variable's current value is known, the handler is invoked
    /// with it before this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError`] if the device notification cannot be
    /// registered.
    fn subscribe(
        &self,
        variable: &str,
        plc_type: PlcType,
        handler: NotificationHandler,
    ) -> impl Future<Output = Result<(), BindingError>> + Send;

    /// Writes a value to a variable, completing before returning.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError`] if the write is rejected or the connection
    /// is down. Entities propagate this unmodified to the command caller.
    fn write_by_name(
        &self,
        variable: &str,
        value: PlcValue,
        plc_type: PlcType,
    ) -> impl Future<Output = Result<(), BindingError>> + Send;
}
