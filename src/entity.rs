// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Common entity surface.

/// The read surface shared by all entities.
///
/// Host runtimes that only display state can work against this trait
/// without caring whether an entity is a light or a switch.
pub trait Entity {
    /// Returns the configured display name.
    fn name(&self) -> &str;

    /// Returns the last-notified on/off status, or `None` if no
    /// notification for the status variable has arrived yet.
    fn is_on(&self) -> Option<bool>;
}
