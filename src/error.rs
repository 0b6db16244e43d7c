// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `adslink` library.
//!
//! This module provides the error hierarchy for the two failure domains of
//! the crate: entity configuration and the variable binding layer. Malformed
//! *readings* are not errors here: per the lenient-read policy they degrade
//! to an absent value plus a logged warning and never surface as `Err`.

use thiserror::Error;

use crate::types::PlcType;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Entity configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The variable binding layer reported a failure.
    #[error("binding error: {0}")]
    Binding(#[from] BindingError),
}

/// Errors related to entity configuration.
///
/// These are detected at construction time, before any subscription or
/// write is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable name is missing from the configuration.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// A configured variable name is empty or blank.
    #[error("variable name for {0} is empty")]
    EmptyVariable(String),
}

/// Errors reported by a [`VariableBinding`](crate::binding::VariableBinding).
///
/// Write and subscribe failures are not handled by the entities; they
/// propagate unmodified to the command caller, which owns retry and
/// surfacing policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The PLC has no symbol with the requested name.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// The value does not match the declared type of the variable.
    #[error("type mismatch for {variable}: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The variable the write was addressed to.
        variable: String,
        /// The declared PLC type of the variable.
        expected: PlcType,
        /// Description of the rejected value.
        actual: String,
    },

    /// The connection to the PLC was lost.
    #[error("connection lost: {0}")]
    ConnectionLost(String),

    /// The ADS router returned an error code.
    #[error("ADS error {code}: {message}")]
    Ads {
        /// The ADS return code.
        code: u32,
        /// Human-readable description of the code.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::EmptyVariable("status_variable".to_string());
        assert_eq!(err.to_string(), "variable name for status_variable is empty");
    }

    #[test]
    fn binding_error_display() {
        let err = BindingError::TypeMismatch {
            variable: "GVL.bLight".to_string(),
            expected: PlcType::Bool,
            actual: "Uint(3)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "type mismatch for GVL.bLight: expected BOOL, got Uint(3)"
        );
    }

    #[test]
    fn ads_error_display() {
        let err = BindingError::Ads {
            code: 1808,
            message: "symbol not found".to_string(),
        };
        assert_eq!(err.to_string(), "ADS error 1808: symbol not found");
    }

    #[test]
    fn error_from_binding_error() {
        let binding = BindingError::ConnectionLost("router gone".to_string());
        let err: Error = binding.into();
        assert!(matches!(err, Error::Binding(BindingError::ConnectionLost(_))));
    }

    #[test]
    fn error_from_config_error() {
        let config = ConfigError::MissingVariable("status_variable".to_string());
        let err: Error = config.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
