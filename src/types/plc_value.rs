// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dynamic PLC values and declared type tags.
//!
//! Remote variables are declared with a [`PlcType`] tag, but the values a
//! binding layer actually delivers are untrusted at this boundary: a symbol
//! that was mis-declared on the PLC side can notify with the wrong shape or
//! type. [`PlcValue`] therefore models the full dynamic range, and readers
//! coerce defensively instead of assuming the declared tag holds.

use std::fmt;

/// Declared data type of a remote PLC variable.
///
/// Used when subscribing to or writing a variable by name, mirroring the
/// type tags of the ADS protocol.
///
/// # Examples
///
/// ```
/// use adslink::types::PlcType;
///
/// assert_eq!(PlcType::Bool.to_string(), "BOOL");
/// assert_eq!(PlcType::UintArray(4).to_string(), "ARRAY [0..3] OF UINT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlcType {
    /// Boolean scalar.
    Bool,
    /// Unsigned 16-bit scalar.
    Uint,
    /// Unsigned 16-bit array of the given length.
    UintArray(usize),
}

impl fmt::Display for PlcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "BOOL"),
            Self::Uint => write!(f, "UINT"),
            Self::UintArray(len) => write!(f, "ARRAY [0..{}] OF UINT", len.saturating_sub(1)),
        }
    }
}

/// A dynamically typed value delivered by or written to the binding layer.
///
/// Scalar variants cover the PLC types this crate interacts with plus the
/// shapes a misbehaving symbol can deliver. Values coming out of a
/// notification must be treated as untrusted; use the coercion helpers
/// rather than matching a single expected variant.
///
/// # Examples
///
/// ```
/// use adslink::types::PlcValue;
///
/// assert_eq!(PlcValue::Uint(128).as_i64(), Some(128));
/// assert_eq!(PlcValue::Int(-5).as_i64(), Some(-5));
/// assert_eq!(PlcValue::String("37".into()).as_i64(), Some(37));
/// assert_eq!(PlcValue::Bool(true).as_i64(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PlcValue {
    /// Boolean scalar (`BOOL`).
    Bool(bool),
    /// Unsigned 16-bit scalar (`UINT`).
    Uint(u16),
    /// Signed 32-bit scalar (`INT`/`DINT`).
    Int(i32),
    /// 32-bit float (`REAL`).
    Real(f32),
    /// Character string (`STRING`).
    String(String),
    /// Array of values.
    Array(Vec<PlcValue>),
}

impl PlcValue {
    /// Returns the boolean value, or `None` for non-boolean variants.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Coerces this value to an integer.
    ///
    /// `Uint` and `Int` convert exactly, `Real` truncates toward zero, and
    /// a `String` is parsed after trimming. `Bool`, arrays, and non-numeric
    /// strings do not coerce.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Uint(v) => Some(i64::from(*v)),
            Self::Int(v) => Some(i64::from(*v)),
            #[allow(clippy::cast_possible_truncation)]
            Self::Real(v) if v.is_finite() => Some(*v as i64),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerces this value to an unsigned 16-bit integer.
    ///
    /// Applies the same coercion as [`as_i64`](Self::as_i64), then rejects
    /// values outside the `UINT` range.
    #[must_use]
    pub fn as_u16(&self) -> Option<u16> {
        self.as_i64().and_then(|v| u16::try_from(v).ok())
    }

    /// Returns `true` if this value is acceptable for a variable declared
    /// with the given type.
    #[must_use]
    pub fn matches(&self, plc_type: PlcType) -> bool {
        match plc_type {
            PlcType::Bool => matches!(self, Self::Bool(_)),
            PlcType::Uint => matches!(self, Self::Uint(_)),
            PlcType::UintArray(len) => match self {
                Self::Array(items) => {
                    items.len() == len && items.iter().all(|v| matches!(v, Self::Uint(_)))
                }
                _ => false,
            },
        }
    }

    /// Short description of the value's shape, for error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "BOOL",
            Self::Uint(_) => "UINT",
            Self::Int(_) => "INT",
            Self::Real(_) => "REAL",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
        }
    }
}

impl From<bool> for PlcValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u16> for PlcValue {
    fn from(value: u16) -> Self {
        Self::Uint(value)
    }
}

impl From<i32> for PlcValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plc_type_display() {
        assert_eq!(PlcType::Bool.to_string(), "BOOL");
        assert_eq!(PlcType::Uint.to_string(), "UINT");
        assert_eq!(PlcType::UintArray(4).to_string(), "ARRAY [0..3] OF UINT");
    }

    #[test]
    fn as_bool() {
        assert_eq!(PlcValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PlcValue::Bool(false).as_bool(), Some(false));
        assert_eq!(PlcValue::Uint(1).as_bool(), None);
    }

    #[test]
    fn as_i64_scalars() {
        assert_eq!(PlcValue::Uint(300).as_i64(), Some(300));
        assert_eq!(PlcValue::Int(-5).as_i64(), Some(-5));
        assert_eq!(PlcValue::Real(127.9).as_i64(), Some(127));
        assert_eq!(PlcValue::Real(f32::NAN).as_i64(), None);
    }

    #[test]
    fn as_i64_strings() {
        assert_eq!(PlcValue::String(" 42 ".to_string()).as_i64(), Some(42));
        assert_eq!(PlcValue::String("full".to_string()).as_i64(), None);
    }

    #[test]
    fn as_i64_non_numeric() {
        assert_eq!(PlcValue::Bool(true).as_i64(), None);
        assert_eq!(PlcValue::Array(vec![]).as_i64(), None);
    }

    #[test]
    fn as_u16_range() {
        assert_eq!(PlcValue::Uint(65535).as_u16(), Some(65535));
        assert_eq!(PlcValue::Int(-1).as_u16(), None);
        assert_eq!(PlcValue::String("70000".to_string()).as_u16(), None);
    }

    #[test]
    fn matches_scalars() {
        assert!(PlcValue::Bool(true).matches(PlcType::Bool));
        assert!(PlcValue::Uint(7).matches(PlcType::Uint));
        assert!(!PlcValue::Int(7).matches(PlcType::Uint));
        assert!(!PlcValue::Uint(1).matches(PlcType::Bool));
    }

    #[test]
    fn matches_arrays() {
        let good = PlcValue::Array(vec![
            PlcValue::Uint(1),
            PlcValue::Uint(2),
            PlcValue::Uint(3),
            PlcValue::Uint(4),
        ]);
        assert!(good.matches(PlcType::UintArray(4)));
        assert!(!good.matches(PlcType::UintArray(3)));

        let mixed = PlcValue::Array(vec![PlcValue::Uint(1), PlcValue::Bool(false)]);
        assert!(!mixed.matches(PlcType::UintArray(2)));
        assert!(!PlcValue::Uint(1).matches(PlcType::UintArray(4)));
    }

    #[test]
    fn from_impls() {
        assert_eq!(PlcValue::from(true), PlcValue::Bool(true));
        assert_eq!(PlcValue::from(200u16), PlcValue::Uint(200));
        assert_eq!(PlcValue::from(-3i32), PlcValue::Int(-3));
    }
}
