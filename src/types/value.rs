// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value of a device attribute.
///
/// `Absent` means the appliance never reported the attribute, or reported a
/// code that has no known meaning. It is distinct from `Int(0)` and
/// `Bool(false)`, which are values the appliance actually confirmed.
///
/// Values serialize untagged, so a snapshot renders as plain JSON:
///
/// ```
/// use midea_e1::types::AttributeValue;
///
/// assert_eq!(serde_json::to_string(&AttributeValue::Absent).unwrap(), "null");
/// assert_eq!(serde_json::to_string(&AttributeValue::Bool(true)).unwrap(), "true");
/// assert_eq!(
///     serde_json::to_string(&AttributeValue::label("Auto Wash")).unwrap(),
///     "\"Auto Wash\""
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Not reported, or reported with an unknown code.
    #[default]
    Absent,
    /// A flag.
    Bool(bool),
    /// A raw number (temperature, remaining minutes, error code, ...).
    Int(i64),
    /// A human-readable label resolved from a lookup table.
    Label(String),
}

impl AttributeValue {
    /// Creates a label value.
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Label(_) => ValueKind::Label,
        }
    }

    /// Returns `true` if the value is [`AttributeValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the flag, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number, if this is an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the label, if this is a label value.
    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(label) => Some(label),
            _ => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for AttributeValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<RawValue> for AttributeValue {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Bool(v) => Self::Bool(v),
            RawValue::Int(v) => Self::Int(v),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "unknown"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Label(v) => write!(f, "{v}"),
        }
    }
}

/// A field value as handed over by the frame codec, before translation.
///
/// Enumerated attributes arrive as small integer codes; the response decoder
/// turns those into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A decoded flag bit.
    Bool(bool),
    /// A decoded byte or word.
    Int(i64),
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u8> for RawValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for RawValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// The type tag of an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// No value.
    Absent,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Enumerated label.
    Label,
}

impl ValueKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Label => "label",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
