// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `midea_e1` library.
//!
//! Only caller mistakes surface as errors: a value of the wrong type for a
//! writable attribute, an unknown attribute name, a frame the codec cannot
//! read, or an unusable device configuration. Unknown codes reported by the
//! appliance are not errors; they decode to
//! [`AttributeValue::Absent`](crate::types::AttributeValue::Absent).

use thiserror::Error;

use crate::attribute::DeviceAttribute;
use crate::types::ValueKind;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested attribute change was rejected before anything was sent.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The frame codec could not decode an inbound frame.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device configuration is unusable.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while validating an attribute change request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value does not have the type the attribute is declared with.
    #[error("expected {expected} for {attribute}, got {actual}")]
    WrongType {
        /// The attribute the change was requested for.
        attribute: DeviceAttribute,
        /// The type the attribute accepts.
        expected: ValueKind,
        /// The type that was supplied.
        actual: ValueKind,
    },

    /// The attribute name is not part of the E1 schema.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

/// Errors raised by a [`FrameCodec`](crate::protocol::FrameCodec).
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The frame is not shaped like an E1 response.
    #[error("unexpected frame format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to device configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field required by the selected protocol is missing.
    #[error("missing configuration field: {0}")]
    MissingField(&'static str),

    /// A field holds a value the device cannot use.
    #[error("invalid {field}: {message}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_type_display() {
        let err = ValueError::WrongType {
            attribute: DeviceAttribute::Power,
            expected: ValueKind::Bool,
            actual: ValueKind::Int,
        };
        assert_eq!(err.to_string(), "expected bool for power, got int");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::UnknownAttribute("turbo".to_string()).into();
        assert!(matches!(
            err,
            Error::Value(ValueError::UnknownAttribute(ref name)) if name == "turbo"
        ));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnexpectedFormat("expected an object".to_string());
        assert_eq!(
            err.to_string(),
            "unexpected frame format: expected an object"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingField("token");
        assert_eq!(err.to_string(), "missing configuration field: token");
    }
}
