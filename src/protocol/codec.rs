// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame codec seam.

use crate::error::ParseError;
use crate::response::{DecodedResponse, E1Response};

/// Turns an inbound frame into a decoded response.
///
/// Implementations own all structural validation: once `decode` succeeds,
/// the attribute layer trusts the field types it gets.
pub trait FrameCodec {
    /// The decoded response type.
    type Response: DecodedResponse;

    /// Decodes one inbound frame.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the frame is malformed.
    fn decode(&self, frame: &[u8]) -> Result<Self::Response, ParseError>;
}

/// Codec for frames already decoded into a JSON object.
///
/// Bridges that run the binary codec elsewhere forward frames as one JSON
/// object keyed by attribute name, with raw codes for enumerated fields.
///
/// # Examples
///
/// ```
/// use midea_e1::protocol::{FrameCodec, JsonFrameCodec};
///
/// let response = JsonFrameCodec.decode(br#"{"power": true, "status": 3}"#).unwrap();
/// assert_eq!(response.status, Some(3));
/// assert!(JsonFrameCodec.decode(b"[1, 2]").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFrameCodec;

impl FrameCodec for JsonFrameCodec {
    type Response = E1Response;

    fn decode(&self, frame: &[u8]) -> Result<Self::Response, ParseError> {
        let value: serde_json::Value = serde_json::from_slice(frame)?;
        if !value.is_object() {
            return Err(ParseError::UnexpectedFormat(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
