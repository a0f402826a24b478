// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation of decoded responses into attribute updates.

use crate::attribute::{DeviceAttribute, Transform};
use crate::state::{AttributeSnapshot, StateDelta};
use crate::types::{AttributeValue, RawValue};

use super::DecodedResponse;

/// Applies decoded responses to an [`AttributeSnapshot`].
///
/// The decoder walks the schema in order, translates every field present
/// on the response with the attribute's [`Transform`], stores the result in
/// the snapshot and records it in the returned [`StateDelta`]. Fields the
/// response does not carry are left untouched.
///
/// Unknown codes are not errors: they are stored as
/// [`AttributeValue::Absent`](crate::types::AttributeValue::Absent). So are
/// values whose type does not match [`DeviceAttribute::kind`].
///
/// # Examples
///
/// ```
/// use midea_e1::attribute::DeviceAttribute;
/// use midea_e1::response::{E1Response, ResponseDecoder};
/// use midea_e1::state::AttributeSnapshot;
/// use midea_e1::types::AttributeValue;
///
/// let mut snapshot = AttributeSnapshot::new();
/// let response = E1Response {
///     status: Some(0x03),
///     mode: Some(0x11),
///     ..E1Response::default()
/// };
///
/// let delta = ResponseDecoder::decode(&mut snapshot, &response);
///
/// assert_eq!(delta.len(), 2);
/// assert_eq!(snapshot.label(DeviceAttribute::Status), Some("Running"));
/// assert_eq!(snapshot.get(DeviceAttribute::Mode), &AttributeValue::Absent);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseDecoder;

impl ResponseDecoder {
    /// Applies a response to a snapshot and returns the confirmed attributes.
    pub fn decode<R>(snapshot: &mut AttributeSnapshot, response: &R) -> StateDelta
    where
        R: DecodedResponse + ?Sized,
    {
        let mut delta = StateDelta::new();

        for attribute in DeviceAttribute::ALL {
            let Some(raw) = response.get(attribute) else {
                continue;
            };

            let value = conform(attribute, raw, attribute.transform().apply(raw));

            let changed = snapshot.set(attribute, value.clone());
            tracing::trace!(
                attribute = %attribute,
                raw = ?raw,
                value = %value,
                changed,
                "Decoded attribute"
            );
            delta.insert(attribute, value);
        }

        delta
    }
}

/// Keeps a translated value only if it has the attribute's schema type.
fn conform(attribute: DeviceAttribute, raw: RawValue, value: AttributeValue) -> AttributeValue {
    if value.is_absent() {
        if !matches!(attribute.transform(), Transform::Passthrough) {
            tracing::debug!(
                attribute = %attribute,
                raw = ?raw,
                "Unknown code, attribute set to absent"
            );
        }
        return value;
    }

    if value.kind() != attribute.kind() {
        tracing::debug!(
            attribute = %attribute,
            raw = ?raw,
            expected = %attribute.kind(),
            actual = %value.kind(),
            "Mistyped value, attribute set to absent"
        );
        return AttributeValue::Absent;
    }

    value
}
