// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded responses and their translation into attributes.
//!
//! A frame codec turns bytes into a type implementing [`DecodedResponse`];
//! [`ResponseDecoder`] then applies it to an
//! [`AttributeSnapshot`](crate::state::AttributeSnapshot).

mod decoder;
mod e1;

pub use decoder::ResponseDecoder;
pub use e1::E1Response;

use std::fmt;

use crate::attribute::DeviceAttribute;
use crate::types::RawValue;

/// A response whose fields have been decoded by the frame codec.
///
/// Structural validation is the codec's job; implementations only report
/// which fields the frame carried.
pub trait DecodedResponse: fmt::Debug {
    /// Returns the raw value of a field, or `None` if the frame lacks it.
    fn get(&self, attribute: DeviceAttribute) -> Option<RawValue>;

    /// Returns `true` if the frame carries the field.
    fn has(&self, attribute: DeviceAttribute) -> bool {
        self.get(attribute).is_some()
    }
}
