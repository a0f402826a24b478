// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for E1 attribute translation.
//!
//! # Types
//!
//! - [`AttributeValue`] - Translated attribute value (bool, int, label or absent)
//! - [`RawValue`] - Field value as produced by the frame codec
//! - [`ValueKind`] - Type tag used in schema declarations and errors
//! - [`ProtocolVersion`] - Transport protocol generation (V1-V3)
//! - [`MessageType`] - Header message type of an outbound command

mod protocol;
mod value;

pub use protocol::{DEVICE_TYPE, MessageType, ProtocolVersion};
pub use value::{AttributeValue, RawValue, ValueKind};
