// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `midea_e1` - Attribute translation for Midea E1 dishwashers.
//!
//! This library sits between a frame codec and a consumer that reads and
//! writes named attributes. It turns decoded status frames into a snapshot
//! of semantic attributes, and attribute change requests into commands.
//! It performs no I/O: frames come in through a
//! [`FrameCodec`](protocol::FrameCodec) and commands leave through a
//! [`CommandSink`](protocol::CommandSink).
//!
//! # Features
//!
//! - **Attribute schema**: 34 attributes with typed defaults ([`DeviceAttribute`])
//! - **Response decoding**: status, program and progress codes mapped to labels,
//!   unknown codes reported as absent rather than as errors
//! - **Commands**: power, child lock and storage mode, validated before sending
//!
//! # Quick Start
//!
//! ```
//! use std::cell::RefCell;
//!
//! use midea_e1::command::OutboundCommand;
//! use midea_e1::types::{AttributeValue, ProtocolVersion};
//! use midea_e1::{DeviceAttribute, DeviceConfig, E1Device};
//!
//! # fn main() -> midea_e1::Result<()> {
//! let sent = RefCell::new(Vec::new());
//! let config = DeviceConfig::new(42, "192.168.1.60").with_protocol(ProtocolVersion::V2);
//! let mut device = E1Device::new(config, |cmd: OutboundCommand| sent.borrow_mut().push(cmd));
//!
//! // Poll
//! let query = device.build_query();
//! assert_eq!(query.len(), 1);
//!
//! // Decode the answer
//! let delta = device.process_message(br#"{"status": 3, "progress": 2, "temperature": 60}"#)?;
//! assert_eq!(delta.get(DeviceAttribute::Status), Some(&AttributeValue::label("Running")));
//! assert_eq!(device.attributes().label(DeviceAttribute::Progress), Some("Wash"));
//!
//! // Change a setting
//! device.set_attribute(DeviceAttribute::ChildLock, true)?;
//! assert_eq!(sent.borrow().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod command;
pub mod config;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use attribute::{DeviceAttribute, Transform};
pub use command::{
    Command, CommandBuilder, LockCommand, OutboundCommand, PowerCommand, QueryCommand,
    StorageCommand,
};
pub use config::DeviceConfig;
pub use device::E1Device;
pub use error::{ConfigError, Error, ParseError, Result, ValueError};
pub use protocol::{ChannelSink, CommandSink, FrameCodec, JsonFrameCodec};
pub use response::{DecodedResponse, E1Response, ResponseDecoder};
pub use state::{AttributeSnapshot, StateDelta};
pub use types::{AttributeValue, ProtocolVersion, RawValue, ValueKind};
