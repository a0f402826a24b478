// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! E1 device state container.
//!
//! [`E1Device`] owns the attribute snapshot of one appliance and ties the
//! pieces together:
//!
//! - [`E1Device::build_query`] produces the status query to poll with
//! - [`E1Device::process_message`] decodes an inbound frame and returns the
//!   attributes it confirmed
//! - [`E1Device::set_attribute`] validates a change and sends the command
//!
//! The container does no locking. Whoever drives it (typically one task per
//! appliance) serializes access; `process_message` takes `&mut self`, so the
//! borrow checker enforces a single writer.
//!
//! # Examples
//!
//! ```
//! use midea_e1::{DeviceAttribute, DeviceConfig, E1Device};
//! use midea_e1::protocol::ChannelSink;
//! use midea_e1::types::ProtocolVersion;
//!
//! # fn main() -> midea_e1::Result<()> {
//! let config = DeviceConfig::new(42, "192.168.1.60").with_protocol(ProtocolVersion::V2);
//! let (sink, mut outbound) = ChannelSink::new();
//! let mut device = E1Device::new(config, sink);
//!
//! device.set_attribute(DeviceAttribute::Power, true)?;
//! assert!(outbound.try_recv().is_ok());
//!
//! // Nothing changes until the appliance confirms
//! assert_eq!(device.attribute(DeviceAttribute::Power).as_bool(), Some(false));
//!
//! let delta = device.process_message(br#"{"power": true, "mode": 1}"#)?;
//! assert_eq!(delta.len(), 2);
//! assert_eq!(device.attributes().label(DeviceAttribute::Mode), Some("Auto Wash"));
//! # Ok(())
//! # }
//! ```

use crate::attribute::DeviceAttribute;
use crate::command::{Command, CommandBuilder, OutboundCommand};
use crate::config::DeviceConfig;
use crate::error::Result;
use crate::protocol::{CommandSink, FrameCodec, JsonFrameCodec};
use crate::response::{DecodedResponse, ResponseDecoder};
use crate::state::{AttributeSnapshot, StateDelta};
use crate::types::AttributeValue;

/// One E1 appliance: configuration, attribute snapshot, codec and sink.
///
/// # Type Parameters
///
/// - `S`: where outbound commands go
/// - `C`: how inbound frames are decoded (defaults to [`JsonFrameCodec`])
#[derive(Debug)]
pub struct E1Device<S, C = JsonFrameCodec> {
    config: DeviceConfig,
    attributes: AttributeSnapshot,
    message_protocol_version: u8,
    sink: S,
    codec: C,
}

impl<S: CommandSink> E1Device<S, JsonFrameCodec> {
    /// Creates a device that reads JSON frames.
    #[must_use]
    pub fn new(config: DeviceConfig, sink: S) -> Self {
        Self::with_codec(config, sink, JsonFrameCodec)
    }
}

impl<S: CommandSink, C: FrameCodec> E1Device<S, C> {
    /// Creates a device with a custom frame codec.
    #[must_use]
    pub fn with_codec(config: DeviceConfig, sink: S, codec: C) -> Self {
        tracing::debug!(
            device_id = config.device_id,
            name = %config.name,
            protocol = %config.protocol,
            "Creating E1 device"
        );
        Self {
            config,
            attributes: AttributeSnapshot::new(),
            message_protocol_version: 0,
            sink,
            codec,
        }
    }

    /// Returns the device configuration.
    #[must_use]
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Returns the appliance id.
    #[must_use]
    pub fn device_id(&self) -> u64 {
        self.config.device_id
    }

    /// Returns the current attribute snapshot.
    #[must_use]
    pub fn attributes(&self) -> &AttributeSnapshot {
        &self.attributes
    }

    /// Returns the current value of one attribute.
    #[must_use]
    pub fn attribute(&self, attribute: DeviceAttribute) -> &AttributeValue {
        self.attributes.get(attribute)
    }

    /// Returns the message protocol version outbound commands carry.
    #[must_use]
    pub fn message_protocol_version(&self) -> u8 {
        self.message_protocol_version
    }

    /// Sets the message protocol version learned from frame headers.
    pub fn set_message_protocol_version(&mut self, version: u8) {
        self.message_protocol_version = version;
    }

    /// Returns the sink commands are sent to.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn commands(&self) -> CommandBuilder {
        CommandBuilder::new(self.message_protocol_version)
    }

    /// Builds the commands that request a full status refresh.
    #[must_use]
    pub fn build_query(&self) -> Vec<OutboundCommand> {
        vec![self.commands().query().into()]
    }

    /// Decodes an inbound frame and applies it to the snapshot.
    ///
    /// Returns the attributes the frame carried, with their new values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) if the codec rejects the
    /// frame; the snapshot is left untouched in that case.
    pub fn process_message(&mut self, frame: &[u8]) -> Result<StateDelta> {
        let response = self.codec.decode(frame).inspect_err(|e| {
            tracing::debug!(
                device_id = self.config.device_id,
                error = %e,
                "Failed to decode frame"
            );
        })?;
        tracing::debug!(
            device_id = self.config.device_id,
            response = ?response,
            "Received"
        );
        Ok(self.apply_response(&response))
    }

    /// Applies an already decoded response to the snapshot.
    pub fn apply_response<R>(&mut self, response: &R) -> StateDelta
    where
        R: DecodedResponse + ?Sized,
    {
        let delta = ResponseDecoder::decode(&mut self.attributes, response);
        tracing::trace!(
            device_id = self.config.device_id,
            count = delta.len(),
            "Applied response"
        );
        delta
    }

    /// Requests an attribute change.
    ///
    /// On success the matching command has been handed to the sink; the
    /// snapshot changes only once the appliance confirms in a later frame.
    /// Read-only attributes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::WrongType`](crate::ValueError::WrongType) if
    /// `value` is not a boolean, even for read-only attributes. Nothing is
    /// sent.
    pub fn set_attribute(
        &self,
        attribute: DeviceAttribute,
        value: impl Into<AttributeValue>,
    ) -> Result<()> {
        let value = value.into();
        match self.commands().build(attribute, &value)? {
            Some(command) => {
                tracing::debug!(
                    device_id = self.config.device_id,
                    attribute = %attribute,
                    command = command.name(),
                    value = %value,
                    "Sending command"
                );
                self.sink.send(command);
            }
            None => {
                tracing::warn!(
                    device_id = self.config.device_id,
                    attribute = %attribute,
                    "Attribute is read-only, ignoring set request"
                );
            }
        }
        Ok(())
    }

    /// Requests an attribute change by attribute name.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::UnknownAttribute`](crate::ValueError::UnknownAttribute)
    /// for names outside the schema, and the errors of
    /// [`set_attribute`](Self::set_attribute) otherwise.
    pub fn set_attribute_by_name(&self, name: &str, value: impl Into<AttributeValue>) -> Result<()> {
        let attribute: DeviceAttribute = name.parse()?;
        self.set_attribute(attribute, value)
    }
}
