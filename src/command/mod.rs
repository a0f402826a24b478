// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! E1 command definitions.
//!
//! This module provides typed representations of the commands an E1
//! appliance accepts. Serializing them to bytes is the transport's job; a
//! command only carries the fields the protocol expects.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Message type |
//! |-------------|---------|--------------|
//! | [`QueryCommand`] | Request a full status report | Query |
//! | [`PowerCommand`] | Turn the appliance on/off | Set |
//! | [`LockCommand`] | Engage/release the child lock | Set |
//! | [`StorageCommand`] | Enable/disable storage mode | Set |
//!
//! [`CommandBuilder`] validates attribute change requests and produces the
//! matching [`OutboundCommand`].

mod builder;
mod query;
mod set;

pub use builder::CommandBuilder;
pub use query::QueryCommand;
pub use set::{LockCommand, PowerCommand, StorageCommand};

use serde::Serialize;

use crate::attribute::DeviceAttribute;
use crate::types::{DEVICE_TYPE, MessageType};

/// A command that can be sent to an E1 appliance.
pub trait Command {
    /// Returns a short name for logging.
    fn name(&self) -> &'static str;

    /// Returns the appliance type byte the frame header carries.
    fn device_type(&self) -> u8 {
        DEVICE_TYPE
    }

    /// Returns the header message type.
    fn message_type(&self) -> MessageType;

    /// Returns the body type byte identifying the command.
    fn body_type(&self) -> u8;

    /// Returns the message protocol version the command is bound to.
    fn protocol_version(&self) -> u8;

    /// Returns the attribute this command changes, if any.
    fn target(&self) -> Option<DeviceAttribute> {
        None
    }

    /// Returns the requested value, if the command carries one.
    fn payload(&self) -> Option<bool> {
        None
    }
}

/// Any command the device container can hand to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum OutboundCommand {
    /// Status query.
    Query(QueryCommand),
    /// Power change.
    Power(PowerCommand),
    /// Child lock change.
    Lock(LockCommand),
    /// Storage mode change.
    Storage(StorageCommand),
}

impl OutboundCommand {
    fn inner(&self) -> &dyn Command {
        match self {
            Self::Query(c) => c,
            Self::Power(c) => c,
            Self::Lock(c) => c,
            Self::Storage(c) => c,
        }
    }
}

impl Command for OutboundCommand {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn message_type(&self) -> MessageType {
        self.inner().message_type()
    }

    fn body_type(&self) -> u8 {
        self.inner().body_type()
    }

    fn protocol_version(&self) -> u8 {
        self.inner().protocol_version()
    }

    fn target(&self) -> Option<DeviceAttribute> {
        self.inner().target()
    }

    fn payload(&self) -> Option<bool> {
        self.inner().payload()
    }
}

impl From<QueryCommand> for OutboundCommand {
    fn from(command: QueryCommand) -> Self {
        Self::Query(command)
    }
}

impl From<PowerCommand> for OutboundCommand {
    fn from(command: PowerCommand) -> Self {
        Self::Power(command)
    }
}

impl From<LockCommand> for OutboundCommand {
    fn from(command: LockCommand) -> Self {
        Self::Lock(command)
    }
}

impl From<StorageCommand> for OutboundCommand {
    fn from(command: StorageCommand) -> Self {
        Self::Storage(command)
    }
}
