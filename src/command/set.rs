// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set commands for the writable attributes.
//!
//! Each writable attribute has exactly one command kind:
//!
//! | Attribute | Command | Body type |
//! |-----------|---------|-----------|
//! | `power` | [`PowerCommand`] | `0x08` |
//! | `child_lock` | [`LockCommand`] | `0x83` |
//! | `storage` | [`StorageCommand`] | `0x81` |

use serde::Serialize;

use crate::attribute::DeviceAttribute;
use crate::command::Command;
use crate::types::MessageType;

/// Turns the appliance on or off.
///
/// # Examples
///
/// ```
/// use midea_e1::command::{Command, PowerCommand};
///
/// let cmd = PowerCommand::new(0, true);
/// assert_eq!(cmd.name(), "Power");
/// assert_eq!(cmd.body_type(), 0x08);
/// assert_eq!(cmd.payload(), Some(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerCommand {
    protocol_version: u8,
    /// Requested power state.
    pub power: bool,
}

impl PowerCommand {
    /// Creates a power command.
    #[must_use]
    pub const fn new(protocol_version: u8, power: bool) -> Self {
        Self {
            protocol_version,
            power,
        }
    }
}

impl Command for PowerCommand {
    fn name(&self) -> &'static str {
        "Power"
    }

    fn message_type(&self) -> MessageType {
        MessageType::Set
    }

    fn body_type(&self) -> u8 {
        0x08
    }

    fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    fn target(&self) -> Option<DeviceAttribute> {
        Some(DeviceAttribute::Power)
    }

    fn payload(&self) -> Option<bool> {
        Some(self.power)
    }
}

/// Engages or releases the child lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockCommand {
    protocol_version: u8,
    /// Requested lock state.
    pub lock: bool,
}

impl LockCommand {
    /// Creates a child lock command.
    #[must_use]
    pub const fn new(protocol_version: u8, lock: bool) -> Self {
        Self {
            protocol_version,
            lock,
        }
    }
}

impl Command for LockCommand {
    fn name(&self) -> &'static str {
        "Lock"
    }

    fn message_type(&self) -> MessageType {
        MessageType::Set
    }

    fn body_type(&self) -> u8 {
        0x83
    }

    fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    fn target(&self) -> Option<DeviceAttribute> {
        Some(DeviceAttribute::ChildLock)
    }

    fn payload(&self) -> Option<bool> {
        Some(self.lock)
    }
}

/// Enables or disables storage mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageCommand {
    protocol_version: u8,
    /// Requested storage state.
    pub storage: bool,
}

impl StorageCommand {
    /// Creates a storage command.
    #[must_use]
    pub const fn new(protocol_version: u8, storage: bool) -> Self {
        Self {
            protocol_version,
            storage,
        }
    }
}

impl Command for StorageCommand {
    fn name(&self) -> &'static str {
        "Storage"
    }

    fn message_type(&self) -> MessageType {
        MessageType::Set
    }

    fn body_type(&self) -> u8 {
        0x81
    }

    fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    fn target(&self) -> Option<DeviceAttribute> {
        Some(DeviceAttribute::Storage)
    }

    fn payload(&self) -> Option<bool> {
        Some(self.storage)
    }
}
