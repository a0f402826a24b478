// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validation of attribute change requests.

use crate::attribute::DeviceAttribute;
use crate::error::ValueError;
use crate::types::{AttributeValue, ValueKind};

use super::{LockCommand, OutboundCommand, PowerCommand, QueryCommand, StorageCommand};

/// Builds outbound commands bound to a message protocol version.
///
/// # Examples
///
/// ```
/// use midea_e1::attribute::DeviceAttribute;
/// use midea_e1::command::{CommandBuilder, OutboundCommand, PowerCommand};
/// use midea_e1::types::AttributeValue;
///
/// let builder = CommandBuilder::new(0);
///
/// let cmd = builder.build(DeviceAttribute::Power, &AttributeValue::Bool(true)).unwrap();
/// assert_eq!(cmd, Some(OutboundCommand::Power(PowerCommand::new(0, true))));
///
/// // Wrong value type
/// assert!(builder.build(DeviceAttribute::Power, &AttributeValue::Int(1)).is_err());
///
/// // Read-only attribute: nothing to send
/// let none = builder.build(DeviceAttribute::Door, &AttributeValue::Bool(true)).unwrap();
/// assert!(none.is_none());
///
/// // Values are checked before writability
/// assert!(builder.build(DeviceAttribute::Temperature, &AttributeValue::Int(50)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandBuilder {
    protocol_version: u8,
}

impl CommandBuilder {
    /// Creates a builder for the given message protocol version.
    #[must_use]
    pub const fn new(protocol_version: u8) -> Self {
        Self { protocol_version }
    }

    /// Returns the message protocol version commands are bound to.
    #[must_use]
    pub const fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    /// Builds the status query.
    #[must_use]
    pub const fn query(&self) -> QueryCommand {
        QueryCommand::new(self.protocol_version)
    }

    /// Builds the command that requests `attribute` to take `value`.
    ///
    /// Returns `Ok(None)` for attributes that cannot be written; no command
    /// exists for them.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::WrongType`] if `value` is not a boolean, whether
    /// or not the attribute is writable.
    pub fn build(
        &self,
        attribute: DeviceAttribute,
        value: &AttributeValue,
    ) -> Result<Option<OutboundCommand>, ValueError> {
        let AttributeValue::Bool(flag) = *value else {
            return Err(ValueError::WrongType {
                attribute,
                expected: ValueKind::Bool,
                actual: value.kind(),
            });
        };

        if !attribute.is_writable() {
            return Ok(None);
        }

        let version = self.protocol_version;
        let command: OutboundCommand = match attribute {
            DeviceAttribute::Power => PowerCommand::new(version, flag).into(),
            DeviceAttribute::ChildLock => LockCommand::new(version, flag).into(),
            DeviceAttribute::Storage => StorageCommand::new(version, flag).into(),
            _ => return Ok(None),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn builds_one_command_per_writable_attribute() {
        let builder = CommandBuilder::new(1);
        let value = AttributeValue::Bool(true);

        let power = builder.build(DeviceAttribute::Power, &value).unwrap().unwrap();
        let lock = builder.build(DeviceAttribute::ChildLock, &value).unwrap().unwrap();
        let storage = builder.build(DeviceAttribute::Storage, &value).unwrap().unwrap();

        assert_eq!(power, OutboundCommand::Power(PowerCommand::new(1, true)));
        assert_eq!(lock, OutboundCommand::Lock(LockCommand::new(1, true)));
        assert_eq!(storage, OutboundCommand::Storage(StorageCommand::new(1, true)));
    }

    #[test]
    fn payload_follows_value() {
        let builder = CommandBuilder::new(0);
        let off = builder
            .build(DeviceAttribute::Power, &AttributeValue::Bool(false))
            .unwrap()
            .unwrap();
        assert_eq!(off.payload(), Some(false));
    }

    #[test]
    fn rejects_non_bool_values() {
        let builder = CommandBuilder::new(0);
        for value in [
            AttributeValue::Int(1),
            AttributeValue::label("on"),
            AttributeValue::Absent,
        ] {
            let err = builder.build(DeviceAttribute::ChildLock, &value).unwrap_err();
            assert_eq!(
                err,
                ValueError::WrongType {
                    attribute: DeviceAttribute::ChildLock,
                    expected: ValueKind::Bool,
                    actual: value.kind(),
                }
            );
        }
    }

    #[test]
    fn read_only_attributes_build_nothing() {
        let builder = CommandBuilder::new(0);
        for attr in DeviceAttribute::ALL.into_iter().filter(|a| !a.is_writable()) {
            assert_eq!(builder.build(attr, &AttributeValue::Bool(true)), Ok(None));
            assert_eq!(builder.build(attr, &AttributeValue::Bool(false)), Ok(None));
        }
    }

    #[test]
    fn read_only_attributes_still_reject_non_bool() {
        let builder = CommandBuilder::new(0);
        assert_eq!(
            builder.build(DeviceAttribute::Temperature, &AttributeValue::Int(50)),
            Err(ValueError::WrongType {
                attribute: DeviceAttribute::Temperature,
                expected: ValueKind::Bool,
                actual: ValueKind::Int,
            })
        );
        assert!(
            builder
                .build(DeviceAttribute::Mode, &AttributeValue::label("ECO Wash"))
                .is_err()
        );
    }

    #[test]
    fn query_uses_protocol_version() {
        let builder = CommandBuilder::new(3);
        assert_eq!(builder.query(), QueryCommand::new(3));
        assert_eq!(builder.protocol_version(), 3);
    }
}
