// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status query command.

use serde::Serialize;

use crate::command::Command;
use crate::types::MessageType;

/// Requests a full status report from the appliance.
///
/// # Examples
///
/// ```
/// use midea_e1::command::{Command, QueryCommand};
/// use midea_e1::types::MessageType;
///
/// let cmd = QueryCommand::new(0);
/// assert_eq!(cmd.name(), "Query");
/// assert_eq!(cmd.message_type(), MessageType::Query);
/// assert_eq!(cmd.body_type(), 0x00);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryCommand {
    protocol_version: u8,
}

impl QueryCommand {
    /// Creates a query bound to a message protocol version.
    #[must_use]
    pub const fn new(protocol_version: u8) -> Self {
        Self { protocol_version }
    }
}

impl Command for QueryCommand {
    fn name(&self) -> &'static str {
        "Query"
    }

    fn message_type(&self) -> MessageType {
        MessageType::Query
    }

    fn body_type(&self) -> u8 {
        0x00
    }

    fn protocol_version(&self) -> u8 {
        self.protocol_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_carries_protocol_version() {
        let cmd = QueryCommand::new(3);
        assert_eq!(cmd.protocol_version(), 3);
        assert_eq!(cmd.payload(), None);
    }
}
