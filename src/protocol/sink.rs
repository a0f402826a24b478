// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound command sinks.

use tokio::sync::mpsc;

use crate::command::{Command, OutboundCommand};

/// The transport's send primitive.
///
/// Sending is fire-and-forget: the appliance confirms a change by reporting
/// it in a later frame, not by answering the send.
///
/// Any `Fn(OutboundCommand)` closure is a sink:
///
/// ```
/// use std::cell::RefCell;
/// use midea_e1::command::{OutboundCommand, QueryCommand};
/// use midea_e1::protocol::CommandSink;
///
/// let sent = RefCell::new(Vec::new());
/// let sink = |cmd: OutboundCommand| sent.borrow_mut().push(cmd);
///
/// sink.send(QueryCommand::new(0).into());
/// assert_eq!(sent.borrow().len(), 1);
/// ```
pub trait CommandSink {
    /// Hands a command to the transport.
    fn send(&self, command: OutboundCommand);
}

impl<F> CommandSink for F
where
    F: Fn(OutboundCommand),
{
    fn send(&self, command: OutboundCommand) {
        self(command);
    }
}

/// Sink that forwards commands into a tokio channel.
///
/// The receiving half typically lives in the per-device session task that
/// serializes and writes frames.
///
/// # Examples
///
/// ```
/// use midea_e1::command::{OutboundCommand, QueryCommand};
/// use midea_e1::protocol::{ChannelSink, CommandSink};
///
/// let (sink, mut rx) = ChannelSink::new();
/// sink.send(QueryCommand::new(0).into());
///
/// assert_eq!(rx.try_recv().unwrap(), OutboundCommand::Query(QueryCommand::new(0)));
/// ```
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<OutboundCommand>,
}

impl ChannelSink {
    /// Creates a sink and the receiver the transport reads from.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundCommand>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wraps an existing sender.
    #[must_use]
    pub fn from_sender(sender: mpsc::UnboundedSender<OutboundCommand>) -> Self {
        Self { sender }
    }

    /// Returns `true` if the transport has dropped its receiver.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl CommandSink for ChannelSink {
    fn send(&self, command: OutboundCommand) {
        if let Err(mpsc::error::SendError(command)) = self.sender.send(command) {
            tracing::warn!(
                command = command.name(),
                "Transport is gone, dropping command"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{PowerCommand, QueryCommand};

    #[test]
    fn channel_sink_forwards_in_order() {
        let (sink, mut rx) = ChannelSink::new();
        sink.send(QueryCommand::new(0).into());
        sink.send(PowerCommand::new(0, true).into());

        assert_eq!(rx.try_recv().unwrap(), OutboundCommand::Query(QueryCommand::new(0)));
        assert_eq!(
            rx.try_recv().unwrap(),
            OutboundCommand::Power(PowerCommand::new(0, true))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn sinks_from_one_sender_share_a_receiver() {
        let (sender, mut rx) = mpsc::unbounded_channel();
        let kitchen = ChannelSink::from_sender(sender.clone());
        let basement = ChannelSink::from_sender(sender);

        kitchen.send(QueryCommand::new(0).into());
        basement.send(PowerCommand::new(0, false).into());

        assert_eq!(rx.try_recv().unwrap(), OutboundCommand::Query(QueryCommand::new(0)));
        assert_eq!(
            rx.try_recv().unwrap(),
            OutboundCommand::Power(PowerCommand::new(0, false))
        );
    }

    #[test]
    fn channel_sink_survives_closed_receiver() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        assert!(sink.is_closed());
        sink.send(QueryCommand::new(0).into());
    }
}
