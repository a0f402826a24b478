// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seams to the frame codec and the transport.
//!
//! The attribute layer performs no I/O. It reads frames through a
//! [`FrameCodec`] and hands commands to a [`CommandSink`].
//!
//! # Implementations
//!
//! - [`JsonFrameCodec`]: frames already decoded into JSON objects
//! - [`ChannelSink`]: forwards commands into a tokio channel
//! - any `Fn(OutboundCommand)` closure is also a sink

mod codec;
mod sink;

pub use codec::{FrameCodec, JsonFrameCodec};
pub use sink::{ChannelSink, CommandSink};
