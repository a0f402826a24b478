// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! [`AttributeSnapshot`] holds the current value of every attribute of one
//! appliance. [`StateDelta`] carries the attributes a single frame confirmed
//! and is what gets propagated to consumers.

mod delta;
mod snapshot;

pub use delta::StateDelta;
pub use snapshot::AttributeSnapshot;
