// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute snapshot of one appliance.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::attribute::DeviceAttribute;
use crate::types::AttributeValue;

/// Current known value of every attribute of one appliance.
///
/// A snapshot starts out with the schema defaults and only changes when a
/// confirming frame is decoded; requesting a change does not touch it.
///
/// # Examples
///
/// ```
/// use midea_e1::attribute::DeviceAttribute;
/// use midea_e1::state::AttributeSnapshot;
/// use midea_e1::types::AttributeValue;
///
/// let snapshot = AttributeSnapshot::new();
/// assert_eq!(snapshot.get(DeviceAttribute::Power), &AttributeValue::Bool(false));
/// assert_eq!(snapshot.get(DeviceAttribute::Temperature), &AttributeValue::Absent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSnapshot {
    values: [AttributeValue; DeviceAttribute::COUNT],
}

impl AttributeSnapshot {
    /// Creates a snapshot holding the schema defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|i| DeviceAttribute::ALL[i].default_value()),
        }
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn get(&self, attribute: DeviceAttribute) -> &AttributeValue {
        &self.values[attribute.index()]
    }

    /// Returns the flag value of an attribute, if it holds one.
    #[must_use]
    pub fn bool(&self, attribute: DeviceAttribute) -> Option<bool> {
        self.get(attribute).as_bool()
    }

    /// Returns the integer value of an attribute, if it holds one.
    #[must_use]
    pub fn int(&self, attribute: DeviceAttribute) -> Option<i64> {
        self.get(attribute).as_int()
    }

    /// Returns the label of an attribute, if it holds one.
    #[must_use]
    pub fn label(&self, attribute: DeviceAttribute) -> Option<&str> {
        self.get(attribute).as_label()
    }

    /// Returns a human-readable label for enumerated attributes.
    ///
    /// Label attributes return their label; integer-coded attributes with a
    /// display table (`additional`, `wash_region`) are looked up in it.
    #[must_use]
    pub fn display_label(&self, attribute: DeviceAttribute) -> Option<&str> {
        match self.get(attribute) {
            AttributeValue::Label(label) => Some(label),
            AttributeValue::Int(code) => attribute.table().and_then(|t| t.label(*code)),
            AttributeValue::Absent | AttributeValue::Bool(_) => None,
        }
    }

    /// Iterates over all attributes and values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (DeviceAttribute, &AttributeValue)> {
        DeviceAttribute::ALL.into_iter().zip(self.values.iter())
    }

    /// Stores a value and returns whether it differed from the previous one.
    pub(crate) fn set(&mut self, attribute: DeviceAttribute, value: AttributeValue) -> bool {
        let slot = &mut self.values[attribute.index()];
        if *slot == value {
            false
        } else {
            *slot = value;
            true
        }
    }

    /// Resets every attribute to its default.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AttributeSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for AttributeSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DeviceAttribute::COUNT))?;
        for (attribute, value) in self.iter() {
            map.serialize_entry(&attribute, value)?;
        }
        map.end()
    }
}
