// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute values confirmed by a single frame.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::attribute::DeviceAttribute;
use crate::types::AttributeValue;

/// The attributes present in one decoded frame, with their new values.
///
/// A delta records what the appliance confirmed, not what differs from the
/// previous snapshot: an attribute reported with an unchanged value is still
/// included. Iteration follows schema order.
///
/// Serializes as a JSON object keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateDelta {
    values: BTreeMap<DeviceAttribute, AttributeValue>,
}

impl StateDelta {
    /// Creates an empty delta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, attribute: DeviceAttribute, value: AttributeValue) {
        self.values.insert(attribute, value);
    }

    /// Returns the confirmed value of an attribute, if the frame carried it.
    #[must_use]
    pub fn get(&self, attribute: DeviceAttribute) -> Option<&AttributeValue> {
        self.values.get(&attribute)
    }

    /// Returns `true` if the frame carried the attribute.
    #[must_use]
    pub fn contains(&self, attribute: DeviceAttribute) -> bool {
        self.values.contains_key(&attribute)
    }

    /// Returns the number of attributes in the delta.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the frame carried no known attribute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over attributes and values in schema order.
    pub fn iter(&self) -> btree_map::Iter<'_, DeviceAttribute, AttributeValue> {
        self.values.iter()
    }

    /// Iterates over the attributes in the delta.
    pub fn attributes(&self) -> impl Iterator<Item = DeviceAttribute> + '_ {
        self.values.keys().copied()
    }
}

impl<'a> IntoIterator for &'a StateDelta {
    type Item = (&'a DeviceAttribute, &'a AttributeValue);
    type IntoIter = btree_map::Iter<'a, DeviceAttribute, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for StateDelta {
    type Item = (DeviceAttribute, AttributeValue);
    type IntoIter = btree_map::IntoIter<DeviceAttribute, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_delta() {
        let delta = StateDelta::new();
        assert!(delta.is_empty());
        assert_eq!(delta.len(), 0);
        assert!(delta.get(DeviceAttribute::Power).is_none());
    }

    #[test]
    fn iterates_in_schema_order() {
        let mut delta = StateDelta::new();
        delta.insert(DeviceAttribute::Humidity, AttributeValue::Int(40));
        delta.insert(DeviceAttribute::Power, AttributeValue::Bool(true));
        delta.insert(DeviceAttribute::Mode, AttributeValue::label("Auto Wash"));

        let order: Vec<_> = delta.attributes().collect();
        assert_eq!(
            order,
            vec![
                DeviceAttribute::Power,
                DeviceAttribute::Mode,
                DeviceAttribute::Humidity
            ]
        );
    }

    #[test]
    fn serializes_as_object() {
        let mut delta = StateDelta::new();
        delta.insert(DeviceAttribute::Power, AttributeValue::Bool(true));
        delta.insert(DeviceAttribute::Status, AttributeValue::Absent);

        let json = serde_json::to_string(&delta).unwrap();
        assert_eq!(json, r#"{"power":true,"status":null}"#);
    }
}
