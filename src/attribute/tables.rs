// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lookup tables from appliance codes to display labels.
//!
//! All tables are `'static` and immutable, so any number of devices can read
//! them concurrently. A code missing from a table resolves to `None`, which
//! the decoder reports as [`AttributeValue::Absent`](crate::types::AttributeValue::Absent).

/// A sparse mapping from a small integer code to a label.
///
/// # Examples
///
/// ```
/// use midea_e1::attribute::tables::MODES;
///
/// assert_eq!(MODES.label(0x01), Some("Auto Wash"));
/// assert_eq!(MODES.label(0x11), None);
/// assert_eq!(MODES.code("Cloud Wash"), Some(0x19));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTable {
    entries: &'static [(u8, &'static str)],
}

impl LookupTable {
    /// Creates a table from `(code, label)` pairs.
    #[must_use]
    pub const fn new(entries: &'static [(u8, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the label for a code, or `None` if the code is unknown.
    ///
    /// Codes outside the `u8` range are always unknown.
    #[must_use]
    pub fn label(&self, code: i64) -> Option<&'static str> {
        let code = u8::try_from(code).ok()?;
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Returns the code for a label (exact match).
    #[must_use]
    pub fn code(&self, label: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(code, _)| *code)
    }

    /// Iterates over all labels in code order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, label)| *label)
    }

    /// Returns the `(code, label)` pairs.
    #[must_use]
    pub const fn entries(&self) -> &'static [(u8, &'static str)] {
        self.entries
    }

    /// Returns the number of known codes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered label list indexed by position.
///
/// # Examples
///
/// ```
/// use midea_e1::attribute::tables::PROGRESS;
///
/// assert_eq!(PROGRESS.label(2), Some("Wash"));
/// assert_eq!(PROGRESS.label(6), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalTable {
    labels: &'static [&'static str],
}

impl PositionalTable {
    /// Creates a table from an ordered label list.
    #[must_use]
    pub const fn new(labels: &'static [&'static str]) -> Self {
        Self { labels }
    }

    /// Returns the label at `index`, or `None` if out of range.
    #[must_use]
    pub fn label(&self, index: i64) -> Option<&'static str> {
        let index = usize::try_from(index).ok()?;
        self.labels.get(index).copied()
    }

    /// Returns the position of a label.
    #[must_use]
    pub fn index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }

    /// Iterates over all labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.labels.iter().copied()
    }

    /// Returns the number of labels.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the table has no labels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Wash programs.
pub static MODES: LookupTable = LookupTable::new(&[
    (0x00, "Neutral Gear"),
    (0x01, "Auto Wash"),
    (0x02, "Strong Wash"),
    (0x03, "Standard Wash"),
    (0x04, "ECO Wash"),
    (0x05, "Glass Wash"),
    (0x06, "90 Min Wash"),
    (0x07, "Fast Wash"),
    (0x08, "Soak Wash"),
    (0x09, "1 Hour Wash"),
    (0x0A, "Self Clean"),
    (0x0B, "Fruit Wash"),
    (0x0C, "Self Define"),
    (0x0D, "Germ"),
    (0x0E, "Bowl Wash"),
    (0x0F, "Kill Germ"),
    (0x10, "Sea Food Wash"),
    (0x12, "Hot Pot Wash"),
    (0x13, "Quiet Night Wash"),
    (0x14, "Less Wash"),
    (0x16, "Oil Net Wash"),
    (0x19, "Cloud Wash"),
]);

/// Machine status.
pub static STATUS: LookupTable = LookupTable::new(&[
    (0x00, "Power Off"),
    (0x01, "Cancel"),
    (0x02, "Delay"),
    (0x03, "Running"),
    (0x04, "Error"),
    (0x05, "Soft Gear"),
]);

/// Cycle phases, indexed by the progress byte.
pub static PROGRESS: PositionalTable =
    PositionalTable::new(&["Idle", "Pre-wash", "Wash", "Rinse", "Dry", "Complete"]);

/// Additional wash options.
pub static ADDITIONAL: LookupTable = LookupTable::new(&[
    (0x00, "None"),
    (0x01, "Extra Drying"),
    (0x03, "Express"),
    (0x04, "Power Wash"),
]);

/// Spray zones.
pub static WASH_REGION: LookupTable = LookupTable::new(&[
    (0x00, "Both Zones"),
    (0x01, "Top Zone"),
    (0x02, "Bottom Zone"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_labels() {
        assert_eq!(MODES.label(0x00), Some("Neutral Gear"));
        assert_eq!(MODES.label(0x04), Some("ECO Wash"));
        assert_eq!(MODES.label(0x10), Some("Sea Food Wash"));
        assert_eq!(MODES.label(0x19), Some("Cloud Wash"));
        assert_eq!(MODES.len(), 22);
    }

    #[test]
    fn mode_gaps_are_unknown() {
        for code in [0x11, 0x15, 0x17, 0x18, 0x1A, 0xFF] {
            assert_eq!(MODES.label(code), None, "code {code:#04x}");
        }
    }

    #[test]
    fn out_of_range_codes_are_unknown() {
        assert_eq!(STATUS.label(-1), None);
        assert_eq!(STATUS.label(256 + 3), None);
        assert_eq!(PROGRESS.label(-1), None);
    }

    #[test]
    fn status_labels() {
        assert_eq!(STATUS.label(3), Some("Running"));
        assert_eq!(STATUS.label(6), None);
    }

    #[test]
    fn progress_is_positional() {
        let expected = ["Idle", "Pre-wash", "Wash", "Rinse", "Dry", "Complete"];
        for (i, label) in expected.iter().enumerate() {
            assert_eq!(PROGRESS.label(i64::try_from(i).unwrap()), Some(*label));
        }
        assert_eq!(PROGRESS.label(6), None);
        assert_eq!(PROGRESS.index("Rinse"), Some(3));
    }

    #[test]
    fn codes_round_trip() {
        for table in [&MODES, &STATUS, &ADDITIONAL, &WASH_REGION] {
            for &(code, label) in table.entries() {
                assert_eq!(table.label(i64::from(code)), Some(label));
                assert_eq!(table.code(label), Some(code));
            }
        }
    }

    #[test]
    fn additional_and_region() {
        assert_eq!(ADDITIONAL.label(1), Some("Extra Drying"));
        assert_eq!(ADDITIONAL.label(2), None);
        assert_eq!(WASH_REGION.label(2), Some("Bottom Zone"));
        assert_eq!(
            WASH_REGION.labels().collect::<Vec<_>>(),
            vec!["Both Zones", "Top Zone", "Bottom Zone"]
        );
    }
}
