// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The E1 attribute schema.
//!
//! [`DeviceAttribute`] is the closed set of attributes an E1 appliance
//! tracks. The enum declaration order is the schema order: the response
//! decoder walks [`DeviceAttribute::ALL`] in that order on every frame, and
//! deltas iterate in it too.
//!
//! Each attribute declares:
//!
//! | Property | Method |
//! |----------|--------|
//! | default value at construction | [`DeviceAttribute::default_value`] |
//! | value type once decoded | [`DeviceAttribute::kind`] |
//! | how a raw field is translated | [`DeviceAttribute::transform`] |
//! | whether callers may change it | [`DeviceAttribute::is_writable`] |
//!
//! # Examples
//!
//! ```
//! use midea_e1::attribute::DeviceAttribute;
//! use midea_e1::types::{AttributeValue, ValueKind};
//!
//! let attr: DeviceAttribute = "child_lock".parse().unwrap();
//! assert_eq!(attr, DeviceAttribute::ChildLock);
//! assert!(attr.is_writable());
//! assert_eq!(attr.kind(), ValueKind::Bool);
//! assert_eq!(attr.default_value(), AttributeValue::Bool(false));
//!
//! assert_eq!(DeviceAttribute::Mode.default_value(), AttributeValue::Absent);
//! ```

pub mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::{AttributeValue, RawValue, ValueKind};

use tables::{LookupTable, PositionalTable};

/// An attribute of an E1 appliance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DeviceAttribute {
    /// Main power.
    Power,
    /// Machine status, see [`tables::STATUS`].
    Status,
    /// Selected wash program, see [`tables::MODES`].
    Mode,
    /// Additional option code, see [`tables::ADDITIONAL`].
    Additional,
    /// Door open.
    Door,
    /// Rinse aid running low.
    RinseAid,
    /// Salt running low.
    Salt,
    /// Child lock engaged.
    ChildLock,
    /// UV sterilisation enabled.
    Uv,
    /// Extra drying enabled.
    Dry,
    /// Drying in progress.
    DryStatus,
    /// Storage mode enabled.
    Storage,
    /// Storage mode active.
    StorageStatus,
    /// Minutes left in the current cycle.
    TimeRemaining,
    /// Cycle phase, see [`tables::PROGRESS`].
    Progress,
    /// Hours left in storage mode.
    StorageRemaining,
    /// Water temperature in °C.
    Temperature,
    /// Cavity humidity in %.
    Humidity,
    /// Water inlet switch.
    Waterswitch,
    /// Water supply missing.
    WaterLack,
    /// Appliance error code.
    ErrorCode,
    /// Water softener level.
    Softwater,
    /// Wrong-operation code.
    WrongOperation,
    /// Panel brightness level.
    Bright,
    /// Automatic door opening enabled.
    DoorAutoOpen,
    /// Spray zone code, see [`tables::WASH_REGION`].
    WashRegion,
    /// Firmware version.
    Version,
    /// Air drying enabled.
    Air,
    /// Air drying active.
    AirStatus,
    /// Configured air drying hours.
    AirSetHour,
    /// Air drying hours left.
    AirLeftHour,
    /// Ioniser level.
    IonLevel,
    /// Ioniser status code.
    IonStatus,
    /// Ioniser minutes left.
    IonTimeRemaining,
}

impl DeviceAttribute {
    /// Number of attributes in the schema.
    pub const COUNT: usize = 34;

    /// All attributes in schema order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Power,
        Self::Status,
        Self::Mode,
        Self::Additional,
        Self::Door,
        Self::RinseAid,
        Self::Salt,
        Self::ChildLock,
        Self::Uv,
        Self::Dry,
        Self::DryStatus,
        Self::Storage,
        Self::StorageStatus,
        Self::TimeRemaining,
        Self::Progress,
        Self::StorageRemaining,
        Self::Temperature,
        Self::Humidity,
        Self::Waterswitch,
        Self::WaterLack,
        Self::ErrorCode,
        Self::Softwater,
        Self::WrongOperation,
        Self::Bright,
        Self::DoorAutoOpen,
        Self::WashRegion,
        Self::Version,
        Self::Air,
        Self::AirStatus,
        Self::AirSetHour,
        Self::AirLeftHour,
        Self::IonLevel,
        Self::IonStatus,
        Self::IonTimeRemaining,
    ];

    /// Returns the position of the attribute in schema order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Status => "status",
            Self::Mode => "mode",
            Self::Additional => "additional",
            Self::Door => "door",
            Self::RinseAid => "rinse_aid",
            Self::Salt => "salt",
            Self::ChildLock => "child_lock",
            Self::Uv => "uv",
            Self::Dry => "dry",
            Self::DryStatus => "dry_status",
            Self::Storage => "storage",
            Self::StorageStatus => "storage_status",
            Self::TimeRemaining => "time_remaining",
            Self::Progress => "progress",
            Self::StorageRemaining => "storage_remaining",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Waterswitch => "waterswitch",
            Self::WaterLack => "water_lack",
            Self::ErrorCode => "error_code",
            Self::Softwater => "softwater",
            Self::WrongOperation => "wrong_operation",
            Self::Bright => "bright",
            Self::DoorAutoOpen => "door_auto_open",
            Self::WashRegion => "wash_region",
            Self::Version => "version",
            Self::Air => "air",
            Self::AirStatus => "air_status",
            Self::AirSetHour => "air_set_hour",
            Self::AirLeftHour => "air_left_hour",
            Self::IonLevel => "ion_level",
            Self::IonStatus => "ion_status",
            Self::IonTimeRemaining => "ion_time_remaining",
        }
    }

    /// Returns the value type of the attribute after decoding.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Power
            | Self::Door
            | Self::RinseAid
            | Self::Salt
            | Self::ChildLock
            | Self::Uv
            | Self::Dry
            | Self::DryStatus
            | Self::Storage
            | Self::StorageStatus
            | Self::Waterswitch
            | Self::WaterLack
            | Self::DoorAutoOpen
            | Self::Air
            | Self::AirStatus => ValueKind::Bool,
            Self::Status | Self::Mode | Self::Progress => ValueKind::Label,
            Self::Additional
            | Self::TimeRemaining
            | Self::StorageRemaining
            | Self::Temperature
            | Self::Humidity
            | Self::ErrorCode
            | Self::Softwater
            | Self::WrongOperation
            | Self::Bright
            | Self::WashRegion
            | Self::Version
            | Self::AirSetHour
            | Self::AirLeftHour
            | Self::IonLevel
            | Self::IonStatus
            | Self::IonTimeRemaining => ValueKind::Int,
        }
    }

    /// Returns the value the attribute holds before the appliance reports it.
    ///
    /// Flags start out `false`, except `dry`, which stays absent until the
    /// appliance reports it. Everything else starts out absent.
    #[must_use]
    pub fn default_value(self) -> AttributeValue {
        match (self, self.kind()) {
            (Self::Dry, _) | (_, ValueKind::Absent | ValueKind::Int | ValueKind::Label) => {
                AttributeValue::Absent
            }
            (_, ValueKind::Bool) => AttributeValue::Bool(false),
        }
    }

    /// Returns how a raw field value is translated for this attribute.
    #[must_use]
    pub fn transform(self) -> Transform {
        match self {
            Self::Status => Transform::Keyed(&tables::STATUS),
            Self::Mode => Transform::Keyed(&tables::MODES),
            Self::Progress => Transform::Positional(&tables::PROGRESS),
            _ => Transform::Passthrough,
        }
    }

    /// Returns `true` if callers may request a change of this attribute.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Power | Self::ChildLock | Self::Storage)
    }

    /// Returns the display table for integer-coded attributes.
    ///
    /// `additional` and `wash_region` stay numeric in the snapshot; their
    /// tables let consumers render the code.
    #[must_use]
    pub fn table(self) -> Option<&'static LookupTable> {
        match self {
            Self::Additional => Some(&tables::ADDITIONAL),
            Self::WashRegion => Some(&tables::WASH_REGION),
            Self::Status => Some(&tables::STATUS),
            Self::Mode => Some(&tables::MODES),
            _ => None,
        }
    }

    /// Returns the labels a consumer may present as options, if any.
    #[must_use]
    pub fn options(self) -> Option<Vec<&'static str>> {
        match self.transform() {
            Transform::Positional(table) => Some(table.labels().collect()),
            Transform::Keyed(table) => Some(table.labels().collect()),
            Transform::Passthrough => self.table().map(|t| t.labels().collect()),
        }
    }
}

impl fmt::Display for DeviceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceAttribute {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| ValueError::UnknownAttribute(s.to_string()))
    }
}

/// Translation applied to a raw field value by the response decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// The codec already produced the final value.
    Passthrough,
    /// Look the code up in a sparse table.
    Keyed(&'static LookupTable),
    /// Use the code as an index into an ordered label list.
    Positional(&'static PositionalTable),
}

impl Transform {
    /// Translates a raw value.
    ///
    /// Table transforms yield [`AttributeValue::Absent`] for unknown codes
    /// and for raw values that are not integers. Passthrough keeps the raw
    /// type; the response decoder checks it against [`DeviceAttribute::kind`].
    ///
    /// # Examples
    ///
    /// ```
    /// use midea_e1::attribute::DeviceAttribute;
    /// use midea_e1::types::{AttributeValue, RawValue};
    ///
    /// let status = DeviceAttribute::Status.transform();
    /// assert_eq!(status.apply(RawValue::Int(3)), AttributeValue::label("Running"));
    /// assert_eq!(status.apply(RawValue::Int(42)), AttributeValue::Absent);
    /// ```
    #[must_use]
    pub fn apply(&self, raw: RawValue) -> AttributeValue {
        match (self, raw) {
            (Self::Passthrough, raw) => raw.into(),
            (Self::Keyed(table), RawValue::Int(code)) => table.label(code).into(),
            (Self::Positional(table), RawValue::Int(index)) => table.label(index).into(),
            (Self::Keyed(_) | Self::Positional(_), RawValue::Bool(_)) => AttributeValue::Absent,
        }
    }
}
