// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded E1 status response.

use serde::Deserialize;

use crate::attribute::DeviceAttribute;
use crate::types::RawValue;

use super::DecodedResponse;

/// A decoded E1 status frame.
///
/// Every field is optional: firmware variants and response kinds report
/// different subsets, and a `None` field is simply not part of this frame.
/// Enumerated fields (`status`, `mode`, `progress`) hold the raw code.
///
/// Deserializes from a JSON object keyed by attribute name, which is how
/// [`JsonFrameCodec`](crate::protocol::JsonFrameCodec) reads frames.
///
/// # Examples
///
/// ```
/// use midea_e1::attribute::DeviceAttribute;
/// use midea_e1::response::{DecodedResponse, E1Response};
/// use midea_e1::types::RawValue;
///
/// let response: E1Response =
///     serde_json::from_str(r#"{"power": true, "mode": 3, "temperature": 55}"#).unwrap();
///
/// assert_eq!(response.get(DeviceAttribute::Mode), Some(RawValue::Int(3)));
/// assert!(response.has(DeviceAttribute::Power));
/// assert!(!response.has(DeviceAttribute::Humidity));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct E1Response {
    /// Main power.
    pub power: Option<bool>,
    /// Raw status code.
    pub status: Option<u8>,
    /// Raw wash program code.
    pub mode: Option<u8>,
    /// Additional option code.
    pub additional: Option<u8>,
    /// Door open.
    pub door: Option<bool>,
    /// Rinse aid low.
    pub rinse_aid: Option<bool>,
    /// Salt low.
    pub salt: Option<bool>,
    /// Child lock engaged.
    pub child_lock: Option<bool>,
    /// UV enabled.
    pub uv: Option<bool>,
    /// Extra drying enabled.
    pub dry: Option<bool>,
    /// Drying in progress.
    pub dry_status: Option<bool>,
    /// Storage mode enabled.
    pub storage: Option<bool>,
    /// Storage mode active.
    pub storage_status: Option<bool>,
    /// Minutes left.
    pub time_remaining: Option<u16>,
    /// Raw progress index.
    pub progress: Option<u8>,
    /// Storage hours left.
    pub storage_remaining: Option<u8>,
    /// Water temperature.
    pub temperature: Option<u8>,
    /// Cavity humidity.
    pub humidity: Option<u8>,
    /// Water inlet switch.
    pub waterswitch: Option<bool>,
    /// Water supply missing.
    pub water_lack: Option<bool>,
    /// Error code.
    pub error_code: Option<u8>,
    /// Softener level.
    pub softwater: Option<u8>,
    /// Wrong-operation code.
    pub wrong_operation: Option<u8>,
    /// Panel brightness.
    pub bright: Option<u8>,
    /// Automatic door opening.
    pub door_auto_open: Option<bool>,
    /// Spray zone code.
    pub wash_region: Option<u8>,
    /// Firmware version.
    pub version: Option<u16>,
    /// Air drying enabled.
    pub air: Option<bool>,
    /// Air drying active.
    pub air_status: Option<bool>,
    /// Configured air drying hours.
    pub air_set_hour: Option<u8>,
    /// Air drying hours left.
    pub air_left_hour: Option<u8>,
    /// Ioniser level.
    pub ion_level: Option<u8>,
    /// Ioniser status code.
    pub ion_status: Option<u8>,
    /// Ioniser minutes left.
    pub ion_time_remaining: Option<u16>,
}

impl DecodedResponse for E1Response {
    fn get(&self, attribute: DeviceAttribute) -> Option<RawValue> {
        use DeviceAttribute as A;

        match attribute {
            A::Power => self.power.map(RawValue::from),
            A::Status => self.status.map(RawValue::from),
            A::Mode => self.mode.map(RawValue::from),
            A::Additional => self.additional.map(RawValue::from),
            A::Door => self.door.map(RawValue::from),
            A::RinseAid => self.rinse_aid.map(RawValue::from),
            A::Salt => self.salt.map(RawValue::from),
            A::ChildLock => self.child_lock.map(RawValue::from),
            A::Uv => self.uv.map(RawValue::from),
            A::Dry => self.dry.map(RawValue::from),
            A::DryStatus => self.dry_status.map(RawValue::from),
            A::Storage => self.storage.map(RawValue::from),
            A::StorageStatus => self.storage_status.map(RawValue::from),
            A::TimeRemaining => self.time_remaining.map(RawValue::from),
            A::Progress => self.progress.map(RawValue::from),
            A::StorageRemaining => self.storage_remaining.map(RawValue::from),
            A::Temperature => self.temperature.map(RawValue::from),
            A::Humidity => self.humidity.map(RawValue::from),
            A::Waterswitch => self.waterswitch.map(RawValue::from),
            A::WaterLack => self.water_lack.map(RawValue::from),
            A::ErrorCode => self.error_code.map(RawValue::from),
            A::Softwater => self.softwater.map(RawValue::from),
            A::WrongOperation => self.wrong_operation.map(RawValue::from),
            A::Bright => self.bright.map(RawValue::from),
            A::DoorAutoOpen => self.door_auto_open.map(RawValue::from),
            A::WashRegion => self.wash_region.map(RawValue::from),
            A::Version => self.version.map(RawValue::from),
            A::Air => self.air.map(RawValue::from),
            A::AirStatus => self.air_status.map(RawValue::from),
            A::AirSetHour => self.air_set_hour.map(RawValue::from),
            A::AirLeftHour => self.air_left_hour.map(RawValue::from),
            A::IonLevel => self.ion_level.map(RawValue::from),
            A::IonStatus => self.ion_status.map(RawValue::from),
            A::IonTimeRemaining => self.ion_time_remaining.map(RawValue::from),
        }
    }
}
