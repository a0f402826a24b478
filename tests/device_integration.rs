// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the E1 device container, driven through JSON frames.

use std::cell::RefCell;

use midea_e1::command::{Command, OutboundCommand, PowerCommand, QueryCommand, StorageCommand};
use midea_e1::types::{AttributeValue, MessageType, ProtocolVersion, ValueKind};
use midea_e1::{
    AttributeSnapshot, ChannelSink, DeviceAttribute, DeviceConfig, E1Device, Error, ValueError,
};

fn config() -> DeviceConfig {
    DeviceConfig::new(150_633_093_131_234, "192.168.1.60").with_protocol(ProtocolVersion::V2)
}

// ============================================================================
// Decoding
// ============================================================================

mod decoding {
    use super::*;

    fn device() -> E1Device<impl Fn(OutboundCommand)> {
        E1Device::new(config(), |_: OutboundCommand| {})
    }

    #[test]
    fn fresh_device_has_schema_defaults() {
        let device = device();
        for attribute in DeviceAttribute::ALL {
            assert_eq!(device.attribute(attribute), &attribute.default_value());
        }
        assert_eq!(device.attribute(DeviceAttribute::Power), &AttributeValue::Bool(false));
        assert!(device.attribute(DeviceAttribute::Dry).is_absent());
        assert!(device.attribute(DeviceAttribute::Mode).is_absent());
        assert!(device.attribute(DeviceAttribute::Temperature).is_absent());
    }

    #[test]
    fn full_status_frame() {
        let mut device = device();
        let delta = device
            .process_message(
                br#"{
                    "power": true,
                    "status": 3,
                    "mode": 2,
                    "additional": 4,
                    "door": false,
                    "rinse_aid": true,
                    "salt": false,
                    "child_lock": true,
                    "uv": false,
                    "dry": true,
                    "dry_status": false,
                    "storage": false,
                    "storage_status": false,
                    "time_remaining": 95,
                    "progress": 2,
                    "storage_remaining": 0,
                    "temperature": 65,
                    "humidity": 40,
                    "waterswitch": true,
                    "water_lack": false,
                    "error_code": 0,
                    "softwater": 3,
                    "wrong_operation": 0,
                    "bright": 2,
                    "wash_region": 1,
                    "version": 513
                }"#,
            )
            .unwrap();

        assert_eq!(delta.len(), 26);
        let attrs = device.attributes();
        assert_eq!(attrs.bool(DeviceAttribute::Power), Some(true));
        assert_eq!(attrs.label(DeviceAttribute::Status), Some("Running"));
        assert_eq!(attrs.label(DeviceAttribute::Mode), Some("Strong Wash"));
        assert_eq!(attrs.label(DeviceAttribute::Progress), Some("Wash"));
        assert_eq!(attrs.int(DeviceAttribute::TimeRemaining), Some(95));
        assert_eq!(attrs.int(DeviceAttribute::Version), Some(513));
        assert_eq!(attrs.int(DeviceAttribute::Additional), Some(4));
        assert_eq!(attrs.display_label(DeviceAttribute::Additional), Some("Power Wash"));
        assert_eq!(attrs.display_label(DeviceAttribute::WashRegion), Some("Top Zone"));

        // Not carried by the frame
        assert!(!delta.contains(DeviceAttribute::IonTimeRemaining));
        assert!(attrs.get(DeviceAttribute::IonTimeRemaining).is_absent());
    }

    #[test]
    fn unassigned_mode_codes_are_absent() {
        let mut device = device();
        device.process_message(br#"{"mode": 4}"#).unwrap();
        assert_eq!(device.attributes().label(DeviceAttribute::Mode), Some("ECO Wash"));

        for code in [0x11, 0x15, 0x17, 0x18, 0x1A, 0xFF] {
            let frame = format!(r#"{{"mode": {code}}}"#);
            let delta = device.process_message(frame.as_bytes()).unwrap();
            assert_eq!(delta.get(DeviceAttribute::Mode), Some(&AttributeValue::Absent));
            assert!(device.attribute(DeviceAttribute::Mode).is_absent());
        }
    }

    #[test]
    fn progress_past_last_stage_is_absent() {
        let mut device = device();
        device.process_message(br#"{"progress": 5}"#).unwrap();
        assert_eq!(device.attributes().label(DeviceAttribute::Progress), Some("Complete"));

        device.process_message(br#"{"progress": 6}"#).unwrap();
        assert!(device.attribute(DeviceAttribute::Progress).is_absent());
    }

    #[test]
    fn delta_only_reports_present_fields() {
        let mut device = device();
        device
            .process_message(br#"{"temperature": 50, "humidity": 30}"#)
            .unwrap();

        let delta = device.process_message(br#"{"temperature": 52}"#).unwrap();
        assert_eq!(
            delta.attributes().collect::<Vec<_>>(),
            vec![DeviceAttribute::Temperature]
        );
        assert_eq!(device.attributes().int(DeviceAttribute::Humidity), Some(30));
        assert_eq!(device.attributes().int(DeviceAttribute::Temperature), Some(52));
    }

    #[test]
    fn same_frame_twice_is_idempotent() {
        let frame = br#"{"power": true, "status": 2, "mode": 7, "progress": 1}"#;
        let mut device = device();

        let first = device.process_message(frame).unwrap();
        let snapshot = device.attributes().clone();
        let second = device.process_message(frame).unwrap();

        assert_eq!(first, second);
        assert_eq!(device.attributes(), &snapshot);
    }

    #[test]
    fn empty_object_changes_nothing() {
        let mut device = device();
        let delta = device.process_message(b"{}").unwrap();
        assert!(delta.is_empty());
        assert_eq!(device.attributes(), &AttributeSnapshot::new());
    }

    #[test]
    fn malformed_frames_are_rejected() {
        let mut device = device();
        device.process_message(br#"{"power": true}"#).unwrap();
        let before = device.attributes().clone();

        for frame in [&b"{\"power\": tru"[..], b"[1, 2]", b"\"status\"", br#"{"mode": -1}"#] {
            let err = device.process_message(frame).unwrap_err();
            assert!(matches!(err, Error::Parse(_)), "frame {frame:?} gave {err:?}");
        }
        assert_eq!(device.attributes(), &before);
    }
}

// ============================================================================
// Commands
// ============================================================================

mod commands {
    use super::*;

    #[test]
    fn query_is_a_single_status_request() {
        let device = E1Device::new(config(), |_: OutboundCommand| {});
        let commands = device.build_query();

        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0], OutboundCommand::Query(QueryCommand::new(0)));
        assert_eq!(commands[0].message_type(), MessageType::Query);
        assert_eq!(commands[0].body_type(), 0x00);
        assert_eq!(commands[0].device_type(), midea_e1::types::DEVICE_TYPE);
    }

    #[test]
    fn set_then_confirm() {
        let sent = RefCell::new(Vec::new());
        let mut device = E1Device::new(config(), |cmd: OutboundCommand| sent.borrow_mut().push(cmd));

        device.set_attribute(DeviceAttribute::Power, true).unwrap();
        assert_eq!(
            *sent.borrow(),
            vec![OutboundCommand::Power(PowerCommand::new(0, true))]
        );
        // Pending until confirmed
        assert_eq!(device.attributes().bool(DeviceAttribute::Power), Some(false));

        device.process_message(br#"{"power": true}"#).unwrap();
        assert_eq!(device.attributes().bool(DeviceAttribute::Power), Some(true));
    }

    #[test]
    fn commands_carry_message_protocol_version() {
        let sent = RefCell::new(Vec::new());
        let mut device = E1Device::new(config(), |cmd: OutboundCommand| sent.borrow_mut().push(cmd));
        device.set_message_protocol_version(3);

        device.set_attribute(DeviceAttribute::Storage, false).unwrap();
        let sent = sent.borrow();
        assert_eq!(sent[0], OutboundCommand::Storage(StorageCommand::new(3, false)));
        assert_eq!(sent[0].protocol_version(), 3);
        assert_eq!(sent[0].target(), Some(DeviceAttribute::Storage));
        assert_eq!(device.build_query()[0].protocol_version(), 3);
    }

    #[test]
    fn wrong_type_sends_nothing() {
        let sent = RefCell::new(Vec::new());
        let device = E1Device::new(config(), |cmd: OutboundCommand| sent.borrow_mut().push(cmd));

        let err = device.set_attribute(DeviceAttribute::Power, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::WrongType {
                expected: ValueKind::Bool,
                actual: ValueKind::Int,
                ..
            })
        ));

        let err = device.set_attribute(DeviceAttribute::ChildLock, "on").unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::WrongType { actual: ValueKind::Label, .. })
        ));

        assert!(sent.borrow().is_empty());
        assert_eq!(device.attributes(), &AttributeSnapshot::new());
    }

    #[test]
    fn read_only_attributes_are_ignored() {
        let sent = RefCell::new(Vec::new());
        let device = E1Device::new(config(), |cmd: OutboundCommand| sent.borrow_mut().push(cmd));

        for attribute in DeviceAttribute::ALL.into_iter().filter(|a| !a.is_writable()) {
            device.set_attribute(attribute, true).unwrap();
        }
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn read_only_attributes_still_reject_non_bool() {
        let sent = RefCell::new(Vec::new());
        let device = E1Device::new(config(), |cmd: OutboundCommand| sent.borrow_mut().push(cmd));

        let err = device
            .set_attribute(DeviceAttribute::Temperature, AttributeValue::Int(50))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::WrongType {
                attribute: DeviceAttribute::Temperature,
                actual: ValueKind::Int,
                ..
            })
        ));
        assert!(device.set_attribute_by_name("mode", "ECO Wash").is_err());
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn set_by_name() {
        let sent = RefCell::new(Vec::new());
        let device = E1Device::new(config(), |cmd: OutboundCommand| sent.borrow_mut().push(cmd));

        device.set_attribute_by_name("storage", true).unwrap();
        assert_eq!(sent.borrow().len(), 1);

        let err = device.set_attribute_by_name("turbo_dry", true).unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::UnknownAttribute(ref name)) if name == "turbo_dry"));
        assert_eq!(sent.borrow().len(), 1);
    }
}

// ============================================================================
// Channel transport
// ============================================================================

mod channel {
    use super::*;

    #[tokio::test]
    async fn session_task_receives_commands() {
        let (sink, mut rx) = ChannelSink::new();
        let device = E1Device::new(config(), sink);

        let session = tokio::spawn(async move {
            let mut received = Vec::new();
            while let Some(command) = rx.recv().await {
                received.push(command);
            }
            received
        });

        device.set_attribute(DeviceAttribute::Power, true).unwrap();
        device.set_attribute(DeviceAttribute::ChildLock, false).unwrap();
        device.set_attribute(DeviceAttribute::Door, true).unwrap();
        drop(device);

        let received = session.await.unwrap();
        let names: Vec<_> = received.iter().map(Command::name).collect();
        assert_eq!(names, vec!["Power", "Lock"]);
    }

    #[tokio::test]
    async fn devices_share_one_session_channel() {
        let (sender, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let first = E1Device::new(config(), ChannelSink::from_sender(sender.clone()));
        let second = E1Device::new(
            DeviceConfig::new(2, "192.168.1.61").with_protocol(ProtocolVersion::V2),
            ChannelSink::from_sender(sender),
        );

        first.set_attribute(DeviceAttribute::Power, true).unwrap();
        second.set_attribute(DeviceAttribute::Storage, true).unwrap();
        drop((first, second));

        let mut targets = Vec::new();
        while let Some(command) = rx.recv().await {
            targets.push(command.target());
        }
        assert_eq!(
            targets,
            vec![Some(DeviceAttribute::Power), Some(DeviceAttribute::Storage)]
        );
    }

    #[tokio::test]
    async fn closed_receiver_does_not_fail_sets() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        let device = E1Device::new(config(), sink);

        assert!(device.sink().is_closed());
        device.set_attribute(DeviceAttribute::Power, false).unwrap();
    }
}
