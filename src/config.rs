// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, ParseError};
use crate::types::ProtocolVersion;

/// Default LAN port of Midea appliances.
pub const DEFAULT_PORT: u16 = 6444;

/// Identity and connection parameters of one E1 appliance.
///
/// Only `device_id` and `protocol` matter to the attribute layer; the rest
/// is carried for the transport that owns the session.
///
/// # Examples
///
/// ```
/// use midea_e1::config::DeviceConfig;
/// use midea_e1::types::ProtocolVersion;
///
/// let config = DeviceConfig::new(150_633_093_131_234, "192.168.1.60")
///     .with_name("Kitchen dishwasher")
///     .with_protocol(ProtocolVersion::V2);
///
/// assert_eq!(config.port, 6444);
/// assert!(config.validate().is_ok());
/// ```
///
/// Loading from JSON:
///
/// ```
/// use midea_e1::config::DeviceConfig;
///
/// let config = DeviceConfig::from_json(r#"{
///     "device_id": 1,
///     "ip_address": "10.0.0.5",
///     "protocol": 3,
///     "token": "ab12",
///     "key": "cd34"
/// }"#).unwrap();
/// assert_eq!(config.name, "E1 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Appliance id as reported during discovery.
    pub device_id: u64,
    /// LAN address.
    pub ip_address: String,
    /// LAN port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// V3 session token (hex).
    #[serde(default)]
    pub token: Option<String>,
    /// V3 session key (hex).
    #[serde(default)]
    pub key: Option<String>,
    /// Transport protocol generation.
    #[serde(default)]
    pub protocol: ProtocolVersion,
    /// Model string.
    #[serde(default)]
    pub model: String,
    /// Model subtype.
    #[serde(default)]
    pub subtype: u16,
    /// Free-form customization; E1 appliances define none.
    #[serde(default)]
    pub customize: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl DeviceConfig {
    /// Creates a configuration with defaults for everything but identity.
    #[must_use]
    pub fn new(device_id: u64, ip_address: impl Into<String>) -> Self {
        Self {
            name: default_name(device_id),
            device_id,
            ip_address: ip_address.into(),
            port: DEFAULT_PORT,
            token: None,
            key: None,
            protocol: ProtocolVersion::default(),
            model: String::new(),
            subtype: 0,
            customize: String::new(),
        }
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed JSON and [`Error::Config`] if
    /// validation fails.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let mut config: Self = serde_json::from_str(json).map_err(ParseError::from)?;
        if config.name.is_empty() {
            config.name = default_name(config.device_id);
        }
        config.validate()?;
        Ok(config)
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the LAN port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the V3 token and key.
    #[must_use]
    pub fn with_credentials(mut self, token: impl Into<String>, key: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.key = Some(key.into());
        self
    }

    /// Sets the protocol generation.
    #[must_use]
    pub fn with_protocol(mut self, protocol: ProtocolVersion) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets model and subtype.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>, subtype: u16) -> Self {
        self.model = model.into();
        self.subtype = subtype;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the port is zero, the address is empty, or
    /// a V3 device lacks its token or key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ip_address.trim().is_empty() {
            return Err(ConfigError::MissingField("ip_address"));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                message: "port must be non-zero".to_string(),
            });
        }
        if self.protocol.requires_credentials() {
            if self.token.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::MissingField("token"));
            }
            if self.key.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::MissingField("key"));
            }
        }
        Ok(())
    }
}

fn default_name(device_id: u64) -> String {
    format!("E1 {device_id}")
}
