// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rack Device Domain Model
//!
//! Servers and switches are the only devices a rack description knows about.
//! They differ only in how they are displayed, so a single [`Device`] value
//! carries a [`DeviceKind`] discriminator instead of two separate types.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of device occupying a rack slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeviceKind {
    /// Compute node
    Server,
    /// Network switch (top-of-rack, management, ...)
    Switch,
}

impl DeviceKind {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Switch => "switch",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Server => "Server",
            Self::Switch => "Switch",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Device serial number
///
/// Serial numbers are opaque identifiers. Input documents sometimes write
/// them as bare numbers (`1234`), so deserialization accepts integers and
/// coerces them to their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Serial(String);

impl Serial {
    pub fn new(serial: impl Into<String>) -> Self {
        Self(serial.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Serial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        match Raw::deserialize(deserializer) {
            Ok(Raw::Text(s)) => Ok(Self(s)),
            Ok(Raw::Signed(n)) => Ok(Self(n.to_string())),
            Ok(Raw::Unsigned(n)) => Ok(Self(n.to_string())),
            Err(_) => Err(serde::de::Error::custom("expected str")),
        }
    }
}

/// A server or switch
///
/// Equality and hashing cover the kind, the name and the serial, so two
/// devices are equal only if they are structurally identical.
///
/// # Examples
///
/// ```rust
/// use dc_check::domain::{Device, DeviceKind};
///
/// let web = Device::server("web1", "X1");
/// assert_eq!(web.kind(), DeviceKind::Server);
/// assert_eq!(web.to_string(), "Server-web1#X1");
/// assert_eq!(Device::switch("mgmt", "M1").to_string(), "Switch-mgmt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Device {
    kind: DeviceKind,
    name: String,
    serial: Serial,
}

impl Device {
    pub fn new(kind: DeviceKind, name: impl Into<String>, serial: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            serial: Serial::new(serial),
        }
    }

    pub fn server(name: impl Into<String>, serial: impl Into<String>) -> Self {
        Self::new(DeviceKind::Server, name, serial)
    }

    pub fn switch(name: impl Into<String>, serial: impl Into<String>) -> Self {
        Self::new(DeviceKind::Switch, name, serial)
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn serial(&self) -> &Serial {
        &self.serial
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DeviceKind::Server => {
                write!(f, "{}-{}#{}", self.kind.display_name(), self.name, self.serial)
            }
            DeviceKind::Switch => write!(f, "{}-{}", self.kind.display_name(), self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_display() {
        assert_eq!(Device::server("web1", "X1").to_string(), "Server-web1#X1");
        assert_eq!(Device::switch("tor", "T1").to_string(), "Switch-tor");
    }

    #[test]
    fn test_device_identity_includes_kind() {
        let server = Device::server("box", "S1");
        let switch = Device::switch("box", "S1");
        assert_ne!(server, switch);
        assert_eq!(server, Device::server("box", "S1"));
        assert_ne!(server, Device::server("box", "S2"));
    }

    #[test]
    fn test_serial_coerces_numbers() {
        let serial: Serial = serde_yaml::from_str("12345").unwrap();
        assert_eq!(serial.as_str(), "12345");

        let serial: Serial = serde_yaml::from_str("\"A-1\"").unwrap();
        assert_eq!(serial.as_str(), "A-1");

        assert!(serde_yaml::from_str::<Serial>("[1, 2]").is_err());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DeviceKind::Server.as_str(), "server");
        assert_eq!(DeviceKind::Switch.display_name(), "Switch");
    }
}
