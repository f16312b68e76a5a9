// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Validation Errors
//!
//! Every structural problem the loader can find in a rack description has a
//! variant here. The loader collects them instead of stopping at the first
//! one, and hands the whole list back as a [`ValidationReport`].
//!
//! # Invariant Categories
//!
//! 1. **Identity**: device names and serial numbers are unique
//! 2. **Placement**: rack slots reference known devices, each device mounted once
//! 3. **Cabling**: connections reference occupied slots in declared racks,
//!    are not duplicated and never reuse a port

use std::fmt;

use super::connection::Port;
use super::RackSlot;

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A server and a switch share a name
    #[error("Server {name} shares a name with a switch")]
    NameCollision { name: String },

    /// Several devices share a serial number
    #[error("Serial number {serial} is not unique: used by {}", .devices.join(", "))]
    DuplicateSerial { serial: String, devices: Vec<String> },

    /// A rack slot names a device nobody declared
    #[error("Rack {rack} location {slot}: {device} is an unknown device")]
    UnknownDevice {
        rack: String,
        slot: RackSlot,
        device: String,
    },

    /// A device is mounted in more than one slot
    #[error("Rack {rack} location {slot}: {device} is already mounted in rack {first_rack} location {first_slot}")]
    DevicePlacedTwice {
        rack: String,
        slot: RackSlot,
        device: String,
        first_rack: String,
        first_slot: RackSlot,
    },

    /// Connections listed for a rack that was never declared
    #[error("In connections, {rack} has not been defined")]
    UnknownRack { rack: String },

    /// A connection references an empty rack slot
    #[error("In connections, RU #{slot} in {rack} has no device")]
    EmptySlot { rack: String, slot: RackSlot },

    /// Both ends of a connection are the same port
    #[error("Can't connect {device} port#{port} to itself")]
    SelfConnection { device: String, port: Port },

    /// The canonical connection was already listed
    #[error("Duplicate connection: slot#{slot_a}:port#{port_a} -> slot#{slot_b}:port#{port_b} results in {connection} - do you have the reverse connection listed?")]
    DuplicateConnection {
        slot_a: RackSlot,
        port_a: Port,
        slot_b: RackSlot,
        port_b: Port,
        connection: String,
    },

    /// A port already carries a different cable
    #[error("Port in use: slot#{slot}:port#{port} in {rack} is already connected to {peer}")]
    PortInUse {
        rack: String,
        slot: RackSlot,
        port: Port,
        peer: String,
    },
}

/// Every problem found in one validation pass, in discovery order
///
/// A report is never empty; [`ValidationReport::from_errors`] returns `None`
/// when there is nothing to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

impl IntoIterator for ValidationReport {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: i64) -> RackSlot {
        RackSlot::new(n).unwrap()
    }

    #[test]
    fn test_empty_report_is_none() {
        assert!(ValidationReport::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn test_report_display_one_per_line() {
        let report = ValidationReport::from_errors(vec![
            ValidationError::UnknownRack { rack: "r9".into() },
            ValidationError::EmptySlot {
                rack: "r1".into(),
                slot: slot(4),
            },
        ])
        .unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.to_string(),
            "In connections, r9 has not been defined\nIn connections, RU #4 in r1 has no device"
        );
    }

    #[test]
    fn test_duplicate_serial_message() {
        let err = ValidationError::DuplicateSerial {
            serial: "S1".into(),
            devices: vec!["server a".into(), "switch b".into()],
        };
        assert_eq!(
            err.to_string(),
            "Serial number S1 is not unique: used by server a, switch b"
        );
    }

    #[test]
    fn test_unknown_device_message() {
        let err = ValidationError::UnknownDevice {
            rack: "r1".into(),
            slot: slot(12),
            device: "ghost".into(),
        };
        assert_eq!(err.to_string(), "Rack r1 location 12: ghost is an unknown device");
    }
}
