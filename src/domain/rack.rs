// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rack Value Objects with Validation Invariants

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use super::{Device, DeviceKind};

/// Rack slot validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RackSlotError {
    #[error("Value must be from {} to {}, got {}", RackSlot::MIN, RackSlot::MAX, .0)]
    OutOfRange(i64),
}

/// Rack unit location value object
///
/// Invariants:
/// - Valid rack unit range (0-41)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RackSlot(u8);

impl RackSlot {
    /// Lowest rack unit
    pub const MIN: u8 = 0;

    /// Highest rack unit
    pub const MAX: u8 = 41;

    /// Create a new rack slot with validation
    pub fn new(slot: i64) -> Result<Self, RackSlotError> {
        if slot < i64::from(Self::MIN) || slot > i64::from(Self::MAX) {
            return Err(RackSlotError::OutOfRange(slot));
        }

        Ok(Self(slot as u8))
    }

    /// Get the rack unit number
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for RackSlot {
    type Error = RackSlotError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RackSlot> for u8 {
    fn from(slot: RackSlot) -> Self {
        slot.0
    }
}

/// A named rack and the devices mounted in it
///
/// Slots are unique keys and iterate in ascending rack unit order. Devices
/// are shared with the owning [`Topology`](super::Topology).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    name: String,
    devices: BTreeMap<RackSlot, Arc<Device>>,
}

impl Rack {
    pub fn new(name: impl Into<String>, devices: BTreeMap<RackSlot, Arc<Device>>) -> Self {
        Self {
            name: name.into(),
            devices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Device mounted at `slot`, if any
    pub fn device_at(&self, slot: RackSlot) -> Option<&Arc<Device>> {
        self.devices.get(&slot)
    }

    /// All occupied slots, lowest first
    pub fn slots(&self) -> impl Iterator<Item = (RackSlot, &Arc<Device>)> {
        self.devices.iter().map(|(slot, device)| (*slot, device))
    }

    /// Devices of one kind, in slot order
    pub fn devices_of_kind(&self, kind: DeviceKind) -> impl Iterator<Item = &Arc<Device>> {
        self.devices
            .values()
            .filter(move |device| device.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
