// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rack Topology Domain Models
//!
//! Entity and value types for a datacenter rack description: the devices,
//! the racks they are mounted in, and the cables between them.
//!
//! # Value Objects with Invariants
//!
//! - [`RackSlot`] - Rack unit location (0-41)
//! - [`Serial`] - Device serial number, coerced from numbers
//! - [`Connection`] - Canonical, order-independent cable between two ports
//!
//! # Entities
//!
//! - [`Device`] - A server or switch, tagged by [`DeviceKind`]
//! - [`Rack`] - Named slot to device mapping
//! - [`Topology`] - The validated aggregate of one rack description

pub mod connection;
pub mod device;
pub mod invariants;
pub mod rack;
pub mod topology;

pub use connection::{Connection, Endpoint, Port};
pub use device::{Device, DeviceKind, Serial};
pub use invariants::{ValidationError, ValidationReport};
pub use rack::{Rack, RackSlot, RackSlotError};
pub use topology::Topology;
