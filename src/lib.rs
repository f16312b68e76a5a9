//! Datacenter rack topology checker
//!
//! This crate validates a declarative rack description (servers, switches,
//! slot assignments and cabling) into an immutable [`Topology`], and answers
//! direct connectivity queries against it.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod pprint;

// Re-export commonly used types
pub use domain::{Connection, Device, DeviceKind, Rack, RackSlot, Topology, ValidationError, ValidationReport};
pub use errors::{TopologyError, TopologyResult};
pub use loader::{load, read_topology_file};
