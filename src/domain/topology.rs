// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Aggregate
//!
//! The validated result of one load: every device, rack and cable from a
//! single rack description. A topology is immutable once built; callers
//! reload the source to observe changes.
//!
//! The device maps own the [`Device`] values. Racks and connections hold
//! `Arc` clones of the same instances, never copies.

use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::connection::{Endpoint, Port};
use super::{Connection, Device, DeviceKind, Rack};
use crate::errors::{TopologyError, TopologyResult};

/// Validated rack topology
///
/// # Invariants
/// - Device names are unique across servers and switches
/// - Serial numbers are unique across servers and switches
/// - Every device in a rack slot or connection is in the device map
/// - No duplicate connections, no self-connections, no port used twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    servers: IndexMap<String, Arc<Device>>,
    switches: IndexMap<String, Arc<Device>>,
    devices: IndexMap<String, Arc<Device>>,
    racks: IndexMap<String, Rack>,
    connections: IndexSet<Connection>,
}

impl Topology {
    /// Assemble a topology from parts the loader has already validated
    pub(crate) fn from_validated_parts(
        servers: IndexMap<String, Arc<Device>>,
        switches: IndexMap<String, Arc<Device>>,
        devices: IndexMap<String, Arc<Device>>,
        racks: IndexMap<String, Rack>,
        connections: IndexSet<Connection>,
    ) -> Self {
        Self {
            servers,
            switches,
            devices,
            racks,
            connections,
        }
    }

    pub fn servers(&self) -> &IndexMap<String, Arc<Device>> {
        &self.servers
    }

    pub fn switches(&self) -> &IndexMap<String, Arc<Device>> {
        &self.switches
    }

    /// Servers and switches together, keyed by name
    pub fn devices(&self) -> &IndexMap<String, Arc<Device>> {
        &self.devices
    }

    /// Racks in declaration order
    pub fn racks(&self) -> &IndexMap<String, Rack> {
        &self.racks
    }

    pub fn connections(&self) -> &IndexSet<Connection> {
        &self.connections
    }

    pub fn device(&self, name: &str) -> TopologyResult<&Arc<Device>> {
        self.devices
            .get(name)
            .ok_or_else(|| TopologyError::UnknownDevice(name.to_string()))
    }

    pub fn rack(&self, name: &str) -> TopologyResult<&Rack> {
        self.racks
            .get(name)
            .ok_or_else(|| TopologyError::UnknownRack(name.to_string()))
    }

    /// Everything cabled directly to `device_name`, keyed by local port
    ///
    /// Each value is the far end of the cable: the peer device and the port
    /// on the peer.
    pub fn find_connections(&self, device_name: &str) -> TopologyResult<BTreeMap<Port, Endpoint>> {
        let device = self.device(device_name)?;

        let mut ports = BTreeMap::new();
        for conn in self.connections.iter().filter(|c| c.touches(device)) {
            for local in conn.endpoints() {
                if *local.device != **device {
                    continue;
                }
                // Port reuse is rejected at load time; nothing is overwritten.
                if let Some(peer) = conn.peer_of(device, local.port) {
                    ports.insert(local.port, peer.clone());
                }
            }
        }

        Ok(ports)
    }

    /// Devices of one kind mounted in `rack_name`, in slot order
    pub fn devices_in_rack_of_type(
        &self,
        rack_name: &str,
        kind: DeviceKind,
    ) -> TopologyResult<impl Iterator<Item = &Arc<Device>>> {
        Ok(self.rack(rack_name)?.devices_of_kind(kind))
    }
}
