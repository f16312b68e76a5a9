// Copyright (c) 2025 - Cowboy AI, Inc.
//! Validation Passes - Document to Topology
//!
//! Each pass takes the raw document plus what earlier passes built, and
//! pushes every problem it finds onto a shared error list instead of
//! returning early. Anything a pass rejects is left out of what it builds,
//! so later passes see a rejected slot as empty.
//!
//! # Passes
//!
//! 1. Devices: build servers and switches, reject shared names
//! 2. Serials: reject serial numbers used by more than one device
//! 3. Racks: resolve slot assignments against the device map
//! 4. Connections: resolve slots to devices, canonicalize, deduplicate

use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::document::{CableRow, TopologyDocument};
use crate::domain::{
    Connection, Device, DeviceKind, Port, Rack, RackSlot, Serial, Topology, ValidationError,
    ValidationReport,
};
use crate::errors::TopologyResult;

type DeviceMap = IndexMap<String, Arc<Device>>;

/// Run every validation pass over a shape-checked document
pub fn load_document(doc: TopologyDocument) -> TopologyResult<Topology> {
    let mut errors = Vec::new();

    let servers = build_devices(DeviceKind::Server, &doc.servers);
    let switches = build_devices(DeviceKind::Switch, &doc.switches);
    let devices = merge_devices(&servers, &switches, &mut errors);
    debug!(
        servers = servers.len(),
        switches = switches.len(),
        "built device maps"
    );

    check_serials(&doc, &mut errors);

    let racks = assemble_racks(&doc.racks, &devices, &mut errors);
    debug!(racks = racks.len(), "assembled racks");

    let connections = resolve_connections(&doc.connections, &racks, &mut errors);
    debug!(connections = connections.len(), "resolved connections");

    if let Some(report) = ValidationReport::from_errors(errors) {
        warn!(problems = report.len(), "topology failed validation");
        return Err(report.into());
    }

    info!(
        devices = devices.len(),
        racks = racks.len(),
        connections = connections.len(),
        "topology loaded"
    );

    Ok(Topology::from_validated_parts(
        servers,
        switches,
        devices,
        racks,
        connections,
    ))
}

fn build_devices(kind: DeviceKind, section: &IndexMap<String, Serial>) -> DeviceMap {
    section
        .iter()
        .map(|(name, serial)| {
            let device = Device::new(kind, name.clone(), serial.as_str());
            (name.clone(), Arc::new(device))
        })
        .collect()
}

/// Union of servers and switches; a shared name keeps the server
fn merge_devices(
    servers: &DeviceMap,
    switches: &DeviceMap,
    errors: &mut Vec<ValidationError>,
) -> DeviceMap {
    let mut devices = servers.clone();
    for (name, switch) in switches {
        if devices.contains_key(name) {
            errors.push(ValidationError::NameCollision { name: name.clone() });
            continue;
        }
        devices.insert(name.clone(), switch.clone());
    }
    devices
}

fn check_serials(doc: &TopologyDocument, errors: &mut Vec<ValidationError>) {
    let labelled = doc
        .servers
        .iter()
        .map(|(name, serial)| (serial, format!("server {name}")))
        .chain(
            doc.switches
                .iter()
                .map(|(name, serial)| (serial, format!("switch {name}"))),
        );

    let mut owners: IndexMap<&Serial, Vec<String>> = IndexMap::new();
    for (serial, label) in labelled {
        owners.entry(serial).or_default().push(label);
    }

    for (serial, devices) in owners {
        if devices.len() > 1 {
            errors.push(ValidationError::DuplicateSerial {
                serial: serial.to_string(),
                devices,
            });
        }
    }
}

fn assemble_racks(
    declared: &IndexMap<String, IndexMap<RackSlot, String>>,
    devices: &DeviceMap,
    errors: &mut Vec<ValidationError>,
) -> IndexMap<String, Rack> {
    let mut placed: HashMap<&str, (&str, RackSlot)> = HashMap::new();
    let mut racks = IndexMap::with_capacity(declared.len());

    for (rack_name, slots) in declared {
        let mut mounted = BTreeMap::new();

        for (&slot, device_name) in slots {
            let Some(device) = devices.get(device_name) else {
                errors.push(ValidationError::UnknownDevice {
                    rack: rack_name.clone(),
                    slot,
                    device: device_name.clone(),
                });
                continue;
            };

            if let Some(&(first_rack, first_slot)) = placed.get(device_name.as_str()) {
                errors.push(ValidationError::DevicePlacedTwice {
                    rack: rack_name.clone(),
                    slot,
                    device: device_name.clone(),
                    first_rack: first_rack.to_string(),
                    first_slot,
                });
                continue;
            }

            placed.insert(device_name.as_str(), (rack_name.as_str(), slot));
            mounted.insert(slot, device.clone());
        }

        racks.insert(rack_name.clone(), Rack::new(rack_name.clone(), mounted));
    }

    racks
}

fn resolve_connections(
    declared: &IndexMap<String, Vec<CableRow>>,
    racks: &IndexMap<String, Rack>,
    errors: &mut Vec<ValidationError>,
) -> IndexSet<Connection> {
    let mut connections = IndexSet::new();
    // (device name, port) -> the far end already plugged in there
    let mut wired: HashMap<(String, Port), String> = HashMap::new();

    for (rack_name, wires) in declared {
        let Some(rack) = racks.get(rack_name) else {
            errors.push(ValidationError::UnknownRack {
                rack: rack_name.clone(),
            });
            continue;
        };

        let mut wires = wires.clone();
        wires.sort();

        for wire in wires {
            let (slot_a, port_a) = wire.a();
            let (slot_b, port_b) = wire.b();

            let device_a = occupant(rack, slot_a, errors);
            let device_b = occupant(rack, slot_b, errors);
            let (Some(device_a), Some(device_b)) = (device_a, device_b) else {
                continue;
            };

            let conn = match Connection::new(device_a.clone(), port_a, device_b.clone(), port_b) {
                Ok(conn) => conn,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };

            if connections.contains(&conn) {
                errors.push(ValidationError::DuplicateConnection {
                    slot_a,
                    port_a,
                    slot_b,
                    port_b,
                    connection: conn.to_string(),
                });
                continue;
            }

            let mut port_clash = false;
            for (slot, device, port) in [(slot_a, device_a, port_a), (slot_b, device_b, port_b)] {
                if let Some(peer) = wired.get(&(device.name().to_string(), port)) {
                    errors.push(ValidationError::PortInUse {
                        rack: rack_name.clone(),
                        slot,
                        port,
                        peer: peer.clone(),
                    });
                    port_clash = true;
                }
            }
            if port_clash {
                continue;
            }

            let [first, second] = conn.endpoints();
            wired.insert(
                (first.device.name().to_string(), first.port),
                second.to_string(),
            );
            wired.insert(
                (second.device.name().to_string(), second.port),
                first.to_string(),
            );
            connections.insert(conn);
        }
    }

    connections
}

fn occupant<'r>(
    rack: &'r Rack,
    slot: RackSlot,
    errors: &mut Vec<ValidationError>,
) -> Option<&'r Arc<Device>> {
    let device = rack.device_at(slot);
    if device.is_none() {
        errors.push(ValidationError::EmptySlot {
            rack: rack.name().to_string(),
            slot,
        });
    }
    device
}
