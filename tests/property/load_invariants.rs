// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Loading Rack Descriptions
//!
//! Documents are generated as a management switch in slot 0 plus a run of
//! servers, each cabled to the switch on a distinct switch port.

use dc_check::domain::{RackSlot, Serial, ValidationError};
use dc_check::loader::{load, load_document, CableRow, TopologyDocument};
use dc_check::TopologyError;
use indexmap::IndexMap;
use proptest::prelude::*;

// ============================================================================
// Document Generation
// ============================================================================

fn slot(n: usize) -> RackSlot {
    RackSlot::new(n as i64).unwrap()
}

/// One rack: `mgmt` in slot 0, `s1..=sN` in slots 1..=N, server i on mgmt port i
fn star_document(servers: usize, uplinked: &[bool]) -> TopologyDocument {
    let mut doc = TopologyDocument::default();
    doc.switches.insert("mgmt".into(), Serial::new("MGMT"));

    let mut slots = IndexMap::new();
    slots.insert(slot(0), "mgmt".to_string());

    let mut wires = Vec::new();
    for i in 1..=servers {
        let name = format!("s{i}");
        doc.servers.insert(name.clone(), Serial::new(format!("SN{i}")));
        slots.insert(slot(i), name);
        if uplinked.get(i - 1).copied().unwrap_or(false) {
            wires.push(CableRow(slot(i), 0, slot(0), i as u32));
        }
    }

    doc.racks.insert("r1".into(), slots);
    doc.connections.insert("r1".into(), wires);
    doc
}

fn star() -> impl Strategy<Value = TopologyDocument> {
    (1usize..=41)
        .prop_flat_map(|n| (Just(n), prop::collection::vec(any::<bool>(), n)))
        .prop_map(|(n, uplinked)| star_document(n, &uplinked))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Loading is deterministic
    ///
    /// The same source always produces structurally equal topologies.
    #[test]
    fn prop_load_is_idempotent(doc in star()) {
        let source = serde_yaml::to_string(&doc).unwrap();

        let first = load(&source).unwrap();
        let second = load(&source).unwrap();
        prop_assert_eq!(&first, &second);

        let direct = load_document(doc).unwrap();
        prop_assert_eq!(&first, &direct);
    }

    /// Property: Every cable is visible from both ends
    #[test]
    fn prop_find_connections_is_symmetric(doc in star()) {
        let topology = load_document(doc).unwrap();

        for name in topology.devices().keys() {
            for (port, peer) in topology.find_connections(name).unwrap() {
                let back = topology.find_connections(peer.device.name()).unwrap();
                let echo = &back[&peer.port];
                prop_assert_eq!(echo.device.name(), name.as_str());
                prop_assert_eq!(echo.port, port);
            }
        }
    }

    /// Property: Listing a cable from both ends is a duplicate
    #[test]
    fn prop_reverse_listing_is_duplicate(doc in star(), pick in any::<prop::sample::Index>()) {
        let mut doc = doc;
        let wires = doc.connections.get_mut("r1").unwrap();
        prop_assume!(!wires.is_empty());

        let CableRow(s1, p1, s2, p2) = wires[pick.index(wires.len())];
        wires.push(CableRow(s2, p2, s1, p1));

        match load_document(doc) {
            Err(TopologyError::Invalid(report)) => {
                prop_assert_eq!(report.len(), 1);
                let is_duplicate = matches!(
                    report.errors()[0],
                    ValidationError::DuplicateConnection { .. }
                );
                prop_assert!(is_duplicate);
            }
            other => prop_assert!(false, "expected a duplicate, got {:?}", other),
        }
    }
}
