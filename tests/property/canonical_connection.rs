// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Canonical Connections

use dc_check::domain::{Connection, Device, DeviceKind, ValidationError};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Property Test Strategies
// ============================================================================

fn device_kind() -> impl Strategy<Value = DeviceKind> {
    prop_oneof![Just(DeviceKind::Server), Just(DeviceKind::Switch)]
}

/// Generate an arbitrary device
fn device() -> impl Strategy<Value = Arc<Device>> {
    (device_kind(), "[a-z][a-z0-9]{0,7}", "[A-Z0-9]{1,6}")
        .prop_map(|(kind, name, serial)| Arc::new(Device::new(kind, name, serial)))
}

fn port() -> impl Strategy<Value = u32> {
    0u32..64
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Endpoint order does not matter
    ///
    /// Listing a cable from either end yields the same value.
    #[test]
    fn prop_connection_is_order_independent(
        a in device(),
        b in device(),
        p in port(),
        q in port(),
    ) {
        prop_assume!(!(a == b && p == q));

        let forward = Connection::new(a.clone(), p, b.clone(), q).unwrap();
        let reverse = Connection::new(b, q, a, p).unwrap();

        prop_assert_eq!(&forward, &reverse);

        let mut set = HashSet::new();
        set.insert(forward);
        prop_assert!(set.contains(&reverse), "Reverse cable must hash like the forward one");
    }

    /// Property: The smaller device name is stored first
    #[test]
    fn prop_first_endpoint_has_smaller_name(
        a in device(),
        b in device(),
        p in port(),
        q in port(),
    ) {
        prop_assume!(a.name() != b.name());

        let conn = Connection::new(a, p, b, q).unwrap();
        prop_assert!(conn.first().device.name() < conn.second().device.name());
    }

    /// Property: A port can never be cabled to itself
    #[test]
    fn prop_self_connection_rejected(a in device(), p in port()) {
        let result = Connection::new(a.clone(), p, a, p);
        let is_self_connection = matches!(result, Err(ValidationError::SelfConnection { .. }));
        prop_assert!(is_self_connection);
    }

    /// Property: Each end sees the other as its peer
    #[test]
    fn prop_peer_is_symmetric(
        a in device(),
        b in device(),
        p in port(),
        q in port(),
    ) {
        prop_assume!(!(a == b && p == q));

        let conn = Connection::new(a.clone(), p, b.clone(), q).unwrap();
        let from_a = conn.peer_of(&a, p).unwrap();
        prop_assert_eq!(&*from_a.device, &*b);
        prop_assert_eq!(from_a.port, q);

        let from_b = conn.peer_of(&b, q).unwrap();
        prop_assert_eq!(&*from_b.device, &*a);
        prop_assert_eq!(from_b.port, p);
    }
}
