// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cable Connection Value Object
//!
//! A connection is an unordered edge between two `(device, port)` endpoints.
//! It is stored in canonical form: the endpoint with the lexicographically
//! smaller device name comes first, with the port number breaking ties. The
//! ordering is fixed at construction, so equality and hashing can compare
//! fields directly and `A:1 -> B:2` equals `B:2 -> A:1`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::invariants::ValidationError;
use super::Device;

/// Port number on a device
pub type Port = u32;

/// One end of a cable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub device: Arc<Device>,
    pub port: Port,
}

impl Endpoint {
    pub fn new(device: Arc<Device>, port: Port) -> Self {
        Self { device, port }
    }

    fn canonical_cmp(&self, other: &Self) -> Ordering {
        (self.device.name(), self.port, &*self.device).cmp(&(
            other.device.name(),
            other.port,
            &*other.device,
        ))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:port#{}", self.device, self.port)
    }
}

/// Canonical cable between two endpoints
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use dc_check::domain::{Connection, Device};
///
/// let mgmt = Arc::new(Device::switch("mgmt", "M1"));
/// let web = Arc::new(Device::server("web1", "X1"));
///
/// let a = Connection::new(web.clone(), 0, mgmt.clone(), 3).unwrap();
/// let b = Connection::new(mgmt.clone(), 3, web.clone(), 0).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.first().device.name(), "mgmt");
///
/// assert!(Connection::new(web.clone(), 1, web, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    first: Endpoint,
    second: Endpoint,
}

impl Connection {
    /// Create a canonical connection
    ///
    /// # Invariants
    /// - The two endpoints differ
    /// - `first` sorts before `second` by `(device name, port)`
    pub fn new(
        device_a: Arc<Device>,
        port_a: Port,
        device_b: Arc<Device>,
        port_b: Port,
    ) -> Result<Self, ValidationError> {
        let a = Endpoint::new(device_a, port_a);
        let b = Endpoint::new(device_b, port_b);

        if a == b {
            return Err(ValidationError::SelfConnection {
                device: a.device.name().to_string(),
                port: a.port,
            });
        }

        let (first, second) = match a.canonical_cmp(&b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };

        Ok(Self { first, second })
    }

    /// Endpoint with the smaller device name
    pub fn first(&self) -> &Endpoint {
        &self.first
    }

    /// Endpoint with the larger device name
    pub fn second(&self) -> &Endpoint {
        &self.second
    }

    /// Whether either end is plugged into `device`
    pub fn touches(&self, device: &Device) -> bool {
        *self.first.device == *device || *self.second.device == *device
    }

    /// Far end as seen from `(device, port)`, if this cable is attached there
    pub fn peer_of(&self, device: &Device, port: Port) -> Option<&Endpoint> {
        if *self.first.device == *device && self.first.port == port {
            Some(&self.second)
        } else if *self.second.device == *device && self.second.port == port {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Both endpoints, canonical order
    pub fn endpoints(&self) -> [&Endpoint; 2] {
        [&self.first, &self.second]
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dev(name: &str) -> Arc<Device> {
        Arc::new(Device::server(name, format!("SN-{name}")))
    }

    #[test]
    fn test_canonical_order_by_name() {
        let conn = Connection::new(dev("zeta"), 1, dev("alpha"), 9).unwrap();
        assert_eq!(conn.first().device.name(), "alpha");
        assert_eq!(conn.first().port, 9);
        assert_eq!(conn.second().device.name(), "zeta");
        assert_eq!(conn.second().port, 1);
    }

    #[test]
    fn test_loopback_ordered_by_port() {
        let web = dev("web1");
        let conn = Connection::new(web.clone(), 5, web.clone(), 2).unwrap();
        assert_eq!(conn.first().port, 2);
        assert_eq!(conn.second().port, 5);
    }

    #[test]
    fn test_reverse_is_duplicate_in_set() {
        let a = dev("a");
        let b = dev("b");
        let mut set = HashSet::new();
        assert!(set.insert(Connection::new(a.clone(), 1, b.clone(), 2).unwrap()));
        assert!(!set.insert(Connection::new(b, 2, a, 1).unwrap()));
    }

    #[test]
    fn test_self_connection_rejected() {
        let a = dev("a");
        let err = Connection::new(a.clone(), 4, a, 4).unwrap_err();
        assert!(matches!(err, ValidationError::SelfConnection { port: 4, .. }));
    }

    #[test]
    fn test_peer_of() {
        let a = dev("a");
        let b = dev("b");
        let conn = Connection::new(b.clone(), 7, a.clone(), 3).unwrap();
        assert_eq!(conn.peer_of(&a, 3).map(|e| e.port), Some(7));
        assert_eq!(conn.peer_of(&b, 7).map(|e| e.device.name()), Some("a"));
        assert!(conn.peer_of(&a, 7).is_none());
        assert!(conn.touches(&b));
        assert!(!conn.touches(&dev("c")));
    }

    #[test]
    fn test_display() {
        let conn = Connection::new(dev("b"), 2, dev("a"), 1).unwrap();
        assert_eq!(conn.to_string(), "Server-a#SN-a:port#1 to Server-b#SN-b:port#2");
    }
}
