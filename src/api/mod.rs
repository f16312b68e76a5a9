// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rack Topology HTTP API
//!
//! Read-only JSON views over the topology file. Every request reads and
//! validates the file again, so edits show up without a restart and two
//! concurrent requests never share state.
//!
//! Routes:
//! - `GET /` - banner
//! - `GET /rack/{rack_name}/mgmt` - serial of each device on the management switch, to its switch port
//! - `GET /rack/{rack_name}/conns` - per-port peers of managed servers and the rack's switches

pub mod error;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::domain::{Device, DeviceKind, Topology};
use crate::errors::TopologyError;
use crate::loader;

pub use error::ApiError;

/// Well-known name of the management switch
pub const MGMT_SWITCH: &str = "mgmt";

/// Banner served at `/`
pub const BANNER: &str = "This is the dc-check API server.  Call its APIs.";

/// Shared handler state: where the topology file lives
#[derive(Debug, Clone)]
pub struct AppState {
    db: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db: impl Into<PathBuf>) -> Self {
        Self {
            db: Arc::new(db.into()),
        }
    }

    pub fn db(&self) -> &std::path::Path {
        &self.db
    }

    async fn load_topology(&self) -> Result<Topology, ApiError> {
        let source = tokio::fs::read_to_string(self.db.as_path())
            .await
            .map_err(|source| TopologyError::Io {
                path: self.db.to_path_buf(),
                source,
            })?;
        Ok(loader::load(&source)?)
    }
}

/// Peer on the far side of a port
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerRef {
    pub serial_number: String,
    pub port: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortPeer {
    pub peer: PeerRef,
}

/// Device serial -> local port -> peer
pub type DevicePorts = BTreeMap<String, BTreeMap<String, PortPeer>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RackConnectivity {
    pub rack: String,
    pub servers: DevicePorts,
    pub switches: DevicePorts,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/rack/{rack_name}/mgmt", get(rack_mgmt))
        .route("/rack/{rack_name}/conns", get(rack_connectivity))
        .with_state(state)
}

/// Bind and serve until the listener fails
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, db = %config.db.display(), "dc-check API listening");

    axum::serve(listener, router(AppState::new(config.db.clone()))).await
}

pub async fn index() -> &'static str {
    BANNER
}

/// Devices plugged into the management switch: serial -> mgmt switch port
pub async fn rack_mgmt(
    State(state): State<AppState>,
    Path(rack_name): Path<String>,
) -> Result<Json<BTreeMap<String, u32>>, ApiError> {
    debug!(rack = %rack_name, "management switch query");
    let topology = state.load_topology().await?;
    topology.rack(&rack_name)?;

    let output = topology
        .find_connections(MGMT_SWITCH)?
        .into_iter()
        .map(|(port, peer)| (peer.device.serial().to_string(), port))
        .collect();

    Ok(Json(output))
}

/// Port map of every managed server and every switch in the rack
///
/// A server only shows up here if it is cabled to the management switch.
pub async fn rack_connectivity(
    State(state): State<AppState>,
    Path(rack_name): Path<String>,
) -> Result<Json<RackConnectivity>, ApiError> {
    debug!(rack = %rack_name, "connectivity query");
    let topology = state.load_topology().await?;

    let managed: Vec<Arc<Device>> = topology
        .find_connections(MGMT_SWITCH)?
        .into_values()
        .map(|peer| peer.device)
        .collect();

    let servers = port_map(&topology, managed.iter())?;
    let switches = port_map(
        &topology,
        topology.devices_in_rack_of_type(&rack_name, DeviceKind::Switch)?,
    )?;

    Ok(Json(RackConnectivity {
        rack: rack_name,
        servers,
        switches,
    }))
}

fn port_map<'a>(
    topology: &Topology,
    devices: impl Iterator<Item = &'a Arc<Device>>,
) -> Result<DevicePorts, TopologyError> {
    let mut out = DevicePorts::new();
    for device in devices {
        let ports = topology
            .find_connections(device.name())?
            .into_iter()
            .map(|(port, peer)| {
                let peer = PeerRef {
                    serial_number: peer.device.serial().to_string(),
                    port: peer.port.to_string(),
                };
                (port.to_string(), PortPeer { peer })
            })
            .collect();
        out.insert(device.serial().to_string(), ports);
    }
    Ok(out)
}
