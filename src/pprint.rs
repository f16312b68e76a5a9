// Copyright (c) 2025 - Cowboy AI, Inc.
//! Human-readable connection dump
//!
//! ```text
//!  - rack r1
//!     - slot 1: device mgmt
//!       port 3 to device web1 port 0
//!     - slot 2: device web1
//!       port 0 to device mgmt port 3
//! ```

use std::path::Path;
use std::process::ExitCode;

use crate::domain::{Rack, Topology};
use crate::errors::TopologyResult;
use crate::loader::read_topology_file;

/// What `dc-check` prints for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutput {
    pub valid: bool,
    pub text: String,
}

impl CheckOutput {
    pub fn exit_code(&self) -> ExitCode {
        if self.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Load a rack description and render either its cabling or its problems
///
/// Bad input is part of the output; only an unreadable file is an error.
pub fn check_file(path: &Path) -> TopologyResult<CheckOutput> {
    match read_topology_file(path) {
        Ok(topology) => Ok(CheckOutput {
            valid: true,
            text: format!(
                "{}: connections by device:\n{}",
                path.display(),
                render_connections_by_rack(&topology)?
            ),
        }),
        Err(err) if err.is_invalid_input() => Ok(CheckOutput {
            valid: false,
            text: format!("Not valid:\n{err}\n"),
        }),
        Err(err) => Err(err),
    }
}

/// Every rack in declaration order, devices by slot, ports ascending
pub fn render_connections_by_rack(topology: &Topology) -> TopologyResult<String> {
    let mut lines = Vec::new();
    for (name, rack) in topology.racks() {
        lines.push(format!(" - rack {name}"));
        render_connections_by_device(topology, rack, &mut lines)?;
    }
    Ok(join_lines(lines))
}

fn render_connections_by_device(
    topology: &Topology,
    rack: &Rack,
    lines: &mut Vec<String>,
) -> TopologyResult<()> {
    for (slot, device) in rack.slots() {
        lines.push(format!("    - slot {slot}: device {}", device.name()));
        for (port, peer) in topology.find_connections(device.name())? {
            lines.push(format!(
                "      port {port} to device {} port {}",
                peer.device.name(),
                peer.port
            ));
        }
    }
    Ok(())
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
