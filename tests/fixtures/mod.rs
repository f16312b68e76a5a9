// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for dc-check
//!
//! Rack descriptions live in `tests/loader/<name>.yaml`. A file with
//! problems has a sibling `<name>.err` holding the exact validation report,
//! one problem per line. No `.err` file means the description is valid.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use dc_check::{read_topology_file, Topology};

/// Directory holding the loader fixtures
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("loader")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixture_dir().join(format!("{name}.yaml"))
}

/// Expected report for a fixture, empty when it should load cleanly
pub fn expected_errors(name: &str) -> String {
    let err_file = fixture_dir().join(format!("{name}.err"));
    if err_file.exists() {
        fs::read_to_string(err_file)
            .expect("Unreadable .err fixture")
            .trim()
            .to_string()
    } else {
        String::new()
    }
}

/// Source text of a fixture
pub fn fixture_source(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("Missing YAML fixture")
}

/// The reference topology: one rack, a management switch, a TOR and three servers
pub fn valid_topology() -> Topology {
    read_topology_file(fixture_path("valid")).expect("valid.yaml must load")
}
