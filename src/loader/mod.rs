// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rack Description Loader
//!
//! Turns a YAML rack description into a validated [`Topology`]:
//!
//! - Shape problems fail fast with [`TopologyError::Format`]
//! - Every other problem is collected into one [`TopologyError::Invalid`]
//!   report
//!
//! Loading is a pure function of the input text. Callers that want fresh
//! data reload; nothing is cached between calls.

pub mod build;
pub mod document;

use std::path::Path;

use tracing::debug;

pub use build::load_document;
pub use document::{CableRow, TopologyDocument, Version};

use crate::domain::Topology;
use crate::errors::{TopologyError, TopologyResult};

/// Parse, shape-check and validate a rack description
pub fn load(source: &str) -> TopologyResult<Topology> {
    let doc = TopologyDocument::from_yaml(source)?;
    load_document(doc)
}

/// Read a rack description file and validate it
pub fn read_topology_file(path: impl AsRef<Path>) -> TopologyResult<Topology> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading topology file");

    let source = std::fs::read_to_string(path).map_err(|source| TopologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load(&source)
}
