//! Error types for topology loading and queries

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ValidationReport;

/// Errors that can occur while loading or querying a topology
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The topology file could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input does not match the declared document shape
    #[error("{0}")]
    Format(String),

    /// The document is well formed but breaks one or more invariants
    #[error("{0}")]
    Invalid(ValidationReport),

    /// Query for a device the topology does not contain
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    /// Query for a rack the topology does not contain
    #[error("Unknown rack: {0}")]
    UnknownRack(String),
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;

impl From<serde_yaml::Error> for TopologyError {
    fn from(err: serde_yaml::Error) -> Self {
        TopologyError::Format(err.to_string())
    }
}

impl From<ValidationReport> for TopologyError {
    fn from(report: ValidationReport) -> Self {
        TopologyError::Invalid(report)
    }
}

impl TopologyError {
    /// The collected validation problems, when this is a validation failure
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            TopologyError::Invalid(report) => Some(report),
            _ => None,
        }
    }

    /// Whether the caller supplied bad input (as opposed to an I/O failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TopologyError::Format(_) | TopologyError::Invalid(_))
    }
}
