//! Error taxonomy shared by every entry point.
//!
//! - `InvalidConfig`: rejected before any computation (bad quantiles, bad
//!   percentages, unknown measure names, mismatched graphs).
//! - `UnknownVertex`: an external id that is not present in the graph.
//! - `InvalidGraph`: a structural mutation that would break graph invariants.
//!
//! Unreachable POI pairs and fewer than two POIs are not errors; they are
//! reported through counts and empty results.

use std::fmt;

use crate::graph::VertexId;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    InvalidConfig { reason: String },
    UnknownVertex(VertexId),
    InvalidGraph { reason: String },
}

impl Error {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn graph(reason: impl Into<String>) -> Self {
        Self::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// True for the configuration-error kind.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
            Self::UnknownVertex(id) => write!(f, "unknown vertex id {}", id.0),
            Self::InvalidGraph { reason } => write!(f, "invalid graph: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
