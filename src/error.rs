//! Error taxonomy of the engine
//!
//! Every failure names the algorithm that was requested. Negative cycles are
//! not errors; they are reported inside successful responses.

use crate::request::Algorithm;
use algograph_algorithms::{AlgoError, NodeId, Weight};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed or inconsistent request data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Node list contains the same id twice
    #[error("Duplicate node id {0}")]
    DuplicateNode(NodeId),

    /// Node ids must be exactly 0..n
    #[error("Node id {id} is out of range; ids must be contiguous from 0 to {}", .count.saturating_sub(1))]
    NonContiguousNode { id: NodeId, count: usize },

    /// Edge endpoint not in the node set
    #[error("Edge {index} references unknown node {node}")]
    UnknownEdgeEndpoint { index: usize, node: NodeId },

    /// NaN or infinite weight
    #[error("Edge {index} has non-finite weight {weight}")]
    NonFiniteWeight { index: usize, weight: Weight },

    /// Path lengths could leave the f64 range
    #[error("Edge weights sum to {total} in magnitude, beyond the representable range")]
    WeightOverflow { total: Weight },

    /// Single-source algorithm called without a source
    #[error("Missing required source node")]
    MissingSource,

    #[error("Unknown source node {0}")]
    UnknownSource(NodeId),

    #[error("Unknown target node {0}")]
    UnknownTarget(NodeId),

    /// Request body could not be parsed
    #[error("Malformed request: {0}")]
    Malformed(String),
}

/// What went wrong
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    #[error("graph is disconnected: spanning tree reaches {reached} of {total} nodes")]
    Disconnected { reached: usize, total: usize },

    #[error("{what} limit exceeded: {actual} > {limit}")]
    ResourceLimit {
        what: &'static str,
        actual: usize,
        limit: usize,
    },
}

impl ErrorKind {
    /// Stable machine-readable tag
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput(_) => "invalid_input",
            ErrorKind::NegativeWeight { .. } => "negative_weight",
            ErrorKind::Disconnected { .. } => "disconnected",
            ErrorKind::ResourceLimit { .. } => "resource_limit",
        }
    }
}

impl From<AlgoError> for ErrorKind {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::SourceOutOfRange { node, .. } => {
                ErrorKind::InvalidInput(InputError::UnknownSource(node))
            }
            AlgoError::NegativeWeight { from, to, weight } => {
                ErrorKind::NegativeWeight { from, to, weight }
            }
        }
    }
}

/// A failed invocation
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{algorithm} failed: {kind}")]
pub struct EngineError {
    pub algorithm: Algorithm,
    pub kind: ErrorKind,
}

impl EngineError {
    pub fn new(algorithm: Algorithm, kind: impl Into<ErrorKind>) -> Self {
        Self {
            algorithm,
            kind: kind.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInput(_))
    }

    /// Wire representation
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind.to_string(),
            kind: self.code().to_string(),
            algorithm: Some(self.algorithm),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Failure body handed back to the serving layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
    /// Absent when the request was too malformed to name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<Algorithm>,
}

impl ErrorResponse {
    pub fn malformed(err: &serde_json::Error) -> Self {
        let kind = ErrorKind::from(InputError::Malformed(err.to_string()));
        Self {
            error: kind.to_string(),
            kind: kind.code().to_string(),
            algorithm: None,
        }
    }
}
