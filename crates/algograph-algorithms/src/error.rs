//! Error types for algorithm preconditions

use crate::common::{NodeId, Weight};
use thiserror::Error;

/// Precondition failures detected by an algorithm before it runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    /// Source or start node is not part of the graph
    #[error("Node {node} is out of range (graph has {node_count} nodes)")]
    SourceOutOfRange { node: NodeId, node_count: usize },

    /// Algorithm requires non-negative weights
    #[error("Negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
}

pub type AlgoResult<T> = Result<T, AlgoError>;
