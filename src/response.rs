//! Response side of the wire contract

use crate::request::Algorithm;
use algograph_algorithms::{AllPairsResult, BellmanFordResult, MSTResult, NodeId, ShortestPaths, Weight};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A shortest distance as it appears on the wire.
///
/// Finite distances are numbers, unreachable nodes are `null`, and distances
/// made undefined by a negative cycle are the string `"-Infinity"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
    Unbounded,
}

impl Distance {
    pub fn as_f64(&self) -> Weight {
        match self {
            Distance::Finite(d) => *d,
            Distance::Unreachable => f64::INFINITY,
            Distance::Unbounded => f64::NEG_INFINITY,
        }
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<Weight> for Distance {
    fn from(d: Weight) -> Self {
        if d.is_finite() {
            Distance::Finite(d)
        } else if d == f64::NEG_INFINITY {
            Distance::Unbounded
        } else {
            Distance::Unreachable
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_f64(*d),
            Distance::Unreachable => serializer.serialize_none(),
            Distance::Unbounded => serializer.serialize_str("-Infinity"),
        }
    }
}

/// Dijkstra / Bellman-Ford payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPathsPayload {
    pub source: NodeId,
    pub distances: IndexMap<NodeId, Distance>,
    pub previous: IndexMap<NodeId, Option<NodeId>>,
    /// Present when a target was requested and is reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
    /// Bellman-Ford only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<bool>,
    /// Bellman-Ford only: nodes whose distance is unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle_nodes: Option<Vec<NodeId>>,
}

impl ShortestPathsPayload {
    pub fn from_paths(paths: &ShortestPaths, target: Option<NodeId>) -> Self {
        let distances = paths
            .distances
            .iter()
            .enumerate()
            .map(|(node, &d)| (node, Distance::from(d)))
            .collect();
        let previous = paths.predecessors.iter().copied().enumerate().collect();

        Self {
            source: paths.source,
            distances,
            previous,
            path: target.and_then(|t| paths.path_to(t)),
            negative_cycle: None,
            negative_cycle_nodes: None,
        }
    }

    pub fn from_bellman_ford(result: &BellmanFordResult, target: Option<NodeId>) -> Self {
        Self {
            negative_cycle: Some(result.negative_cycle),
            negative_cycle_nodes: Some(result.affected.clone()),
            ..Self::from_paths(&result.paths, target)
        }
    }
}

/// Floyd-Warshall payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllPairsPayload {
    pub nodes: Vec<NodeId>,
    pub distances: Vec<Vec<Distance>>,
    pub negative_cycle: bool,
    /// Nodes lying on a negative cycle
    pub negative_cycle_nodes: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
}

impl AllPairsPayload {
    /// `endpoints` is the optional `(source, target)` pair to reconstruct
    pub fn from_result(result: &AllPairsResult, endpoints: Option<(NodeId, NodeId)>) -> Self {
        let distances = result
            .distances
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&d| Distance::from(d)).collect())
            .collect();

        Self {
            nodes: (0..result.node_count()).collect(),
            distances,
            negative_cycle: result.negative_cycle,
            negative_cycle_nodes: result.cycle_nodes.clone(),
            path: endpoints.and_then(|(from, to)| result.path(from, to)),
        }
    }
}

/// Prim's / Kruskal's payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanningTreePayload {
    /// `[from, to, weight]` triples
    pub mst: Vec<(NodeId, NodeId, Weight)>,
    pub total_weight: Weight,
    pub connected: bool,
    pub component_size: usize,
}

impl From<MSTResult> for SpanningTreePayload {
    fn from(result: MSTResult) -> Self {
        Self {
            mst: result.edges,
            total_weight: result.total_weight,
            connected: result.connected,
            component_size: result.component_size,
        }
    }
}

/// Algorithm-specific part of a response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    ShortestPaths(ShortestPathsPayload),
    AllPairs(AllPairsPayload),
    SpanningTree(SpanningTreePayload),
}

/// Successful invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResponse {
    pub algorithm: Algorithm,
    pub node_count: usize,
    pub edge_count: usize,
    /// Wall-clock milliseconds spent inside the algorithm
    pub execution_time: f64,
    #[serde(flatten)]
    pub payload: Payload,
}

impl AlgorithmResponse {
    pub fn shortest_paths(&self) -> Option<&ShortestPathsPayload> {
        match &self.payload {
            Payload::ShortestPaths(p) => Some(p),
            _ => None,
        }
    }

    pub fn all_pairs(&self) -> Option<&AllPairsPayload> {
        match &self.payload {
            Payload::AllPairs(p) => Some(p),
            _ => None,
        }
    }

    pub fn spanning_tree(&self) -> Option<&SpanningTreePayload> {
        match &self.payload {
            Payload::SpanningTree(p) => Some(p),
            _ => None,
        }
    }

    /// Whether a negative cycle was reported
    pub fn has_negative_cycle(&self) -> bool {
        match &self.payload {
            Payload::ShortestPaths(p) => p.negative_cycle.unwrap_or(false),
            Payload::AllPairs(p) => p.negative_cycle,
            Payload::SpanningTree(_) => false,
        }
    }
}
