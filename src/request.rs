//! Request side of the wire contract

use algograph_algorithms::{Edge, NodeId, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Prims,
    Kruskal,
}

impl Algorithm {
    /// Wire name, as accepted in the `algorithm` field
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman_ford",
            Algorithm::FloydWarshall => "floyd_warshall",
            Algorithm::Prims => "prims",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::FloydWarshall => "Floyd-Warshall",
            Algorithm::Prims => "Prim's",
            Algorithm::Kruskal => "Kruskal's",
        }
    }

    /// Single-source algorithms need a `source` in the request
    pub fn requires_source(&self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::BellmanFord)
    }

    /// Shortest-path algorithms follow edge direction; MST algorithms don't
    pub fn is_directed(&self) -> bool {
        !self.is_spanning_tree()
    }

    pub fn is_spanning_tree(&self) -> bool {
        matches!(self, Algorithm::Prims | Algorithm::Kruskal)
    }

    /// Whether negative edge weights are refused
    pub fn rejects_negative_weights(&self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Prims)
    }

    pub fn all() -> [Algorithm; 5] {
        [
            Algorithm::Dijkstra,
            Algorithm::BellmanFord,
            Algorithm::FloydWarshall,
            Algorithm::Prims,
            Algorithm::Kruskal,
        ]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Edge as supplied on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl From<EdgeSpec> for Edge {
    fn from(spec: EdgeSpec) -> Self {
        Edge::new(spec.from, spec.to, spec.weight)
    }
}

/// A single algorithm invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRequest {
    pub algorithm: Algorithm,
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    /// Required for dijkstra/bellman_ford; start node for prims/kruskal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<NodeId>,
    /// Optional path reconstruction target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,
}

impl AlgorithmRequest {
    /// Request over nodes `0..node_count` with no edges
    pub fn new(algorithm: Algorithm, node_count: usize) -> Self {
        Self {
            algorithm,
            nodes: (0..node_count).collect(),
            edges: Vec::new(),
            source: None,
            target: None,
        }
    }

    pub fn with_edge(mut self, from: NodeId, to: NodeId, weight: Weight) -> Self {
        self.edges.push(EdgeSpec { from, to, weight });
        self
    }

    pub fn with_edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, Weight)>,
    {
        self.edges
            .extend(edges.into_iter().map(|(from, to, weight)| EdgeSpec { from, to, weight }));
        self
    }

    pub fn with_source(mut self, source: NodeId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Same graph, different algorithm
    pub fn for_algorithm(&self, algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_wire_names() {
        for algorithm in Algorithm::all() {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.name()));
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algorithm);
        }
        assert!(serde_json::from_str::<Algorithm>("\"astar\"").is_err());
    }

    #[test]
    fn test_request_parsing() {
        let json = r#"{
            "algorithm": "dijkstra",
            "nodes": [0, 1, 2],
            "edges": [{"from": 0, "to": 1, "weight": 4}, {"from": 1, "to": 2, "weight": 1.5}],
            "source": 0
        }"#;
        let request: AlgorithmRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.algorithm, Algorithm::Dijkstra);
        assert_eq!(request.nodes, vec![0, 1, 2]);
        assert_eq!(request.edges[0], EdgeSpec { from: 0, to: 1, weight: 4.0 });
        assert_eq!(request.source, Some(0));
        assert_eq!(request.target, None);
    }

    #[test]
    fn test_algorithm_conventions() {
        assert!(Algorithm::Dijkstra.requires_source());
        assert!(!Algorithm::FloydWarshall.requires_source());
        assert!(Algorithm::FloydWarshall.is_directed());
        assert!(!Algorithm::Kruskal.is_directed());
        assert!(Algorithm::Prims.rejects_negative_weights());
        assert!(!Algorithm::Kruskal.rejects_negative_weights());
        assert_eq!(Algorithm::BellmanFord.to_string(), "Bellman-Ford");
    }
}
