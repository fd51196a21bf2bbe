//! Shared utilities for graph algorithms
//!
//! Provides a read-only, compact view of a weighted graph for algorithm execution.

/// Node identifier. Nodes are dense, 0-indexed and contiguous.
pub type NodeId = usize;

/// Edge weight.
pub type Weight = f64;

/// A weighted edge as supplied by the caller.
///
/// Direction is meaningful only to the shortest-path algorithms; the
/// spanning-tree algorithms read it as an undirected connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((from, to, weight): (NodeId, NodeId, Weight)) -> Self {
        Self { from, to, weight }
    }
}

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Both directions are materialized so that the undirected algorithms can
/// walk every edge incident to a node without scanning other rows.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<NodeId>,
    /// Edge weights, aligned with `out_targets`
    pub out_weights: Vec<Weight>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<NodeId>,
    /// Edge weights, aligned with `in_sources`
    pub in_weights: Vec<Weight>,

    /// Edges in caller order
    edges: Vec<Edge>,
}

impl GraphView {
    /// Build a view over `node_count` nodes in O(V + E).
    ///
    /// Every endpoint must be `< node_count`; callers validate input first.
    /// Within a row, edges keep their relative input order.
    pub fn from_edges(node_count: usize, edges: &[Edge]) -> Self {
        let mut out_offsets = vec![0usize; node_count + 1];
        let mut in_offsets = vec![0usize; node_count + 1];

        for edge in edges {
            out_offsets[edge.from + 1] += 1;
            in_offsets[edge.to + 1] += 1;
        }
        for i in 0..node_count {
            out_offsets[i + 1] += out_offsets[i];
            in_offsets[i + 1] += in_offsets[i];
        }

        let m = edges.len();
        let mut out_targets = vec![0; m];
        let mut out_weights = vec![0.0; m];
        let mut in_sources = vec![0; m];
        let mut in_weights = vec![0.0; m];

        // Fill cursors start at each row's offset
        let mut out_cursor = out_offsets[..node_count].to_vec();
        let mut in_cursor = in_offsets[..node_count].to_vec();

        for edge in edges {
            let slot = out_cursor[edge.from];
            out_targets[slot] = edge.to;
            out_weights[slot] = edge.weight;
            out_cursor[edge.from] += 1;

            let slot = in_cursor[edge.to];
            in_sources[slot] = edge.from;
            in_weights[slot] = edge.weight;
            in_cursor[edge.to] += 1;
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            out_weights,
            in_offsets,
            in_sources,
            in_weights,
            edges: edges.to_vec(),
        }
    }

    /// Helper to create a GraphView from `(from, to, weight)` triples (test support)
    pub fn from_triples(node_count: usize, triples: &[(NodeId, NodeId, Weight)]) -> Self {
        let edges: Vec<Edge> = triples.iter().copied().map(Edge::from).collect();
        Self::from_edges(node_count, &edges)
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: NodeId) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: NodeId) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeId) -> &[NodeId] {
        &self.out_targets[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Get weights for outgoing edges of a node
    pub fn out_weights(&self, idx: NodeId) -> &[Weight] {
        &self.out_weights[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: NodeId) -> &[NodeId] {
        &self.in_sources[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Get weights for incoming edges of a node
    pub fn in_weights(&self, idx: NodeId) -> &[Weight] {
        &self.in_weights[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Outgoing `(target, weight)` pairs of a node
    pub fn out_edges(&self, idx: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.successors(idx)
            .iter()
            .copied()
            .zip(self.out_weights(idx).iter().copied())
    }

    /// Every `(neighbor, weight)` pair touching a node, ignoring direction.
    ///
    /// A self-loop shows up twice (once per direction).
    pub fn incident_edges(&self, idx: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        let incoming = self
            .predecessors(idx)
            .iter()
            .copied()
            .zip(self.in_weights(idx).iter().copied());
        self.out_edges(idx).chain(incoming)
    }

    /// All edges in caller order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First edge with a negative weight, if any
    pub fn first_negative_edge(&self) -> Option<Edge> {
        self.edges.iter().find(|e| e.weight < 0.0).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_layout() {
        // 0->1 (4), 0->2 (1), 2->1 (2), 1->3 (1)
        let view = GraphView::from_triples(4, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0)]);

        assert_eq!(view.node_count, 4);
        assert_eq!(view.edge_count(), 4);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.out_weights(0), &[4.0, 1.0]);
        assert_eq!(view.predecessors(1), &[0, 2]);
        assert_eq!(view.in_weights(1), &[4.0, 2.0]);
        assert_eq!(view.out_degree(3), 0);
        assert_eq!(view.in_degree(3), 1);
    }

    #[test]
    fn test_incident_edges_ignore_direction() {
        let view = GraphView::from_triples(3, &[(0, 1, 5.0), (2, 0, 7.0)]);
        let mut incident: Vec<_> = view.incident_edges(0).collect();
        incident.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(incident, vec![(1, 5.0), (2, 7.0)]);
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::from_edges(0, &[]);
        assert!(view.is_empty());
        assert_eq!(view.out_offsets, vec![0]);
        assert_eq!(view.edge_count(), 0);
    }

    #[test]
    fn test_first_negative_edge() {
        let view = GraphView::from_triples(3, &[(0, 1, 1.0), (1, 2, -3.0), (2, 0, -1.0)]);
        assert_eq!(view.first_negative_edge(), Some(Edge::new(1, 2, -3.0)));
    }
}
