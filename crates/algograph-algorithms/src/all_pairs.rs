//! All-pairs shortest paths
//!
//! Floyd-Warshall over a dense distance matrix. O(V^3) time and O(V^2)
//! memory, so only suitable for small and medium graphs.

use super::common::{GraphView, NodeId, Weight};
use ndarray::Array2;

/// Result of Floyd-Warshall
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult {
    /// `distances[[i, j]]`: `+inf` when j is unreachable from i, `-inf` when
    /// a negative cycle lies on some i -> j path
    pub distances: Array2<Weight>,
    /// First hop after `i` on the best `i -> j` path
    pub next: Array2<Option<NodeId>>,
    pub negative_cycle: bool,
    /// Nodes lying on a negative cycle, ascending
    pub cycle_nodes: Vec<NodeId>,
}

impl AllPairsResult {
    pub fn node_count(&self) -> usize {
        self.distances.nrows()
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.distances.get((from, to)).copied()
    }

    /// Reconstruct the path `from -> .. -> to` from the next-hop matrix.
    pub fn path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(from, to)?.is_finite() {
            return None;
        }
        if from == to {
            return Some(vec![from]);
        }

        let mut path = vec![from];
        let mut curr = from;
        while curr != to {
            curr = self.next[[curr, to]]?;
            path.push(curr);
            if path.len() > self.node_count() {
                return None;
            }
        }
        Some(path)
    }
}

/// Floyd-Warshall Algorithm (All-Pairs Shortest Paths)
///
/// Directed. Parallel edges keep their lightest weight; a negative
/// self-loop counts as a negative cycle.
pub fn floyd_warshall(view: &GraphView) -> AllPairsResult {
    let n = view.node_count;
    let mut dist = Array2::from_elem((n, n), f64::INFINITY);
    let mut next: Array2<Option<NodeId>> = Array2::from_elem((n, n), None);

    for i in 0..n {
        dist[[i, i]] = 0.0;
    }
    for edge in view.edges() {
        let (i, j) = (edge.from, edge.to);
        if edge.weight < dist[[i, j]] {
            dist[[i, j]] = edge.weight;
            next[[i, j]] = Some(j);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[[i, k]];
            if d_ik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let candidate = d_ik + dist[[k, j]];
                if candidate < dist[[i, j]] {
                    dist[[i, j]] = candidate;
                    next[[i, j]] = next[[i, k]];
                }
            }
        }
    }

    let cycle_nodes: Vec<NodeId> = (0..n).filter(|&k| dist[[k, k]] < 0.0).collect();

    // Any pair routed through a cycle node has no shortest path
    if !cycle_nodes.is_empty() {
        let mut undefined = Array2::from_elem((n, n), false);
        for &k in &cycle_nodes {
            for i in (0..n).filter(|&i| dist[[i, k]] < f64::INFINITY) {
                for j in (0..n).filter(|&j| dist[[k, j]] < f64::INFINITY) {
                    undefined[[i, j]] = true;
                }
            }
        }
        for ((idx, d), hop) in dist.indexed_iter_mut().zip(next.iter_mut()) {
            if undefined[idx] {
                *d = f64::NEG_INFINITY;
                *hop = None;
            }
        }
    }

    AllPairsResult {
        distances: dist,
        next,
        negative_cycle: !cycle_nodes.is_empty(),
        cycle_nodes,
    }
}
