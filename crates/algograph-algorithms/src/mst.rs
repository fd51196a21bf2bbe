//! Minimum Spanning Tree algorithms
//!
//! Implements Prim's and Kruskal's algorithm. Both treat every edge as
//! undirected and, on a disconnected graph, return the tree spanning the
//! component that contains the start node.

use super::common::{GraphView, NodeId, Weight};
use super::error::{AlgoError, AlgoResult};
use super::union_find::UnionFind;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, PartialEq)]
pub struct MSTResult {
    pub total_weight: Weight,
    pub edges: Vec<(NodeId, NodeId, Weight)>, // (source, target, weight)
    /// Whether the tree spans every node of the graph
    pub connected: bool,
    /// Number of nodes covered by the tree
    pub component_size: usize,
}

impl MSTResult {
    fn empty() -> Self {
        MSTResult {
            total_weight: 0.0,
            edges: Vec::new(),
            connected: true,
            component_size: 0,
        }
    }
}

#[derive(Copy, Clone, PartialEq)]
struct EdgeState {
    weight: Weight,
    source: NodeId,
    target: NodeId,
}

impl Eq for EdgeState {}

impl Ord for EdgeState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap; ties go to the lower target, then lower source
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.target.cmp(&self.target))
            .then_with(|| other.source.cmp(&self.source))
    }
}

impl PartialOrd for EdgeState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn check_start(view: &GraphView, start: NodeId) -> AlgoResult<()> {
    if start >= view.node_count {
        return Err(AlgoError::SourceOutOfRange {
            node: start,
            node_count: view.node_count,
        });
    }
    Ok(())
}

/// Prim's Algorithm for Minimum Spanning Tree
///
/// Grows the tree from `start` through a frontier heap of crossing edges.
/// Negative weights are rejected.
pub fn prim_mst(view: &GraphView, start: NodeId) -> AlgoResult<MSTResult> {
    if view.is_empty() {
        return Ok(MSTResult::empty());
    }
    check_start(view, start)?;
    if let Some(edge) = view.first_negative_edge() {
        return Err(AlgoError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let mut visited = vec![false; view.node_count];
    let mut heap = BinaryHeap::new();
    let mut mst_edges = Vec::with_capacity(view.node_count - 1);
    let mut total_weight = 0.0;

    visited[start] = true;
    add_edges(view, start, &mut heap, &visited);

    while let Some(EdgeState { weight, source, target }) = heap.pop() {
        if visited[target] {
            continue;
        }

        visited[target] = true;
        mst_edges.push((source, target, weight));
        total_weight += weight;

        if mst_edges.len() + 1 == view.node_count {
            break;
        }
        add_edges(view, target, &mut heap, &visited);
    }

    let component_size = mst_edges.len() + 1;
    Ok(MSTResult {
        total_weight,
        edges: mst_edges,
        connected: component_size == view.node_count,
        component_size,
    })
}

fn add_edges(view: &GraphView, u: NodeId, heap: &mut BinaryHeap<EdgeState>, visited: &[bool]) {
    for (v, weight) in view.incident_edges(u) {
        if !visited[v] {
            heap.push(EdgeState { weight, source: u, target: v });
        }
    }
}

/// Kruskal's Algorithm for Minimum Spanning Tree
///
/// Sorts edges by weight (stable, so equal weights keep caller order) and
/// merges components with union-find. Signed weights are accepted.
pub fn kruskal_mst(view: &GraphView, start: NodeId) -> AlgoResult<MSTResult> {
    if view.is_empty() {
        return Ok(MSTResult::empty());
    }
    check_start(view, start)?;

    let n = view.node_count;
    let mut sorted: Vec<_> = view.edges().iter().filter(|e| !e.is_self_loop()).collect();
    sorted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut uf = UnionFind::new(n);
    let mut forest = Vec::with_capacity(n - 1);

    for edge in sorted {
        if uf.union(edge.from, edge.to) {
            forest.push((edge.from, edge.to, edge.weight));
            if forest.len() + 1 == n {
                break;
            }
        }
    }

    if forest.len() + 1 == n {
        let total_weight = forest.iter().map(|&(_, _, w)| w).sum();
        return Ok(MSTResult {
            total_weight,
            edges: forest,
            connected: true,
            component_size: n,
        });
    }

    // Spanning forest: keep only the tree of the start node's component
    let root = uf.find(start);
    let component_size = (0..n).filter(|&v| uf.find(v) == root).count();
    let edges: Vec<_> = forest
        .into_iter()
        .filter(|&(u, _, _)| uf.find(u) == root)
        .collect();
    let total_weight = edges.iter().map(|&(_, _, w)| w).sum();

    Ok(MSTResult {
        total_weight,
        edges,
        connected: false,
        component_size,
    })
}
