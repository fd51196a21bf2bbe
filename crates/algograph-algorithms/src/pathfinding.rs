//! Single-source shortest paths
//!
//! Dijkstra (non-negative weights) and Bellman-Ford (signed weights with
//! negative-cycle detection). Both traverse edges only in their stated direction.

use super::common::{GraphView, NodeId, Weight};
use super::error::{AlgoError, AlgoResult};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Shortest-path tree rooted at `source`
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    pub source: NodeId,
    /// `f64::INFINITY` for unreachable nodes, `f64::NEG_INFINITY` for nodes
    /// behind a negative cycle
    pub distances: Vec<Weight>,
    /// Previous hop on the best known path, `None` for the source and
    /// for nodes without a well-defined path
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut distances = vec![f64::INFINITY; node_count];
        if source < node_count {
            distances[source] = 0.0;
        }
        Self {
            source,
            distances,
            predecessors: vec![None; node_count],
        }
    }

    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(node).copied()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances.get(node).is_some_and(|d| d.is_finite())
    }

    /// Reconstruct the path `source -> .. -> target`.
    ///
    /// `None` when the target is unreachable or its distance is undefined.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut curr = target;
        while curr != self.source {
            curr = self.predecessors[curr]?;
            path.push(curr);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: Weight,
    node_idx: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap, lower id first on ties
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn check_source(view: &GraphView, source: NodeId) -> AlgoResult<()> {
    if source >= view.node_count {
        return Err(AlgoError::SourceOutOfRange {
            node: source,
            node_count: view.node_count,
        });
    }
    Ok(())
}

/// Dijkstra's Algorithm (Weighted Shortest Paths)
///
/// Rejects graphs containing any negative edge weight. On an empty graph the
/// result is empty whatever the source.
pub fn dijkstra(view: &GraphView, source: NodeId) -> AlgoResult<ShortestPaths> {
    if view.is_empty() {
        return Ok(ShortestPaths::new(0, source));
    }
    check_source(view, source)?;
    if let Some(edge) = view.first_negative_edge() {
        return Err(AlgoError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let mut result = ShortestPaths::new(view.node_count, source);
    let mut settled = vec![false; view.node_count];
    let mut heap = BinaryHeap::new();

    heap.push(State { cost: 0.0, node_idx: source });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if settled[node_idx] {
            continue;
        }
        settled[node_idx] = true;

        for (next_idx, weight) in view.out_edges(node_idx) {
            if settled[next_idx] {
                continue;
            }

            let next_cost = cost + weight;
            if next_cost < result.distances[next_idx] {
                result.distances[next_idx] = next_cost;
                result.predecessors[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    Ok(result)
}

/// Result of Bellman-Ford
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordResult {
    pub paths: ShortestPaths,
    /// A negative cycle is reachable from the source
    pub negative_cycle: bool,
    /// Nodes whose distance is unbounded below, ascending
    pub affected: Vec<NodeId>,
}

/// Bellman-Ford Algorithm (Signed Weighted Shortest Paths)
///
/// Nodes reachable from a negative cycle get a distance of `-inf` and no
/// predecessor instead of whatever the last relaxation left behind.
pub fn bellman_ford(view: &GraphView, source: NodeId) -> AlgoResult<BellmanFordResult> {
    if view.is_empty() {
        return Ok(BellmanFordResult {
            paths: ShortestPaths::new(0, source),
            negative_cycle: false,
            affected: Vec::new(),
        });
    }
    check_source(view, source)?;

    let n = view.node_count;
    let mut paths = ShortestPaths::new(n, source);

    for _ in 1..n {
        let mut updated = false;
        for edge in view.edges() {
            let from_dist = paths.distances[edge.from];
            if from_dist.is_infinite() {
                continue;
            }
            let candidate = from_dist + edge.weight;
            if candidate < paths.distances[edge.to] {
                paths.distances[edge.to] = candidate;
                paths.predecessors[edge.to] = Some(edge.from);
                updated = true;
            }
        }
        // Early termination if no updates
        if !updated {
            break;
        }
    }

    // V-th pass: any edge that still relaxes leads out of a negative cycle
    let mut affected = vec![false; n];
    let mut queue = VecDeque::new();
    for edge in view.edges() {
        let from_dist = paths.distances[edge.from];
        if from_dist.is_finite()
            && from_dist + edge.weight < paths.distances[edge.to]
            && !affected[edge.to]
        {
            affected[edge.to] = true;
            queue.push_back(edge.to);
        }
    }

    while let Some(u) = queue.pop_front() {
        for &v in view.successors(u) {
            if !affected[v] {
                affected[v] = true;
                queue.push_back(v);
            }
        }
    }

    let affected: Vec<NodeId> = (0..n).filter(|&v| affected[v]).collect();
    for &v in &affected {
        paths.distances[v] = f64::NEG_INFINITY;
        paths.predecessors[v] = None;
    }

    Ok(BellmanFordResult {
        negative_cycle: !affected.is_empty(),
        affected,
        paths,
    })
}
