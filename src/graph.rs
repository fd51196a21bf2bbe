//! Request validation and graph construction
//!
//! Everything a request can get wrong is caught here, before any algorithm
//! runs. The result is a `GraphView` the algorithms can trust.

use crate::config::{EdgePolicy, EngineConfig};
use crate::error::{ErrorKind, InputError};
use crate::request::{Algorithm, AlgorithmRequest};
use algograph_algorithms::{Edge, GraphView, NodeId};
use tracing::warn;

/// A validated graph ready for execution
#[derive(Debug)]
pub struct PreparedGraph {
    pub view: GraphView,
    /// Edges discarded under `EdgePolicy::Drop`
    pub dropped_edges: usize,
}

impl PreparedGraph {
    pub fn node_count(&self) -> usize {
        self.view.node_count
    }
}

/// Validate a request against the config and build its graph view.
pub fn prepare(request: &AlgorithmRequest, config: &EngineConfig) -> Result<PreparedGraph, ErrorKind> {
    let algorithm = request.algorithm;
    let n = request.nodes.len();

    check_limits(request, config)?;
    check_node_set(&request.nodes)?;
    check_endpoints(request)?;

    let mut edges = Vec::with_capacity(request.edges.len());
    let mut dropped_edges = 0;
    for (index, spec) in request.edges.iter().enumerate() {
        if !spec.weight.is_finite() {
            return Err(InputError::NonFiniteWeight { index, weight: spec.weight }.into());
        }

        let unknown = [spec.from, spec.to].into_iter().find(|&node| node >= n);
        match (unknown, config.edge_policy) {
            (None, _) => edges.push(Edge::from(*spec)),
            (Some(node), EdgePolicy::Reject) => {
                return Err(InputError::UnknownEdgeEndpoint { index, node }.into());
            }
            (Some(node), EdgePolicy::Drop) => {
                warn!("{}: dropping edge {} with unknown node {}", algorithm, index, node);
                dropped_edges += 1;
            }
        }
    }

    // Bounds every path length and every tree total
    let total: f64 = edges.iter().map(|e| e.weight.abs()).sum();
    if !total.is_finite() {
        return Err(InputError::WeightOverflow { total }.into());
    }

    if algorithm == Algorithm::FloydWarshall && n > config.floyd_warshall_warn_nodes {
        warn!(
            "Floyd-Warshall on {} nodes allocates {} matrix cells",
            n,
            n.saturating_mul(n)
        );
    }

    Ok(PreparedGraph {
        view: GraphView::from_edges(n, &edges),
        dropped_edges,
    })
}

fn check_limits(request: &AlgorithmRequest, config: &EngineConfig) -> Result<(), ErrorKind> {
    let n = request.nodes.len();
    let m = request.edges.len();

    let limits = [
        ("node", n, config.max_nodes),
        ("edge", m, config.max_edges),
        (
            "Floyd-Warshall node",
            n,
            config
                .floyd_warshall_max_nodes
                .filter(|_| request.algorithm == Algorithm::FloydWarshall),
        ),
    ];

    for (what, actual, limit) in limits {
        if let Some(limit) = limit {
            if actual > limit {
                return Err(ErrorKind::ResourceLimit { what, actual, limit });
            }
        }
    }
    Ok(())
}

/// Node ids must be exactly `0..n`, in any order.
fn check_node_set(nodes: &[NodeId]) -> Result<(), InputError> {
    let count = nodes.len();
    let mut seen = vec![false; count];
    for &id in nodes {
        if id >= count {
            return Err(InputError::NonContiguousNode { id, count });
        }
        if seen[id] {
            return Err(InputError::DuplicateNode(id));
        }
        seen[id] = true;
    }
    Ok(())
}

/// Source and target checks. An empty graph accepts any node so that every
/// algorithm can return its trivial result.
fn check_endpoints(request: &AlgorithmRequest) -> Result<(), InputError> {
    let n = request.nodes.len();
    let algorithm = request.algorithm;

    if algorithm.requires_source() && request.source.is_none() {
        return Err(InputError::MissingSource);
    }
    // Floyd-Warshall reconstructs a path only between an explicit pair
    if algorithm == Algorithm::FloydWarshall
        && request.target.is_some()
        && request.source.is_none()
    {
        return Err(InputError::MissingSource);
    }
    if n == 0 {
        return Ok(());
    }
    if let Some(source) = request.source.filter(|&s| s >= n) {
        return Err(InputError::UnknownSource(source));
    }
    if let Some(target) = request.target.filter(|&t| t >= n) {
        return Err(InputError::UnknownTarget(target));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(algorithm: Algorithm) -> AlgorithmRequest {
        AlgorithmRequest::new(algorithm, 3)
            .with_edge(0, 1, 1.0)
            .with_edge(1, 2, 2.0)
    }

    #[test]
    fn test_prepare_builds_view() {
        let prepared = prepare(&request(Algorithm::Kruskal), &EngineConfig::default()).unwrap();
        assert_eq!(prepared.node_count(), 3);
        assert_eq!(prepared.view.edge_count(), 2);
        assert_eq!(prepared.dropped_edges, 0);
    }

    #[test]
    fn test_node_set_must_be_contiguous() {
        let mut req = request(Algorithm::Kruskal);
        req.nodes = vec![0, 1, 5];
        assert_eq!(
            prepare(&req, &EngineConfig::default()).unwrap_err(),
            ErrorKind::InvalidInput(InputError::NonContiguousNode { id: 5, count: 3 })
        );

        req.nodes = vec![2, 0, 0];
        assert_eq!(
            prepare(&req, &EngineConfig::default()).unwrap_err(),
            ErrorKind::InvalidInput(InputError::DuplicateNode(0))
        );

        req.nodes = vec![2, 0, 1];
        assert!(prepare(&req, &EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_endpoint_policies() {
        let req = request(Algorithm::Kruskal).with_edge(1, 7, 1.0);

        let err = prepare(&req, &EngineConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ErrorKind::InvalidInput(InputError::UnknownEdgeEndpoint { index: 2, node: 7 })
        );

        let config = EngineConfig {
            edge_policy: EdgePolicy::Drop,
            ..EngineConfig::default()
        };
        let prepared = prepare(&req, &config).unwrap();
        assert_eq!(prepared.dropped_edges, 1);
        assert_eq!(prepared.view.edge_count(), 2);
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let req = request(Algorithm::BellmanFord)
            .with_source(0)
            .with_edge(0, 2, f64::NAN);
        assert!(matches!(
            prepare(&req, &EngineConfig::default()),
            Err(ErrorKind::InvalidInput(InputError::NonFiniteWeight { index: 2, .. }))
        ));
    }

    #[test]
    fn test_source_checks() {
        let config = EngineConfig::default();

        let missing = request(Algorithm::Dijkstra);
        assert_eq!(
            prepare(&missing, &config).unwrap_err(),
            ErrorKind::InvalidInput(InputError::MissingSource)
        );

        let unknown = request(Algorithm::Dijkstra).with_source(3);
        assert_eq!(
            prepare(&unknown, &config).unwrap_err(),
            ErrorKind::InvalidInput(InputError::UnknownSource(3))
        );

        let bad_target = request(Algorithm::Dijkstra).with_source(0).with_target(10);
        assert_eq!(
            prepare(&bad_target, &config).unwrap_err(),
            ErrorKind::InvalidInput(InputError::UnknownTarget(10))
        );

        // MST algorithms don't need a source
        assert!(prepare(&request(Algorithm::Prims), &config).is_ok());
    }

    #[test]
    fn test_weight_sum_must_stay_finite() {
        let config = EngineConfig::default();
        for weight in [1e308, -1e308] {
            let req = AlgorithmRequest::new(Algorithm::BellmanFord, 3)
                .with_source(0)
                .with_edge(0, 1, weight)
                .with_edge(1, 2, weight);
            assert!(matches!(
                prepare(&req, &config),
                Err(ErrorKind::InvalidInput(InputError::WeightOverflow { .. }))
            ));
        }

        let req = AlgorithmRequest::new(Algorithm::Kruskal, 2).with_edge(0, 1, 1e308);
        assert!(prepare(&req, &config).is_ok());
    }

    #[test]
    fn test_floyd_warshall_target_needs_source() {
        let config = EngineConfig::default();
        let req = request(Algorithm::FloydWarshall).with_target(2);
        assert_eq!(
            prepare(&req, &config).unwrap_err(),
            ErrorKind::InvalidInput(InputError::MissingSource)
        );
        assert!(prepare(&req.with_source(0), &config).is_ok());
    }

    #[test]
    fn test_empty_graph_accepts_any_source() {
        let req = AlgorithmRequest::new(Algorithm::Dijkstra, 0).with_source(4);
        assert!(prepare(&req, &EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_resource_limits() {
        let config = EngineConfig {
            max_nodes: Some(2),
            ..EngineConfig::default()
        };
        assert_eq!(
            prepare(&request(Algorithm::Kruskal), &config).unwrap_err(),
            ErrorKind::ResourceLimit { what: "node", actual: 3, limit: 2 }
        );

        let config = EngineConfig {
            floyd_warshall_max_nodes: Some(2),
            ..EngineConfig::default()
        };
        assert!(prepare(&request(Algorithm::Kruskal), &config).is_ok());
        assert_eq!(
            prepare(&request(Algorithm::FloydWarshall), &config).unwrap_err(),
            ErrorKind::ResourceLimit { what: "Floyd-Warshall node", actual: 3, limit: 2 }
        );
    }
}
