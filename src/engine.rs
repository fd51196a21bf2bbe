//! Request dispatch
//!
//! Validates a request, runs the selected algorithm against a freshly built
//! graph and wraps the outcome in the wire response. The engine holds only
//! configuration, so one instance can serve any number of threads.

use crate::config::{DisconnectedPolicy, EngineConfig};
use crate::error::{EngineError, EngineResult, ErrorKind, ErrorResponse};
use crate::graph::{self, PreparedGraph};
use crate::request::{Algorithm, AlgorithmRequest};
use crate::response::{
    AlgorithmResponse, AllPairsPayload, Payload, ShortestPathsPayload, SpanningTreePayload,
};
use algograph_algorithms::{
    bellman_ford, dijkstra, floyd_warshall, kruskal_mst, prim_mst, AlgoResult, AllPairsResult,
    BellmanFordResult, MSTResult, ShortestPaths,
};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Raw algorithm output, before it is shaped for the wire
enum Outcome {
    Dijkstra(ShortestPaths),
    BellmanFord(BellmanFordResult),
    FloydWarshall(AllPairsResult),
    SpanningTree(MSTResult),
}

/// Graph algorithm engine
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one request.
    pub fn execute(&self, request: &AlgorithmRequest) -> EngineResult<AlgorithmResponse> {
        let algorithm = request.algorithm;
        debug!(
            "{} request: {} nodes, {} edges, source {:?}",
            algorithm,
            request.nodes.len(),
            request.edges.len(),
            request.source
        );

        let prepared = graph::prepare(request, &self.config)
            .map_err(|kind| EngineError::new(algorithm, kind))?;

        let started = Instant::now();
        let outcome = run(algorithm, &prepared, request)
            .map_err(|err| EngineError::new(algorithm, err))?;
        let execution_time = started.elapsed().as_secs_f64() * 1000.0;

        let payload = self
            .shape(algorithm, outcome, &prepared, request)
            .map_err(|kind| EngineError::new(algorithm, kind))?;

        info!(
            "{} finished: {} nodes, {} edges in {:.3} ms",
            algorithm,
            prepared.node_count(),
            prepared.view.edge_count(),
            execution_time
        );

        Ok(AlgorithmResponse {
            algorithm,
            node_count: prepared.node_count(),
            edge_count: prepared.view.edge_count(),
            execution_time,
            payload,
        })
    }

    /// Run a JSON request and return a JSON response or error object.
    pub fn execute_json(&self, input: &str) -> Result<String, serde_json::Error> {
        let request: AlgorithmRequest = match serde_json::from_str(input) {
            Ok(request) => request,
            Err(err) => {
                warn!("Rejecting malformed request: {}", err);
                return serde_json::to_string(&ErrorResponse::malformed(&err));
            }
        };

        match self.execute(&request) {
            Ok(response) => serde_json::to_string(&response),
            Err(err) => {
                debug!("{}", err);
                serde_json::to_string(&err.to_response())
            }
        }
    }

    /// Run independent requests in parallel; results keep input order.
    pub fn execute_batch(&self, requests: &[AlgorithmRequest]) -> Vec<EngineResult<AlgorithmResponse>> {
        debug!("Executing batch of {} requests", requests.len());
        requests.par_iter().map(|request| self.execute(request)).collect()
    }

    fn shape(
        &self,
        algorithm: Algorithm,
        outcome: Outcome,
        prepared: &PreparedGraph,
        request: &AlgorithmRequest,
    ) -> Result<Payload, ErrorKind> {
        let payload = match outcome {
            Outcome::Dijkstra(paths) => {
                Payload::ShortestPaths(ShortestPathsPayload::from_paths(&paths, request.target))
            }
            Outcome::BellmanFord(result) => {
                if result.negative_cycle {
                    warn!(
                        "Bellman-Ford: negative cycle reachable from {} affects {} nodes",
                        result.paths.source,
                        result.affected.len()
                    );
                }
                Payload::ShortestPaths(ShortestPathsPayload::from_bellman_ford(&result, request.target))
            }
            Outcome::FloydWarshall(result) => {
                if result.negative_cycle {
                    warn!("Floyd-Warshall: negative cycle through {:?}", result.cycle_nodes);
                }
                let endpoints = request.source.zip(request.target);
                Payload::AllPairs(AllPairsPayload::from_result(&result, endpoints))
            }
            Outcome::SpanningTree(result) => {
                if !result.connected {
                    if self.config.disconnected_policy == DisconnectedPolicy::Reject {
                        return Err(ErrorKind::Disconnected {
                            reached: result.component_size,
                            total: prepared.node_count(),
                        });
                    }
                    debug!(
                        "{}: graph is disconnected, tree covers {} of {} nodes",
                        algorithm,
                        result.component_size,
                        prepared.node_count()
                    );
                }
                Payload::SpanningTree(SpanningTreePayload::from(result))
            }
        };
        Ok(payload)
    }
}

fn run(algorithm: Algorithm, prepared: &PreparedGraph, request: &AlgorithmRequest) -> AlgoResult<Outcome> {
    let view = &prepared.view;
    // Validation guarantees a source for single-source algorithms
    let source = request.source.unwrap_or(0);

    let outcome = match algorithm {
        Algorithm::Dijkstra => Outcome::Dijkstra(dijkstra(view, source)?),
        Algorithm::BellmanFord => Outcome::BellmanFord(bellman_ford(view, source)?),
        Algorithm::FloydWarshall => Outcome::FloydWarshall(floyd_warshall(view)),
        Algorithm::Prims => Outcome::SpanningTree(prim_mst(view, source)?),
        Algorithm::Kruskal => Outcome::SpanningTree(kruskal_mst(view, source)?),
    };
    Ok(outcome)
}
