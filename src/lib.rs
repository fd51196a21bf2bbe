//! Algograph graph algorithm engine
//!
//! Runs one of five classical algorithms over a caller-supplied weighted graph
//! and returns a JSON-serializable result.
//!
//! # Algorithms
//!
//! | Wire name | Algorithm | Edges | Weights |
//! |---|---|---|---|
//! | `dijkstra` | Dijkstra | directed | non-negative |
//! | `bellman_ford` | Bellman-Ford | directed | signed, negative cycles reported |
//! | `floyd_warshall` | Floyd-Warshall | directed | signed, negative cycles reported |
//! | `prims` | Prim's MST | undirected | non-negative |
//! | `kruskal` | Kruskal's MST | undirected | signed |
//!
//! Every call is a pure function of its request: the engine builds a fresh
//! graph, runs the algorithm and drops everything afterwards. Floyd-Warshall is
//! O(V^3) and is capped by [`EngineConfig::floyd_warshall_max_nodes`].
//!
//! ## Example Usage
//!
//! ```rust
//! use algograph::{Algorithm, AlgorithmRequest, Engine};
//!
//! let engine = Engine::default();
//! let request = AlgorithmRequest::new(Algorithm::Dijkstra, 4)
//!     .with_edges([(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0), (2, 3, 5.0)])
//!     .with_source(0);
//!
//! let response = engine.execute(&request).unwrap();
//! let paths = response.shortest_paths().unwrap();
//! assert_eq!(paths.distances[&3].finite(), Some(4.0));
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod request;
pub mod response;

pub use config::{ConfigError, ConfigResult, DisconnectedPolicy, EdgePolicy, EngineConfig};
pub use engine::Engine;
pub use error::{EngineError, EngineResult, ErrorKind, ErrorResponse, InputError};
pub use request::{Algorithm, AlgorithmRequest, EdgeSpec};
pub use response::{
    AlgorithmResponse, AllPairsPayload, Distance, Payload, ShortestPathsPayload,
    SpanningTreePayload,
};

pub use algograph_algorithms::{NodeId, Weight};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
