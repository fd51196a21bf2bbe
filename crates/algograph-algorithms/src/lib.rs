//! Weighted graph algorithms for Algograph
//!
//! Pure functions over a [`GraphView`]: no I/O, no logging, no shared state.
//! Every call owns its scratch structures, so independent calls can run on
//! any number of threads at once.

pub mod all_pairs;
pub mod common;
pub mod error;
pub mod mst;
pub mod pathfinding;
pub mod union_find;

pub use all_pairs::{floyd_warshall, AllPairsResult};
pub use common::{Edge, GraphView, NodeId, Weight};
pub use error::{AlgoError, AlgoResult};
pub use mst::{kruskal_mst, prim_mst, MSTResult};
pub use pathfinding::{bellman_ford, dijkstra, BellmanFordResult, ShortestPaths};
pub use union_find::UnionFind;
