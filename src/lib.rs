//! Point-to-point shortest paths on weighted directed graphs.
//!
//! Build a [`Graph`] once, then ask it for `(source, target)` queries:
//!
//! ```
//! use sssp_path::{Distance, Graph};
//!
//! let graph = Graph::<u64>::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 1)])?;
//! let result = graph.query(0, 1)?;
//! assert_eq!(result.distance, Distance::Finite(2));
//! assert_eq!(result.path.nodes(), &[0, 2, 1]);
//! # Ok::<(), sssp_path::Error>(())
//! ```
//!
//! The engine is Dijkstra over a binary heap with lazy deletion and stops as
//! soon as the target is settled. Unreachable targets come back as
//! [`Distance::Unreachable`] with an empty [`Path`]. Each query owns its
//! tables, so one graph can serve many threads at once.
//!
//! A C ABI entry point over CSR arrays is exported from [`ffi`].

pub mod config;
pub mod cost;
pub mod dijkstra;
pub mod error;
pub mod ffi;
pub mod generate;
pub mod graph;
mod heap;
pub mod input;
pub mod overlay;
pub mod path;
pub mod query;

pub use config::EngineConfig;
pub use cost::{Cost, Distance};
pub use dijkstra::{
    shortest_path, shortest_path_tree, shortest_path_with, PredecessorTable, SearchStats,
    ShortestPath, ShortestPathTree,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, NodeId};
pub use heap::HeapStats;
pub use input::{parse_problem, Problem};
pub use overlay::PathOverlay;
pub use path::{reconstruct_path, Path};
pub use query::QueryResult;
