//! Weighted graph model and path-finding
//!
//! - `store`: the generic graph with directed/undirected edge kinds
//! - `traversal`: the read-only provider trait consumed by algorithms
//! - `algos`: Dijkstra shortest paths
//! - `paths`: query results and path reconstruction
//! - `document`: graph definitions loaded from TOML, JSON or YAML

pub mod algos;
pub mod document;
pub mod paths;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::Dijkstra;
pub use document::{DocumentFormat, GraphDocument, GraphKind, LoadedGraph};
pub use paths::{PathEntry, PathResult, ShortestPaths, TraversalStats};
pub use store::{Directed, DirectedGraph, EdgeKind, Graph, Undirected, UndirectedGraph};
pub use traversal::GraphProvider;
pub use types::{Cost, Edge, Node, NodeId};
