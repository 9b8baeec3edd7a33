//! Waypath Core Library
//!
//! Weighted directed/undirected graphs and a Dijkstra single-source
//! shortest-path engine.
//!
//! ```
//! use waypath_core::graph::{Dijkstra, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new();
//! for id in ["A", "B", "C"] {
//!     graph.add_node(id)?;
//! }
//! graph.add_edge("A", "B", 1.0)?;
//! graph.add_edge("B", "C", 2.0)?;
//!
//! let paths = Dijkstra::new(&graph).find_shortest_paths(&"A")?;
//! assert_eq!(paths.distance_to(&"C").map(|d| d.value()), Some(3.0));
//! assert_eq!(paths.predecessor_of(&"C"), Some(&"B"));
//! # Ok::<(), waypath_core::error::GraphError>(())
//! ```

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
