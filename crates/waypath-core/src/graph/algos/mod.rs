//! Graph algorithm implementations
//!
//! - `dijkstra`: Single-source weighted shortest paths

pub mod dijkstra;

pub use dijkstra::{Dijkstra, HeapEntry};
