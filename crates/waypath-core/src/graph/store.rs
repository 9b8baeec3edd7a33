//! In-memory weighted graph
//!
//! One generic [`Graph`] serves both variants. The only behavior that depends
//! on the [`EdgeKind`] is how `add_edge` populates the adjacency index: a
//! directed graph records `u -> v`, an undirected graph records `u -> v` and
//! `v -> u` for the same logical edge.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{GraphError, Result};
use crate::graph::types::{Cost, Edge, Node, NodeId};

/// Marker trait selecting the edge semantics of a [`Graph`]
pub trait EdgeKind {
    const DIRECTED: bool;
    const NAME: &'static str;
}

/// Edges are one-directional
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;

/// Edges are traversable both ways with the same weight
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl EdgeKind for Directed {
    const DIRECTED: bool = true;
    const NAME: &'static str = "DirectedGraph";
}

impl EdgeKind for Undirected {
    const DIRECTED: bool = false;
    const NAME: &'static str = "UndirectedGraph";
}

pub type DirectedGraph<Id> = Graph<Id, Directed>;
pub type UndirectedGraph<Id> = Graph<Id, Undirected>;

/// Weighted graph with a per-node adjacency index
#[derive(Debug, Clone)]
pub struct Graph<Id, K> {
    nodes: HashMap<Id, Node<Id>>,
    /// Logical edges in insertion order
    edges: Vec<Edge<Id>>,
    /// node -> (neighbor -> weight); every node has an entry
    adjacency: HashMap<Id, HashMap<Id, Cost>>,
    kind: PhantomData<K>,
}

impl<Id: NodeId, K: EdgeKind> Graph<Id, K> {
    pub fn new() -> Self {
        Graph {
            nodes: HashMap::new(),
            edges: Vec::new(),
            adjacency: HashMap::new(),
            kind: PhantomData,
        }
    }

    /// Register a node with no label
    pub fn add_node(&mut self, id: Id) -> Result<()> {
        self.insert_node(Node::new(id))
    }

    /// Register a node carrying a display label
    pub fn add_labeled_node(&mut self, id: Id, label: impl Into<String>) -> Result<()> {
        self.insert_node(Node::with_label(id, label))
    }

    fn insert_node(&mut self, node: Node<Id>) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::duplicate_node(&node.id));
        }
        self.adjacency.insert(node.id.clone(), HashMap::new());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Add a weighted edge between two existing nodes.
    ///
    /// Fails on an unknown endpoint, a negative or NaN weight, or when the
    /// pair is already connected.
    pub fn add_edge(&mut self, source: Id, target: Id, weight: f64) -> Result<()> {
        self.require_node(&source)?;
        self.require_node(&target)?;
        let cost = Cost::from_weight(weight)
            .ok_or_else(|| GraphError::invalid_weight(&source, &target, weight))?;

        if self.edge_exists(&source, &target) {
            return Err(GraphError::duplicate_edge(&source, &target));
        }

        if let Some(out) = self.adjacency.get_mut(&source) {
            out.insert(target.clone(), cost);
        }
        if !K::DIRECTED {
            if let Some(back) = self.adjacency.get_mut(&target) {
                back.insert(source.clone(), cost);
            }
        }

        tracing::trace!(%source, %target, weight, kind = K::NAME, "add_edge");
        self.edges.push(Edge {
            source,
            target,
            weight: cost,
        });
        Ok(())
    }

    fn edge_exists(&self, source: &Id, target: &Id) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|out| out.contains_key(target))
    }

    fn require_node(&self, id: &Id) -> Result<()> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::unknown_node(id))
        }
    }

    /// Neighbors one edge away from `id`, sorted by neighbor id
    pub fn neighbors_of(&self, id: &Id) -> Result<Vec<(Id, Cost)>> {
        let out = self
            .adjacency
            .get(id)
            .ok_or_else(|| GraphError::unknown_node(id))?;
        let mut neighbors: Vec<(Id, Cost)> =
            out.iter().map(|(n, w)| (n.clone(), *w)).collect();
        neighbors.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(neighbors)
    }

    /// Weight of the edge `u -> v` (either way for undirected graphs), if any
    pub fn edge_between(&self, u: &Id, v: &Id) -> Result<Option<Cost>> {
        self.require_node(u)?;
        self.require_node(v)?;
        Ok(self.adjacency.get(u).and_then(|out| out.get(v)).copied())
    }

    pub fn node(&self, id: &Id) -> Option<&Node<Id>> {
        self.nodes.get(id)
    }

    /// All nodes sorted by id
    pub fn nodes(&self) -> Vec<&Node<Id>> {
        let mut nodes: Vec<&Node<Id>> = self.nodes.values().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        nodes
    }

    /// Logical edges in insertion order
    pub fn edges(&self) -> &[Edge<Id>] {
        &self.edges
    }

    pub fn contains_node(&self, id: &Id) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        K::DIRECTED
    }
}

impl<Id: NodeId, K: EdgeKind> Default for Graph<Id, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: NodeId, K: EdgeKind> fmt::Display for Graph<Id, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} nodes and {} edges",
            K::NAME,
            self.node_count(),
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(neighbors: &[(&'static str, Cost)]) -> Vec<&'static str> {
        neighbors.iter().map(|(id, _)| *id).collect()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: DirectedGraph<&str> = DirectedGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_directed());
        assert!(!UndirectedGraph::<&str>::default().is_directed());
    }

    #[test]
    fn test_add_node() {
        let mut graph = DirectedGraph::new();
        graph.add_node("A").unwrap();
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_node(&"A"));
        assert_eq!(graph.node(&"A").unwrap().label, None);
    }

    #[test]
    fn test_add_labeled_node() {
        let mut graph = UndirectedGraph::new();
        graph.add_labeled_node(7u32, "Depot").unwrap();
        assert_eq!(graph.node(&7).unwrap().label.as_deref(), Some("Depot"));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut graph = DirectedGraph::new();
        graph.add_node("A").unwrap();
        let err = graph.add_node("A").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode { ref id } if id == "A"));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_unknown_endpoint() {
        let mut graph = DirectedGraph::new();
        graph.add_node("A").unwrap();
        let err = graph.add_edge("A", "B", 5.0).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { ref id } if id == "B"));
        let err = graph.add_edge("Z", "A", 5.0).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { ref id } if id == "Z"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_negative_weight() {
        let mut graph = DirectedGraph::new();
        graph.add_node("A").unwrap();
        graph.add_node("B").unwrap();
        let err = graph.add_edge("A", "B", -3.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { weight, .. } if weight == -3.0));
        assert!(matches!(
            graph.add_edge("A", "B", f64::NAN),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert_eq!(graph.edge_between(&"A", &"B").unwrap(), None);
    }

    #[test]
    fn test_zero_weight_allowed() {
        let mut graph = DirectedGraph::new();
        graph.add_node("A").unwrap();
        graph.add_node("B").unwrap();
        graph.add_edge("A", "B", 0.0).unwrap();
        assert_eq!(graph.edge_between(&"A", &"B").unwrap(), Some(Cost::ZERO));
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut graph = DirectedGraph::new();
        for id in ["A", "B", "C"] {
            graph.add_node(id).unwrap();
        }
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();

        assert_eq!(ids(&graph.neighbors_of(&"A").unwrap()), vec!["B", "C"]);
        assert_eq!(ids(&graph.neighbors_of(&"B").unwrap()), vec!["C"]);
        assert!(graph.neighbors_of(&"C").unwrap().is_empty());

        assert_eq!(graph.edge_between(&"A", &"B").unwrap(), Some(Cost::from(1)));
        assert_eq!(graph.edge_between(&"B", &"A").unwrap(), None);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_directed_allows_reverse_edge() {
        let mut graph = DirectedGraph::new();
        graph.add_node("A").unwrap();
        graph.add_node("B").unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "A", 2.0).unwrap();
        assert_eq!(graph.edge_between(&"B", &"A").unwrap(), Some(Cost::from(2)));
        assert!(matches!(
            graph.add_edge("A", "B", 9.0),
            Err(GraphError::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn test_undirected_edge_is_reciprocal() {
        let mut graph = UndirectedGraph::new();
        for id in ["A", "B", "C"] {
            graph.add_node(id).unwrap();
        }
        graph.add_edge("A", "B", 2.5).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();

        assert_eq!(ids(&graph.neighbors_of(&"A").unwrap()), vec!["B", "C"]);
        assert_eq!(ids(&graph.neighbors_of(&"B").unwrap()), vec!["A"]);
        assert_eq!(ids(&graph.neighbors_of(&"C").unwrap()), vec!["A"]);
        assert_eq!(
            graph.edge_between(&"B", &"A").unwrap(),
            graph.edge_between(&"A", &"B").unwrap()
        );
        // one logical edge per insertion
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_undirected_duplicate_in_either_order() {
        let mut graph = UndirectedGraph::new();
        graph.add_node("A").unwrap();
        graph.add_node("B").unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        let err = graph.add_edge("B", "A", 4.0).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
        assert_eq!(graph.edge_between(&"A", &"B").unwrap(), Some(Cost::from(1)));
    }

    #[test]
    fn test_undirected_self_loop() {
        let mut graph = UndirectedGraph::new();
        graph.add_node("A").unwrap();
        graph.add_edge("A", "A", 1.0).unwrap();
        assert_eq!(ids(&graph.neighbors_of(&"A").unwrap()), vec!["A"]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_queries_on_unknown_node() {
        let mut graph: DirectedGraph<&str> = DirectedGraph::new();
        graph.add_node("A").unwrap();
        assert!(matches!(
            graph.neighbors_of(&"Z"),
            Err(GraphError::UnknownNode { .. })
        ));
        assert!(matches!(
            graph.edge_between(&"A", &"Z"),
            Err(GraphError::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_nodes_sorted_and_edges_in_insertion_order() {
        let mut graph = DirectedGraph::new();
        for id in [3u32, 1, 2] {
            graph.add_node(id).unwrap();
        }
        graph.add_edge(3, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();

        let node_ids: Vec<u32> = graph.nodes().iter().map(|n| n.id).collect();
        assert_eq!(node_ids, vec![1, 2, 3]);
        assert_eq!(graph.edges()[0].source, 3);
        assert_eq!(graph.edges()[1].source, 1);
    }

    #[test]
    fn test_display() {
        let mut graph = UndirectedGraph::new();
        graph.add_node("A").unwrap();
        graph.add_node("B").unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        assert_eq!(graph.to_string(), "UndirectedGraph with 2 nodes and 1 edges");
    }
}
