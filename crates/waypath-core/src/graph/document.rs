//! Graph documents
//!
//! A graph definition on disk, in TOML, JSON or YAML:
//!
//! ```toml
//! kind = "undirected"
//!
//! [[nodes]]
//! id = "A"
//! label = "Depot"
//!
//! [[edges]]
//! source = "A"
//! target = "B"
//! weight = 1.5
//! ```
//!
//! Building a document goes through `add_node`/`add_edge`, so a document
//! is held to the same rules as graphs built in code.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::store::{DirectedGraph, EdgeKind, Graph, UndirectedGraph};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, Node};

/// Edge semantics requested by a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("toml") => Ok(DocumentFormat::Toml),
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(GraphError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Serialized graph definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub kind: GraphKind,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Parse a document from text
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self> {
        let document: GraphDocument = match format {
            DocumentFormat::Toml => toml::from_str(text)?,
            DocumentFormat::Json => serde_json::from_str(text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(document)
    }

    /// Load a document from a file, choosing the format by extension
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let document = Self::parse(&text, format)?;
        tracing::debug!(
            kind = %document.kind,
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "graph_document_loaded"
        );
        Ok(document)
    }

    /// Build the in-memory graph described by this document
    pub fn build(&self) -> Result<LoadedGraph> {
        match self.kind {
            GraphKind::Directed => {
                let mut graph = DirectedGraph::new();
                self.populate(&mut graph)?;
                Ok(LoadedGraph::Directed(graph))
            }
            GraphKind::Undirected => {
                let mut graph = UndirectedGraph::new();
                self.populate(&mut graph)?;
                Ok(LoadedGraph::Undirected(graph))
            }
        }
    }

    fn populate<K: EdgeKind>(&self, graph: &mut Graph<String, K>) -> Result<()> {
        for node in &self.nodes {
            match &node.label {
                Some(label) => graph.add_labeled_node(node.id.clone(), label.clone())?,
                None => graph.add_node(node.id.clone())?,
            }
        }
        for edge in &self.edges {
            graph.add_edge(edge.source.clone(), edge.target.clone(), edge.weight)?;
        }
        Ok(())
    }
}

/// A graph built from a document, directed or undirected
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    Directed(DirectedGraph<String>),
    Undirected(UndirectedGraph<String>),
}

impl LoadedGraph {
    /// Load and build a document in one step
    pub fn from_path(path: &Path) -> Result<Self> {
        GraphDocument::load(path)?.build()
    }

    pub fn kind(&self) -> GraphKind {
        match self {
            LoadedGraph::Directed(_) => GraphKind::Directed,
            LoadedGraph::Undirected(_) => GraphKind::Undirected,
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node<String>> {
        let id = id.to_string();
        match self {
            LoadedGraph::Directed(g) => g.node(&id),
            LoadedGraph::Undirected(g) => g.node(&id),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            LoadedGraph::Directed(g) => g.node_count(),
            LoadedGraph::Undirected(g) => g.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            LoadedGraph::Directed(g) => g.edge_count(),
            LoadedGraph::Undirected(g) => g.edge_count(),
        }
    }
}

impl GraphProvider<String> for LoadedGraph {
    fn node_ids(&self) -> Vec<String> {
        match self {
            LoadedGraph::Directed(g) => g.node_ids(),
            LoadedGraph::Undirected(g) => g.node_ids(),
        }
    }

    fn contains_node(&self, id: &String) -> bool {
        match self {
            LoadedGraph::Directed(g) => g.contains_node(id),
            LoadedGraph::Undirected(g) => g.contains_node(id),
        }
    }

    fn neighbors_of(&self, id: &String) -> Result<Vec<(String, Cost)>> {
        match self {
            LoadedGraph::Directed(g) => g.neighbors_of(id),
            LoadedGraph::Undirected(g) => g.neighbors_of(id),
        }
    }

    fn edge_between(&self, u: &String, v: &String) -> Result<Option<Cost>> {
        match self {
            LoadedGraph::Directed(g) => g.edge_between(u, v),
            LoadedGraph::Undirected(g) => g.edge_between(u, v),
        }
    }
}

impl fmt::Display for LoadedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedGraph::Directed(g) => fmt::Display::fmt(g, f),
            LoadedGraph::Undirected(g) => fmt::Display::fmt(g, f),
        }
    }
}
