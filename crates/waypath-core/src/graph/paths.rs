//! Shortest-path query results and path reconstruction

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::types::{Cost, NodeId};

/// Distance and predecessor of one node relative to the query source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry<Id> {
    pub distance: Cost,
    pub predecessor: Option<Id>,
}

impl<Id> PathEntry<Id> {
    pub fn unreached() -> Self {
        PathEntry {
            distance: Cost::INFINITY,
            predecessor: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Counters collected while running one query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Nodes whose distance was finalized
    pub finalized: usize,
    /// Entries pushed onto the frontier, including the source
    pub pushes: usize,
    /// Popped entries discarded because their node was already finalized
    pub stale_pops: usize,
}

/// Result of a single-source query: one entry per node of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<Id> {
    source: Id,
    entries: BTreeMap<Id, PathEntry<Id>>,
    stats: TraversalStats,
}

impl<Id: NodeId> ShortestPaths<Id> {
    pub(crate) fn new(
        source: Id,
        entries: BTreeMap<Id, PathEntry<Id>>,
        stats: TraversalStats,
    ) -> Self {
        ShortestPaths {
            source,
            entries,
            stats,
        }
    }

    pub fn source(&self) -> &Id {
        &self.source
    }

    pub fn get(&self, id: &Id) -> Option<&PathEntry<Id>> {
        self.entries.get(id)
    }

    pub fn distance_to(&self, id: &Id) -> Option<Cost> {
        self.entries.get(id).map(|e| e.distance)
    }

    pub fn predecessor_of(&self, id: &Id) -> Option<&Id> {
        self.entries.get(id).and_then(|e| e.predecessor.as_ref())
    }

    pub fn is_reachable(&self, id: &Id) -> bool {
        self.entries.get(id).is_some_and(PathEntry::is_reachable)
    }

    pub fn reachable_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_reachable()).count()
    }

    /// Entries ordered by node id
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &PathEntry<Id>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// Nodes on the shortest path from the source to `target`, inclusive.
    ///
    /// `Ok(None)` when `target` is unreachable.
    pub fn path_to(&self, target: &Id) -> Result<Option<Vec<Id>>> {
        let entry = self
            .entries
            .get(target)
            .ok_or_else(|| GraphError::unknown_node(target))?;
        if !entry.is_reachable() {
            return Ok(None);
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(pred) = self.predecessor_of(current) {
            // a well-formed chain visits each node at most once
            if path.len() > self.entries.len() {
                return Err(GraphError::Other(format!(
                    "predecessor cycle while reconstructing path to {}",
                    target
                )));
            }
            path.push(pred.clone());
            current = pred;
        }
        path.reverse();

        if path.first() != Some(&self.source) {
            return Ok(None);
        }
        Ok(Some(path))
    }

    pub fn into_entries(self) -> BTreeMap<Id, PathEntry<Id>> {
        self.entries
    }
}

impl<'a, Id> IntoIterator for &'a ShortestPaths<Id> {
    type Item = (&'a Id, &'a PathEntry<Id>);
    type IntoIter = std::collections::btree_map::Iter<'a, Id, PathEntry<Id>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A single source-to-target shortest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult<Id> {
    pub source: Id,
    pub target: Id,
    pub found: bool,
    pub distance: Cost,
    /// Empty when no path exists
    pub nodes: Vec<Id>,
}

impl<Id> PathResult<Id> {
    /// Number of edges on the path
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(distance: f64, predecessor: Option<&'static str>) -> PathEntry<&'static str> {
        PathEntry {
            distance: Cost::new(distance),
            predecessor,
        }
    }

    fn sample() -> ShortestPaths<&'static str> {
        let mut entries = BTreeMap::new();
        entries.insert("A", entry(0.0, None));
        entries.insert("B", entry(1.0, Some("A")));
        entries.insert("C", entry(3.0, Some("B")));
        entries.insert("X", PathEntry::unreached());
        ShortestPaths::new("A", entries, TraversalStats::default())
    }

    #[test]
    fn test_path_to_reachable() {
        let paths = sample();
        assert_eq!(paths.path_to(&"C").unwrap(), Some(vec!["A", "B", "C"]));
    }

    #[test]
    fn test_path_to_source_is_single_node() {
        assert_eq!(sample().path_to(&"A").unwrap(), Some(vec!["A"]));
    }

    #[test]
    fn test_path_to_unreachable() {
        assert_eq!(sample().path_to(&"X").unwrap(), None);
    }

    #[test]
    fn test_path_to_unknown_target() {
        let err = sample().path_to(&"Q").unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { ref id } if id == "Q"));
    }

    #[test]
    fn test_path_to_detects_cycle() {
        let mut entries = BTreeMap::new();
        entries.insert("A", entry(0.0, None));
        entries.insert("B", entry(1.0, Some("C")));
        entries.insert("C", entry(1.0, Some("B")));
        let paths = ShortestPaths::new("A", entries, TraversalStats::default());
        assert!(matches!(paths.path_to(&"B"), Err(GraphError::Other(_))));
    }

    #[test]
    fn test_accessors() {
        let paths = sample();
        assert_eq!(paths.source(), &"A");
        assert_eq!(paths.len(), 4);
        assert_eq!(paths.reachable_count(), 3);
        assert!(paths.is_reachable(&"B"));
        assert!(!paths.is_reachable(&"X"));
        assert_eq!(paths.distance_to(&"C"), Some(Cost::from(3)));
        assert_eq!(paths.predecessor_of(&"C"), Some(&"B"));
        assert_eq!(paths.predecessor_of(&"A"), None);

        let order: Vec<&str> = paths.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec!["A", "B", "C", "X"]);
    }

    #[test]
    fn test_hop_count() {
        let result = PathResult {
            source: "A",
            target: "C",
            found: true,
            distance: Cost::from(3),
            nodes: vec!["A", "B", "C"],
        };
        assert_eq!(result.hop_count(), 2);
    }
}
