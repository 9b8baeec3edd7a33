use crate::error::{GraphError, Result};
use crate::graph::paths::{PathEntry, PathResult, ShortestPaths, TraversalStats};
use crate::graph::types::{Cost, NodeId};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, HashSet};
use std::time::Instant;

/// Frontier entry, ordered by accumulated cost then node id.
///
/// Wrapped in `Reverse` so the `BinaryHeap` pops the cheapest entry first and,
/// among equal costs, the smallest node id.
#[derive(Debug, Clone)]
pub struct HeapEntry<Id> {
    pub node_id: Id,
    pub accumulated_cost: Cost,
}

impl<Id: Ord> PartialEq for HeapEntry<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Id: Ord> Eq for HeapEntry<Id> {}

impl<Id: Ord> PartialOrd for HeapEntry<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id: Ord> Ord for HeapEntry<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// State tracked during one Dijkstra query
struct DijkstraState<Id> {
    /// Nodes whose distance is not yet final
    unvisited: HashSet<Id>,
    /// May hold several entries per node; all but the cheapest go stale
    heap: BinaryHeap<Reverse<HeapEntry<Id>>>,
    entries: BTreeMap<Id, PathEntry<Id>>,
    stats: TraversalStats,
}

impl<Id: NodeId> DijkstraState<Id> {
    fn new(node_ids: Vec<Id>, source: &Id) -> Self {
        let mut entries: BTreeMap<Id, PathEntry<Id>> = node_ids
            .iter()
            .map(|id| (id.clone(), PathEntry::unreached()))
            .collect();
        entries.insert(
            source.clone(),
            PathEntry {
                distance: Cost::ZERO,
                predecessor: None,
            },
        );

        let mut state = Self {
            unvisited: node_ids.into_iter().collect(),
            heap: BinaryHeap::new(),
            entries,
            stats: TraversalStats::default(),
        };
        state.push(source.clone(), Cost::ZERO);
        state
    }

    fn push(&mut self, node_id: Id, accumulated_cost: Cost) {
        self.heap.push(Reverse(HeapEntry {
            node_id,
            accumulated_cost,
        }));
        self.stats.pushes += 1;
    }

    /// Pop the next node to finalize, discarding stale entries.
    /// Returns the node with its final distance.
    fn next_unvisited(&mut self) -> Option<(Id, Cost)> {
        while let Some(Reverse(HeapEntry { node_id, .. })) = self.heap.pop() {
            if !self.unvisited.remove(&node_id) {
                self.stats.stale_pops += 1;
                continue;
            }
            self.stats.finalized += 1;
            let distance = self
                .entries
                .get(&node_id)
                .map_or(Cost::INFINITY, |e| e.distance);
            return Some((node_id, distance));
        }
        None
    }

    /// Relax the edge `current -> neighbor`
    fn relax(&mut self, current: &Id, current_distance: Cost, neighbor: Id, weight: Cost) {
        if !self.unvisited.contains(&neighbor) {
            return;
        }
        let candidate = current_distance + weight;
        let Some(entry) = self.entries.get_mut(&neighbor) else {
            return;
        };
        if candidate < entry.distance {
            entry.distance = candidate;
            entry.predecessor = Some(current.clone());
            self.push(neighbor, candidate);
        }
    }
}

/// Single-source shortest-path engine bound to one graph.
///
/// Edge weights must be non-negative; graphs built through `add_edge`
/// guarantee this. The graph is borrowed for the engine's lifetime, so it
/// cannot change between construction and the end of a query.
pub struct Dijkstra<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: ?Sized> Dijkstra<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Dijkstra { graph }
    }

    /// Shortest distance and predecessor from `source` to every node.
    ///
    /// Unreachable nodes get an infinite distance and no predecessor.
    #[tracing::instrument(skip_all, fields(source = %source))]
    pub fn find_shortest_paths<Id>(&self, source: &Id) -> Result<ShortestPaths<Id>>
    where
        Id: NodeId,
        G: GraphProvider<Id>,
    {
        let start = Instant::now();
        if !self.graph.contains_node(source) {
            return Err(GraphError::unknown_node(source));
        }

        let node_ids = self.graph.node_ids();
        let node_count = node_ids.len();
        let mut state = DijkstraState::new(node_ids, source);

        while !state.unvisited.is_empty() {
            let Some((current, distance)) = state.next_unvisited() else {
                // frontier exhausted: whatever is left is unreachable
                break;
            };
            for (neighbor, weight) in self.graph.neighbors_of(&current)? {
                state.relax(&current, distance, neighbor, weight);
            }
        }

        tracing::debug!(
            nodes = node_count,
            finalized = state.stats.finalized,
            unreachable = node_count - state.stats.finalized,
            pushes = state.stats.pushes,
            stale_pops = state.stats.stale_pops,
            "shortest_paths_complete"
        );
        crate::trace_time!(start, "find_shortest_paths");

        Ok(ShortestPaths::new(
            source.clone(),
            state.entries,
            state.stats,
        ))
    }

    /// Shortest path between two nodes
    pub fn shortest_path<Id>(&self, source: &Id, target: &Id) -> Result<PathResult<Id>>
    where
        Id: NodeId,
        G: GraphProvider<Id>,
    {
        if !self.graph.contains_node(target) {
            return Err(GraphError::unknown_node(target));
        }
        let paths = self.find_shortest_paths(source)?;
        let distance = paths.distance_to(target).unwrap_or(Cost::INFINITY);
        let nodes = paths.path_to(target)?;

        Ok(PathResult {
            source: source.clone(),
            target: target.clone(),
            found: nodes.is_some(),
            distance,
            nodes: nodes.unwrap_or_default(),
        })
    }
}
