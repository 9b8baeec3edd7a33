use crate::error::Result;
use crate::graph::store::{EdgeKind, Graph};
use crate::graph::types::{Cost, NodeId};

/// Read-only graph capability consumed by the path-finding engine
pub trait GraphProvider<Id: NodeId> {
    /// Every node id in the graph, in no particular order
    fn node_ids(&self) -> Vec<Id>;
    fn contains_node(&self, id: &Id) -> bool;
    /// (neighbor, weight) pairs one edge away from `id`
    fn neighbors_of(&self, id: &Id) -> Result<Vec<(Id, Cost)>>;
    fn edge_between(&self, u: &Id, v: &Id) -> Result<Option<Cost>>;
}

impl<Id: NodeId, K: EdgeKind> GraphProvider<Id> for Graph<Id, K> {
    fn node_ids(&self) -> Vec<Id> {
        self.nodes().into_iter().map(|n| n.id.clone()).collect()
    }

    fn contains_node(&self, id: &Id) -> bool {
        self.contains_node(id)
    }

    fn neighbors_of(&self, id: &Id) -> Result<Vec<(Id, Cost)>> {
        self.neighbors_of(id)
    }

    fn edge_between(&self, u: &Id, v: &Id) -> Result<Option<Cost>> {
        self.edge_between(u, v)
    }
}
