use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Bound for node identifiers.
///
/// Any hashable, totally ordered, printable type works: `String`, `&str`,
/// `u32`, a newtype, ... Ordering is used for deterministic tie-breaks.
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Edge weight or accumulated path distance.
///
/// Never NaN once it comes out of [`Cost::from_weight`]; unreachable
/// distances are [`Cost::INFINITY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Cost(value)
    }

    /// Validate a caller-supplied edge weight: `None` for negative or NaN.
    pub fn from_weight(weight: f64) -> Option<Self> {
        if weight >= 0.0 {
            // -0.0 passes the check; store it as 0.0
            Some(Cost(weight.abs()))
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Cost(value as f64)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "inf")
        }
    }
}

/// Finite costs serialize as numbers, infinite ones as `null`.
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// A vertex of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<Id> {
    pub id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl<Id> Node<Id> {
    pub fn new(id: Id) -> Self {
        Node { id, label: None }
    }

    pub fn with_label(id: Id, label: impl Into<String>) -> Self {
        Node {
            id,
            label: Some(label.into()),
        }
    }
}

/// A weighted connection between two nodes.
///
/// For undirected graphs `source`/`target` record the insertion order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<Id> {
    pub source: Id,
    pub target: Id,
    pub weight: Cost,
}

impl<Id: PartialEq> Edge<Id> {
    /// Whether this edge joins `u` and `v`, honoring direction if `directed`
    pub fn connects(&self, u: &Id, v: &Id, directed: bool) -> bool {
        (self.source == *u && self.target == *v)
            || (!directed && self.source == *v && self.target == *u)
    }
}
