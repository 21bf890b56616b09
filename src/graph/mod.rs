#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Weighted directed graphs and single-source shortest paths.
//!
//! The pipeline is linear:
//! - [`loader`] turns `source target weight` lines into an immutable [`Graph`].
//! - [`bellman_ford`] relaxes every edge at most |V|-1 times and then checks for a
//!   negative-weight cycle reachable from the source.
//! - [`path`] rebuilds source→target paths from the predecessor map.
//! - [`report`] renders the per-vertex result lines.
//!
//! Vertices are opaque string labels. They are interned into [`VertexId`]s in
//! lexicographic label order, so the smallest label always has id `0`.

pub mod bellman_ford;
pub mod loader;
pub mod path;
pub mod report;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// Interned vertex identifier, an index into the graph's label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in the graph's sorted label table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A weighted directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Tail of the edge.
    pub source: VertexId,
    /// Head of the edge.
    pub target: VertexId,
    /// Real-valued weight, possibly negative.
    pub weight: f64,
}

/// An immutable edge list together with its vertex set.
///
/// Duplicate and parallel edges are kept as given, in input order. The vertex set is
/// exactly the union of the edge endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: FxHashMap<String, VertexId>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from `(source, target, weight)` triples.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<String>,
    {
        let raw = edges
            .into_iter()
            .map(|(source, target, weight)| (source.into(), target.into(), weight))
            .collect_vec();

        let labels = raw
            .iter()
            .flat_map(|(source, target, _)| [source.clone(), target.clone()])
            .sorted()
            .dedup()
            .collect_vec();

        let index: FxHashMap<String, VertexId> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), VertexId(i)))
            .collect();

        let edges = raw
            .iter()
            .map(|(source, target, weight)| Edge {
                source: index[source],
                target: index[target],
                weight: *weight,
            })
            .collect();

        Self {
            labels,
            index,
            edges,
        }
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the graph has no vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up the id of a vertex label.
    #[must_use]
    pub fn vertex(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// The label of a vertex.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this graph.
    #[must_use]
    pub fn label(&self, id: VertexId) -> &str {
        &self.labels[id.0]
    }

    /// All vertices in lexicographic label order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (VertexId(i), label.as_str()))
    }

    /// The vertex with the lexicographically smallest label.
    #[must_use]
    pub fn first_vertex(&self) -> Option<VertexId> {
        (!self.labels.is_empty()).then_some(VertexId(0))
    }
}

/// Tentative or final distance from the source.
///
/// `Unreachable` orders after every finite value, so it behaves as +∞.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    /// A finite path length.
    Finite(OrderedFloat<f64>),
    /// No path from the source is known.
    Unreachable,
}

impl Distance {
    /// Distance of the source to itself.
    pub const ZERO: Self = Self::Finite(OrderedFloat(0.0));

    /// Wraps a finite value.
    #[must_use]
    pub const fn finite(value: f64) -> Self {
        Self::Finite(OrderedFloat(value))
    }

    /// The finite value, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Finite(OrderedFloat(value)) => Some(value),
            Self::Unreachable => None,
        }
    }

    /// `true` unless the distance is +∞.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The distance reached by following one more edge of `weight`.
    ///
    /// `None` when `self` is unreachable: nothing is ever relaxed across an
    /// unreachable vertex.
    #[must_use]
    pub fn extend(self, weight: f64) -> Option<Self> {
        self.value().map(|value| Self::finite(value + weight))
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(OrderedFloat(value)) => write!(f, "{value}"),
            Self::Unreachable => write!(f, "Inaccessible"),
        }
    }
}
