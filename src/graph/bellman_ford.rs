#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Bellman-Ford single-source shortest paths with negative-cycle detection.
//!
//! The engine runs in three phases over an immutable [`Graph`]:
//!
//! 1. **Initialise**: `d[source] = 0`, `d[v] = +∞` for every other vertex, no predecessors.
//! 2. **Relax**: at most |V|-1 passes over the full edge list. An edge `(u, v, w)` updates
//!    `d[v] = d[u] + w` and `π[v] = u` whenever `d[u]` is finite and `d[u] + w < d[v]`.
//!    A pass that changes nothing ends the phase early, since no later pass could.
//! 3. **Detect**: one more scan. If any edge still admits an improvement, a negative-weight
//!    cycle is reachable from the source.
//!
//! Edges leaving an unreachable vertex are never relaxed and never count as evidence of a
//! cycle: a negative cycle the source cannot reach does not affect any reported distance.
//!
//! Complexity: O(|V|·|E|) time, O(|V|) extra space.

use crate::error::GraphError;
use crate::graph::{Distance, Graph, VertexId};

/// The outcome of a Bellman-Ford run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    pub(crate) source: VertexId,
    pub(crate) distances: Vec<Distance>,
    pub(crate) predecessors: Vec<Option<VertexId>>,
    pub(crate) success: bool,
    pub(crate) passes: usize,
}

impl ShortestPaths {
    /// The source vertex of the run.
    #[must_use]
    pub const fn source(&self) -> VertexId {
        self.source
    }

    /// `false` if a negative-weight cycle is reachable from the source.
    ///
    /// Distances and predecessors are meaningless when this is `false`.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Number of relaxation passes actually performed.
    #[must_use]
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Shortest distance from the source to `vertex`.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances[vertex.index()]
    }

    /// The vertex preceding `vertex` on its shortest path, if any.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex.index()]
    }

    /// All distances, indexed by [`VertexId::index`].
    #[must_use]
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// All predecessors, indexed by [`VertexId::index`].
    #[must_use]
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }
}

/// Phase-by-phase Bellman-Ford state over a borrowed graph.
///
/// Most callers want [`run`]; this type exists for callers that need to observe the
/// individual phases.
#[derive(Debug, Clone)]
pub struct BellmanFord<'g> {
    graph: &'g Graph,
    source: VertexId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexId>>,
    passes: usize,
}

impl<'g> BellmanFord<'g> {
    /// Initialisation phase.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownSource`] if `source` is not a vertex label of `graph`.
    pub fn new(graph: &'g Graph, source: &str) -> Result<Self, GraphError> {
        let source = graph
            .vertex(source)
            .ok_or_else(|| GraphError::UnknownSource(source.to_owned()))?;

        let mut distances = vec![Distance::Unreachable; graph.vertex_count()];
        distances[source.index()] = Distance::ZERO;

        Ok(Self {
            graph,
            source,
            distances,
            predecessors: vec![None; graph.vertex_count()],
            passes: 0,
        })
    }

    /// Relaxes every edge once. Returns the number of distances that changed.
    fn relax_pass(&mut self) -> usize {
        let mut updates = 0;

        for edge in self.graph.edges() {
            let Some(candidate) = self.distances[edge.source.index()].extend(edge.weight) else {
                continue;
            };

            if candidate < self.distances[edge.target.index()] {
                tracing::trace!(
                    from = self.graph.label(edge.source),
                    to = self.graph.label(edge.target),
                    distance = %candidate,
                    "relaxed"
                );
                self.distances[edge.target.index()] = candidate;
                self.predecessors[edge.target.index()] = Some(edge.source);
                updates += 1;
            }
        }

        updates
    }

    /// Relaxation phase: at most |V|-1 passes, stopping after the first pass that changes
    /// nothing. Returns the number of passes performed.
    pub fn relax(&mut self) -> usize {
        let max_passes = self.graph.vertex_count().saturating_sub(1);

        while self.passes < max_passes {
            self.passes += 1;
            if self.relax_pass() == 0 {
                break;
            }
        }

        tracing::debug!(passes = self.passes, "relaxation finished");
        self.passes
    }

    /// Detection phase. Returns `true` if no edge reachable from the source can still be
    /// relaxed, i.e. no negative-weight cycle is reachable.
    #[must_use]
    pub fn detect(&self) -> bool {
        self.graph.edges().iter().all(|edge| {
            self.distances[edge.source.index()]
                .extend(edge.weight)
                .is_none_or(|candidate| candidate >= self.distances[edge.target.index()])
        })
    }

    /// Runs detection and freezes the state into a result.
    #[must_use]
    pub fn finish(self) -> ShortestPaths {
        let success = self.detect();
        if !success {
            tracing::debug!(
                source = self.graph.label(self.source),
                "negative-weight cycle reachable from source"
            );
        }

        ShortestPaths {
            source: self.source,
            distances: self.distances,
            predecessors: self.predecessors,
            success,
            passes: self.passes,
        }
    }
}

/// Computes single-source shortest paths from the vertex labelled `source`.
///
/// # Errors
///
/// [`GraphError::UnknownSource`] if `source` is not a vertex of `graph`.
pub fn run(graph: &Graph, source: &str) -> Result<ShortestPaths, GraphError> {
    let mut engine = BellmanFord::new(graph, source)?;
    engine.relax();
    Ok(engine.finish())
}
