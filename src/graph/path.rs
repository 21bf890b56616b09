//! Path reconstruction from the predecessor map.

use crate::error::PathError;
use crate::graph::bellman_ford::ShortestPaths;
use crate::graph::VertexId;

impl ShortestPaths {
    /// Rebuilds the shortest path from the source to `target`, source first.
    ///
    /// The walk follows predecessors back from `target` until a vertex without one.
    /// Valid relaxations always produce a chain ending at the source within |V| steps;
    /// a chain longer than |V|+1 vertices (which a reachable negative cycle can produce)
    /// is reported as [`PathError::Unterminated`] rather than looping.
    ///
    /// # Errors
    ///
    /// - [`PathError::Unreachable`] if `target` has no finite distance.
    /// - [`PathError::Unterminated`] if the predecessor chain does not terminate.
    pub fn path_to(&self, target: VertexId) -> Result<Vec<VertexId>, PathError> {
        if !self.distance(target).is_finite() {
            return Err(PathError::Unreachable);
        }

        let limit = self.distances.len() + 1;
        let mut path = Vec::new();
        let mut current = Some(target);

        while let Some(vertex) = current {
            path.push(vertex);
            if path.len() > limit {
                return Err(PathError::Unterminated);
            }
            current = self.predecessor(vertex);
        }

        path.reverse();
        Ok(path)
    }
}
