//! Error types shared by the shortest-path and N-Queens pipelines.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures while loading a graph or starting a shortest-path run.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph input could not be opened or read.
    #[error("unable to read graph '{}': {source}", path.display())]
    Io {
        /// Path of the input, or `<input>` for in-memory readers.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Parsing produced no vertex at all.
    #[error("the graph is empty")]
    Empty,

    /// The requested source label is not a vertex of the graph.
    #[error("source vertex '{0}' does not exist in the graph")]
    UnknownSource(String),
}

/// Why a path could not be reconstructed for a target vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The target has no finite distance from the source.
    #[error("vertex is unreachable from the source")]
    Unreachable,

    /// The predecessor chain did not reach the source within |V|+1 steps.
    #[error("predecessor chain does not terminate")]
    Unterminated,
}

/// Failures reported by a SAT backend.
#[derive(Debug, Error)]
pub enum OracleError {
    /// A literal of `0` or outside the backend's variable range.
    #[error("invalid literal {0}")]
    InvalidLiteral(i32),

    /// The backend stopped before reaching a definitive answer.
    #[error("SAT backend was interrupted")]
    Interrupted,

    /// Any other backend failure.
    #[error("SAT backend failure: {0}")]
    Backend(String),
}

/// Failures of the N-Queens pipeline.
#[derive(Debug, Error)]
pub enum QueensError {
    /// n² does not fit in a positive `i32` literal.
    #[error("board size {0} is too large to encode")]
    BoardTooLarge(usize),

    /// The SAT backend failed.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}
