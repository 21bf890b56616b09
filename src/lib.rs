#![deny(missing_docs)]
//! Two small algorithm demonstrations: Bellman-Ford shortest paths with negative-cycle
//! detection, and N-Queens enumeration through a CNF encoding handed to a SAT solver.

/// Error types for both pipelines.
pub mod error;

/// The `graph` module loads weighted edge lists and computes single-source shortest paths.
pub mod graph;

/// The `queens` module encodes N-Queens as CNF and enumerates every solution with a SAT oracle.
pub mod queens;
