#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! N-Queens as a SAT problem.
//!
//! [`encoder`] maps the board to CNF, [`oracle`] is the seam to an external SAT
//! solver, [`enumerator`] collects every solution by blocking each model it is given,
//! [`board`] decodes and renders placements and [`dimacs`] exports the clauses.

pub mod board;
pub mod dimacs;
pub mod encoder;
pub mod enumerator;
pub mod oracle;

pub use board::Placement;
pub use encoder::{Cell, Clause, ConstraintEncoder, Literal};
pub use enumerator::{Enumeration, SolutionEnumerator};
pub use oracle::{BatsatOracle, Model, SatOracle};
