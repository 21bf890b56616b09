//! DIMACS CNF output for generated clause sets.
//!
//! ```text
//! c <comment>
//! p cnf <num_vars> <num_clauses>
//! 1 2 3 0
//! -1 -2 0
//! ```

use crate::queens::encoder::Clause;
use itertools::Itertools;
use std::io::{self, Write};

/// Writes `clauses` in DIMACS CNF format.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_dimacs<W: Write>(
    out: &mut W,
    comment: &str,
    num_vars: usize,
    clauses: &[Clause],
) -> io::Result<()> {
    for line in comment.lines() {
        writeln!(out, "c {line}")?;
    }
    writeln!(out, "p cnf {num_vars} {}", clauses.len())?;
    for clause in clauses {
        writeln!(out, "{} 0", clause.iter().join(" "))?;
    }
    Ok(())
}
