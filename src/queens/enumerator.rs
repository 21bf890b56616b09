#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Exhaustive enumeration of N-Queens placements by model blocking.
//!
//! The enumerator feeds the encoded clauses to a [`SatOracle`], then loops:
//!
//! 1. ask the oracle for a model; stop when it answers unsatisfiable,
//! 2. decode the positive literals into a [`Placement`] and count it,
//! 3. add the blocking clause `(¬l₁ ∨ ¬l₂ ∨ … ∨ ¬lₖ)` built from every literal of the
//!    model, so that exact assignment can never be returned again.
//!
//! Every distinct satisfying assignment is therefore found exactly once. No
//! canonicalisation is attempted: rotations and reflections of a placement are counted
//! as distinct solutions.
//!
//! All clauses handed to the oracle, blocking clauses included, are also kept in an
//! append-only log so they can be displayed or exported afterwards.

use crate::error::QueensError;
use crate::queens::board::Placement;
use crate::queens::encoder::{Clause, ConstraintEncoder};
use crate::queens::oracle::SatOracle;

/// Summary of a complete enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Enumeration {
    /// Number of distinct placements found.
    pub count: usize,
    /// The first placement returned by the oracle, if any.
    pub first: Option<Placement>,
}

/// Drives a [`SatOracle`] through every N-Queens solution.
#[derive(Debug)]
pub struct SolutionEnumerator<O> {
    encoder: ConstraintEncoder,
    oracle: O,
    clauses: Vec<Clause>,
    encoded: usize,
    found: usize,
    exhausted: bool,
}

impl<O: SatOracle> SolutionEnumerator<O> {
    /// Encodes an `n×n` board and hands every clause to `oracle`.
    ///
    /// # Errors
    ///
    /// - [`QueensError::BoardTooLarge`] if the board cannot be encoded.
    /// - [`QueensError::Oracle`] if the oracle rejects a clause.
    pub fn new(n: usize, oracle: O) -> Result<Self, QueensError> {
        let encoder = ConstraintEncoder::new(n)?;
        let mut enumerator = Self {
            encoder,
            oracle,
            clauses: Vec::new(),
            encoded: 0,
            found: 0,
            exhausted: false,
        };

        for clause in encoder.clauses() {
            enumerator.add_clause(clause)?;
        }
        enumerator.encoded = enumerator.clauses.len();

        tracing::debug!(
            n,
            vars = encoder.num_vars(),
            clauses = enumerator.encoded,
            "constraints generated"
        );
        Ok(enumerator)
    }

    fn add_clause(&mut self, clause: Clause) -> Result<(), QueensError> {
        self.oracle.add_clause(&clause)?;
        self.clauses.push(clause);
        Ok(())
    }

    /// Finds the next placement not returned before, or `None` once the oracle reports
    /// the remaining formula unsatisfiable.
    ///
    /// # Errors
    ///
    /// [`QueensError::Oracle`] if the oracle fails.
    pub fn next_solution(&mut self) -> Result<Option<Placement>, QueensError> {
        if self.exhausted {
            return Ok(None);
        }

        // An empty model means there are no variables at all: nothing to place or block.
        let Some(model) = self.oracle.solve()?.filter(|model| !model.is_empty()) else {
            self.exhausted = true;
            tracing::debug!(found = self.found, "enumeration finished");
            return Ok(None);
        };

        let placement = Placement::new(self.encoder.size(), self.encoder.decode(&model));
        self.found += 1;

        let blocking: Clause = model.iter().map(|&lit| -lit).collect();
        tracing::trace!(solution = self.found, ?blocking, "blocking model");
        self.add_clause(blocking)?;

        Ok(Some(placement))
    }

    /// Iterates over the remaining placements.
    pub fn solutions(&mut self) -> Solutions<'_, O> {
        Solutions { enumerator: self }
    }

    /// Runs the enumeration to completion.
    ///
    /// # Errors
    ///
    /// [`QueensError::Oracle`] if the oracle fails.
    pub fn enumerate(&mut self) -> Result<Enumeration, QueensError> {
        let mut summary = Enumeration::default();

        while let Some(placement) = self.next_solution()? {
            summary.count += 1;
            if summary.first.is_none() {
                summary.first = Some(placement);
            }
        }

        Ok(summary)
    }

    /// The encoder in use.
    pub const fn encoder(&self) -> &ConstraintEncoder {
        &self.encoder
    }

    /// Every clause given to the oracle so far, blocking clauses last.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Only the clauses produced by the encoder.
    pub fn encoded_clauses(&self) -> &[Clause] {
        &self.clauses[..self.encoded]
    }

    /// Number of blocking clauses added, one per placement found.
    pub fn blocking_clauses(&self) -> usize {
        self.clauses.len() - self.encoded
    }

    /// Number of placements found so far.
    pub const fn found(&self) -> usize {
        self.found
    }

    /// Gives the oracle back.
    pub fn into_oracle(self) -> O {
        self.oracle
    }
}

/// Iterator over placements, see [`SolutionEnumerator::solutions`].
#[derive(Debug)]
pub struct Solutions<'a, O> {
    enumerator: &'a mut SolutionEnumerator<O>,
}

impl<O: SatOracle> Iterator for Solutions<'_, O> {
    type Item = Result<Placement, QueensError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.enumerator.next_solution().transpose()
    }
}
