//! The SAT backend seam.
//!
//! The N-Queens pipeline never solves anything itself. It talks to a [`SatOracle`]
//! through exactly two operations: add a clause, and solve (returning a full model or
//! `None` when the clauses are unsatisfiable). Literals use the DIMACS convention: a
//! positive integer is a variable, its negation the negated variable, `0` is invalid.
//!
//! [`BatsatOracle`] adapts `rustsat`'s interface over the `BatSat` solver; any other
//! backend can be dropped in by implementing the trait.

use crate::error::OracleError;
use crate::queens::encoder::Literal;
use rustsat::solvers::{Solve, SolverResult};
use rustsat::types::{Clause as SatClause, Lit, TernaryVal};
use rustsat_batsat::BasicSolver;

/// A full assignment: one literal per variable `1..=max_var`, positive when the
/// variable is true.
pub type Model = Vec<Literal>;

/// An incremental SAT solver used as a black box.
pub trait SatOracle {
    /// Adds a clause permanently.
    ///
    /// # Errors
    ///
    /// If a literal is invalid or the backend rejects the clause.
    fn add_clause(&mut self, literals: &[Literal]) -> Result<(), OracleError>;

    /// Solves the clauses added so far.
    ///
    /// Returns `Ok(None)` when they are unsatisfiable.
    ///
    /// # Errors
    ///
    /// If the backend fails or is interrupted.
    fn solve(&mut self) -> Result<Option<Model>, OracleError>;
}

impl<O: SatOracle + ?Sized> SatOracle for &mut O {
    fn add_clause(&mut self, literals: &[Literal]) -> Result<(), OracleError> {
        (**self).add_clause(literals)
    }

    fn solve(&mut self) -> Result<Option<Model>, OracleError> {
        (**self).solve()
    }
}

impl<O: SatOracle + ?Sized> SatOracle for Box<O> {
    fn add_clause(&mut self, literals: &[Literal]) -> Result<(), OracleError> {
        (**self).add_clause(literals)
    }

    fn solve(&mut self) -> Result<Option<Model>, OracleError> {
        (**self).solve()
    }
}

/// [`SatOracle`] backed by `rustsat-batsat`.
#[derive(Default)]
pub struct BatsatOracle {
    solver: BasicSolver,
    max_var: Literal,
}

impl BatsatOracle {
    /// Creates an oracle with no clauses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest variable mentioned by any clause so far.
    #[must_use]
    pub const fn max_var(&self) -> Literal {
        self.max_var
    }
}

impl std::fmt::Debug for BatsatOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatsatOracle")
            .field("max_var", &self.max_var)
            .finish_non_exhaustive()
    }
}

fn to_lit(literal: Literal) -> Result<Lit, OracleError> {
    if literal == 0 {
        return Err(OracleError::InvalidLiteral(literal));
    }
    Lit::from_ipasir(literal).map_err(|_| OracleError::InvalidLiteral(literal))
}

impl SatOracle for BatsatOracle {
    fn add_clause(&mut self, literals: &[Literal]) -> Result<(), OracleError> {
        let clause = literals
            .iter()
            .map(|&literal| to_lit(literal))
            .collect::<Result<SatClause, _>>()?;

        self.solver
            .add_clause(clause)
            .map_err(|err| OracleError::Backend(err.to_string()))?;

        if let Some(max) = literals.iter().map(|lit| lit.abs()).max() {
            self.max_var = self.max_var.max(max);
        }
        Ok(())
    }

    fn solve(&mut self) -> Result<Option<Model>, OracleError> {
        let result = self
            .solver
            .solve()
            .map_err(|err| OracleError::Backend(err.to_string()))?;

        match result {
            SolverResult::Unsat => Ok(None),
            SolverResult::Interrupted => Err(OracleError::Interrupted),
            SolverResult::Sat => (1..=self.max_var)
                .map(|var| {
                    let value = self
                        .solver
                        .lit_val(to_lit(var)?)
                        .map_err(|err| OracleError::Backend(err.to_string()))?;
                    Ok(if value == TernaryVal::True { var } else { -var })
                })
                .collect::<Result<Model, _>>()
                .map(Some),
        }
    }
}
