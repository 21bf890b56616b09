#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! CNF encoding of the N-Queens problem.
//!
//! Every cell `(row, col)` of the `n×n` board is one Boolean variable, numbered
//!
//! ```text
//! var = row * n + col + 1        row, col ∈ [0, n)
//! ```
//!
//! so variables cover exactly `1..=n²` and `0` stays free as the DIMACS clause terminator.
//!
//! Two clause families are generated:
//! - **Row coverage**: one clause per row listing all `n` cells of that row, so every row
//!   holds at least one queen.
//! - **Pairwise conflict**: for every unordered pair of distinct cells that share a row,
//!   a column or a diagonal, the clause `(¬a ∨ ¬b)`. Each pair is emitted once, when the
//!   second cell's variable is greater than the first's.
//!
//! There is no separate at-most-one-per-row construct: row uniqueness comes from the
//! same-row conflict clauses alone.

use crate::error::QueensError;
use itertools::{Itertools, iproduct};
use smallvec::SmallVec;

/// A signed DIMACS-style literal: `v` for "cell `v` holds a queen", `-v` for its negation.
pub type Literal = i32;

/// A disjunction of literals. Conflict clauses always hold two literals.
pub type Clause = SmallVec<[Literal; 4]>;

/// A board cell, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Cell {
    /// Creates a cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if a queen on `self` would attack a queen on `other`.
    ///
    /// A cell never attacks itself.
    #[must_use]
    pub const fn attacks(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

/// Generates the N-Queens clauses for a fixed board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintEncoder {
    n: usize,
}

impl ConstraintEncoder {
    /// Creates an encoder for an `n×n` board.
    ///
    /// # Errors
    ///
    /// [`QueensError::BoardTooLarge`] if `n²` does not fit in a positive [`Literal`].
    pub fn new(n: usize) -> Result<Self, QueensError> {
        n.checked_mul(n)
            .and_then(|cells| Literal::try_from(cells).ok())
            .ok_or(QueensError::BoardTooLarge(n))?;
        Ok(Self { n })
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    /// Number of variables, `n²`.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.n * self.n
    }

    /// The variable of a cell.
    ///
    /// # Panics
    ///
    /// If the cell is off the board.
    #[must_use]
    pub fn variable(&self, cell: Cell) -> Literal {
        assert!(
            cell.row < self.n && cell.col < self.n,
            "cell {cell:?} is off the {n}x{n} board",
            n = self.n
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let var = (cell.row * self.n + cell.col + 1) as Literal;
        var
    }

    /// The cell of a variable, ignoring the literal's sign. `None` for `0` or a
    /// variable beyond `n²`.
    #[must_use]
    pub fn cell(&self, literal: Literal) -> Option<Cell> {
        let var = usize::try_from(literal.unsigned_abs()).ok()?;
        (1..=self.num_vars())
            .contains(&var)
            .then(|| Cell::new((var - 1) / self.n, (var - 1) % self.n))
    }

    /// All cells in variable order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + Clone + use<> {
        let n = self.n;
        iproduct!(0..n, 0..n).map(|(row, col)| Cell::new(row, col))
    }

    /// One clause per row: at least one queen in that row.
    pub fn row_clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        (0..self.n).map(move |row| {
            (0..self.n)
                .map(|col| self.variable(Cell::new(row, col)))
                .collect()
        })
    }

    /// One binary clause per attacking pair of cells.
    pub fn conflict_clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        iproduct!(self.cells(), self.cells()).filter_map(move |(a, b)| {
            let (var_a, var_b) = (self.variable(a), self.variable(b));
            (var_b > var_a && a.attacks(b)).then(|| SmallVec::from_slice(&[-var_a, -var_b]))
        })
    }

    /// Row-coverage clauses followed by conflict clauses.
    pub fn clauses(&self) -> impl Iterator<Item = Clause> + '_ {
        self.row_clauses().chain(self.conflict_clauses())
    }

    /// Cells assigned `true` by a model, in variable order.
    #[must_use]
    pub fn decode(&self, model: &[Literal]) -> Vec<Cell> {
        model
            .iter()
            .filter(|&&lit| lit > 0)
            .filter_map(|&lit| self.cell(lit))
            .sorted()
            .collect()
    }
}

/// Number of attacking cell pairs on an `n×n` board: `2·n·C(n,2)` for rows and
/// columns plus `n(n-1)(2n-1)/3` on the diagonals.
#[must_use]
pub const fn attacking_pairs(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    n * n * (n - 1) + n * (n - 1) * (2 * n - 1) / 3
}
