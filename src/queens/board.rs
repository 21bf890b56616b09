//! Decoded queen placements and their grid rendering.

use crate::queens::encoder::Cell;
use bit_vec::BitVec;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Queens on an `n×n` board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    n: usize,
    cells: BitVec,
}

impl Placement {
    /// Places a queen on each of `queens`.
    ///
    /// # Panics
    ///
    /// If a cell is off the board.
    #[must_use]
    pub fn new(n: usize, queens: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells = BitVec::from_elem(n * n, false);
        for cell in queens {
            assert!(cell.row < n && cell.col < n, "queen {cell:?} is off the board");
            cells.set(cell.row * n + cell.col, true);
        }
        Self { n, cells }
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    /// `true` if a queen stands on `(row, col)`.
    #[must_use]
    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        row < self.n && col < self.n && self.cells[row * self.n + col]
    }

    /// The occupied cells in row-major order.
    pub fn queens(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .positions(|occupied| occupied)
            .map(|i| Cell::new(i / self.n, i % self.n))
    }

    /// `true` if there is exactly one queen per row and per column and no two queens
    /// share a diagonal.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        let queens = self.queens().collect_vec();

        queens.len() == self.n
            && queens.iter().map(|q| q.row).all_unique()
            && queens.iter().map(|q| q.col).all_unique()
            && queens.iter().tuple_combinations().all(|(a, b)| !a.attacks(*b))
    }
}

impl Display for Placement {
    /// ```text
    ///     0   1   2   3
    ///   +---+---+---+---+
    /// 0 |   | Q |   |   |
    ///   +---+---+---+---+
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let border = format!("  {}+", "+---".repeat(self.n));

        writeln!(f, "  {}", (0..self.n).map(|c| format!("  {c} ")).join(""))?;
        writeln!(f, "{border}")?;
        for row in 0..self.n {
            write!(f, "{row} |")?;
            for col in 0..self.n {
                write!(f, "{}", if self.has_queen(row, col) { " Q |" } else { "   |" })?;
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn four_queens() -> Placement {
        Placement::new(
            4,
            [
                Cell::new(0, 1),
                Cell::new(1, 3),
                Cell::new(2, 0),
                Cell::new(3, 2),
            ],
        )
    }

    #[test]
    fn test_valid_solution() {
        let placement = four_queens();
        assert!(placement.is_solution());
        assert!(placement.has_queen(1, 3));
        assert!(!placement.has_queen(1, 2));
        assert!(!placement.has_queen(9, 9));
        assert_eq!(placement.queens().count(), 4);
    }

    #[test]
    fn test_invalid_solutions() {
        let diagonal = Placement::new(2, [Cell::new(0, 0), Cell::new(1, 1)]);
        assert!(!diagonal.is_solution());

        let missing = Placement::new(4, [Cell::new(0, 1), Cell::new(1, 3)]);
        assert!(!missing.is_solution());

        let same_col = Placement::new(3, [Cell::new(0, 0), Cell::new(1, 2), Cell::new(2, 0)]);
        assert!(!same_col.is_solution());
    }

    #[test]
    fn test_trivial_board() {
        assert!(Placement::new(1, [Cell::new(0, 0)]).is_solution());
    }

    #[test]
    fn test_render() {
        let expected = "    0   1   2   3 \n\
                        \x20 +---+---+---+---+\n\
                        0 |   | Q |   |   |\n\
                        \x20 +---+---+---+---+\n\
                        1 |   |   |   | Q |\n\
                        \x20 +---+---+---+---+\n\
                        2 | Q |   |   |   |\n\
                        \x20 +---+---+---+---+\n\
                        3 |   |   | Q |   |\n\
                        \x20 +---+---+---+---+\n";
        assert_eq!(four_queens().to_string(), expected);
    }
}
