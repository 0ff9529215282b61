//! The N-queens puzzle, encoded as a propositional formula: exactly one queen per
//! row, exactly one per column, and at most one per diagonal.

use crate::assignment::Assignments;
use crate::expr::builder::{and, and_many, not, or, or_many, var};
use crate::expr::Expr;
use crate::tseitin::names::LexicographicNames;

/// An `n`-by-`n` board, with one variable per cell named `{column letter}{row
/// number}` — the same bijective-base-26 column naming
/// [`LexicographicNames`] uses for auxiliary variables elsewhere, reused here so
/// the two "give me the next unused short name" needs in this crate share one
/// implementation.
pub struct Board {
    n: usize,
    cells: Vec<Expr>,
    column_letters: Vec<String>,
}

impl Board {
    pub fn new(n: usize) -> Self {
        let column_letters: Vec<String> = LexicographicNames::new().take(n).collect();
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(var(format!("{}{}", column_letters[col], row + 1)));
            }
        }
        Board { n, cells, column_letters }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    fn at(&self, col: i64, row: i64) -> Option<&Expr> {
        if col < 0 || row < 0 || col as usize >= self.n || row as usize >= self.n {
            return None;
        }
        self.cells.get(row as usize * self.n + col as usize)
    }

    fn row(&self, row: usize) -> Vec<Expr> {
        (0..self.n).map(|col| self.cells[row * self.n + col].clone()).collect()
    }

    fn col(&self, col: usize) -> Vec<Expr> {
        (0..self.n).map(|row| self.cells[row * self.n + col].clone()).collect()
    }

    /// Cells on the diagonal running from upper-left to lower-right that passes
    /// through column `offset` of row 0 (negative offsets reach rows below row 0
    /// instead).
    fn ldiag(&self, offset: i64) -> Vec<Expr> {
        let span = 2 * self.n as i64 - 1;
        (0..span).filter_map(|j| self.at(j + offset, j).cloned()).collect()
    }

    /// The mirror-image diagonal, running from upper-right to lower-left.
    fn rdiag(&self, offset: i64) -> Vec<Expr> {
        let span = 2 * self.n as i64 - 1;
        let n = self.n as i64;
        (0..span).filter_map(|j| self.at(j + offset, n - 1 - j).cloned()).collect()
    }

    /// `exactly_one(vars)`: one of `vars` is true and the rest are false.
    fn exactly_one(vars: Vec<Expr>) -> Expr {
        let n = vars.len();
        let mut disjuncts = Vec::with_capacity(n);
        for i in 0..n {
            let this_one = vars[i].clone();
            let mut others: Vec<Expr> = vars.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, e)| e.clone()).collect();
            let none_of_the_others = if others.len() == 1 { not(others.remove(0)) } else { not(or_many(others)) };
            disjuncts.push(and(this_one, none_of_the_others));
        }
        or_many(disjuncts)
    }

    /// `at_most_one(vars)`: either exactly one is true, or none are.
    fn at_most_one(vars: Vec<Expr>) -> Expr {
        or(Board::exactly_one(vars.clone()), not(or_many(vars)))
    }

    /// The full N-queens constraint: one queen per row, one per column, at most
    /// one per diagonal.
    pub fn formula(&self) -> Expr {
        let one_per_row = and_many((0..self.n).map(|r| Board::exactly_one(self.row(r))).collect());
        let one_per_col = and_many((0..self.n).map(|c| Board::exactly_one(self.col(c))).collect());

        let n = self.n as i64;
        let diag_constraints = |diag: Vec<Expr>| -> Option<Expr> {
            if diag.len() < 2 { None } else { Some(Board::at_most_one(diag)) }
        };
        let ldiags = and_many((1 - n..n).filter_map(|i| diag_constraints(self.ldiag(i))).collect());
        let rdiags = and_many((1 - n..n).filter_map(|i| diag_constraints(self.rdiag(i))).collect());

        and_many(vec![one_per_row, one_per_col, ldiags, rdiags])
    }

    /// Read a satisfying assignment back into board coordinates `(col, row)`,
    /// both 0-indexed.
    pub fn extract_positions(&self, assignments: &Assignments) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for row in 0..self.n {
            for col in 0..self.n {
                let Expr::Var(v) = &self.cells[row * self.n + col] else {
                    unreachable!("board cells are always bare variables")
                };
                if assignments.get(v) == Some(true) {
                    positions.push((col, row));
                }
            }
        }
        positions
    }

    /// Render `positions` as an ASCII board, one queen per occupied cell.
    pub fn render(&self, positions: &[(usize, usize)]) -> String {
        let mut grid = vec![vec!['.'; self.n]; self.n];
        for &(col, row) in positions {
            grid[row][col] = 'Q';
        }
        let mut out = String::new();
        for row in &grid {
            for cell in row {
                out.push(*cell);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    pub fn column_letters(&self) -> &[String] {
        &self.column_letters
    }
}
