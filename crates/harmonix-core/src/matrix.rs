//! Exact rational matrices and row reduction.
//!
//! # Why exact arithmetic
//!
//! The kernel extraction hinges on telling pivot columns from free
//! columns. Floating-point elimination makes that call against a
//! tolerance, and a false near-zero pivot silently changes the reported
//! null-space dimension. Over arbitrary-precision rationals a pivot is
//! zero or it is not; row reduction cannot fail and the reduced form is
//! exact.
//!
//! # Algorithm
//!
//! Gauss-Jordan elimination: for each column, the first nonzero entry
//! at or below the current row is swapped up, scaled to 1, and
//! eliminated from every other row; the column index is recorded as a
//! pivot. Columns that never yield a pivot are free and parametrize the
//! null space.

use ndarray::Array2;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// A dense matrix of arbitrary-precision rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalMatrix {
    rows: Vec<Vec<BigRational>>,
    cols: usize,
}

impl RationalMatrix {
    /// Lift an integer matrix into rationals.
    #[must_use]
    pub fn from_integer(matrix: &Array2<i64>) -> Self {
        let (rows, cols) = matrix.dim();
        Self {
            rows: (0..rows)
                .map(|r| {
                    (0..cols)
                        .map(|c| BigRational::from_integer(BigInt::from(matrix[[r, c]])))
                        .collect()
                })
                .collect(),
            cols,
        }
    }

    /// Build from rows of rationals. All rows must share a length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<BigRational>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == cols));
        Self { rows, cols }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`.
    pub fn entry(&self, row: usize, col: usize) -> &BigRational {
        &self.rows[row][col]
    }

    /// Apply the matrix to a vector (length = column count).
    #[must_use]
    pub fn apply(&self, vector: &[BigRational]) -> Vec<BigRational> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(vector)
                    .fold(BigRational::zero(), |acc, (a, b)| acc + a * b)
            })
            .collect()
    }

    /// Row-reduce into reduced row-echelon form, tracking pivots.
    pub fn into_rref(mut self) -> Rref {
        let mut pivots = Vec::new();
        let mut next_row = 0;
        for col in 0..self.cols {
            if next_row == self.rows.len() {
                break;
            }
            let Some(pivot_row) =
                (next_row..self.rows.len()).find(|&r| !self.rows[r][col].is_zero())
            else {
                continue;
            };
            self.rows.swap(next_row, pivot_row);

            let pivot = self.rows[next_row][col].clone();
            for entry in &mut self.rows[next_row] {
                *entry = &*entry / &pivot;
            }

            let lead = self.rows[next_row].clone();
            for (r, row) in self.rows.iter_mut().enumerate() {
                if r == next_row || row[col].is_zero() {
                    continue;
                }
                let factor = row[col].clone();
                for (entry, lead_entry) in row.iter_mut().zip(&lead) {
                    *entry = &*entry - &(&factor * lead_entry);
                }
            }

            pivots.push(col);
            next_row += 1;
        }
        Rref {
            matrix: self,
            pivots,
        }
    }
}

/// A matrix in reduced row-echelon form with its pivot bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rref {
    matrix: RationalMatrix,
    pivots: Vec<usize>,
}

impl Rref {
    /// The reduced matrix.
    pub fn matrix(&self) -> &RationalMatrix {
        &self.matrix
    }

    /// Pivot column indices, ascending; one per nonzero row.
    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivots
    }

    /// Rank of the original matrix.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Free (non-pivot) column indices, ascending.
    #[must_use]
    pub fn free_columns(&self) -> Vec<usize> {
        let mut is_pivot = vec![false; self.matrix.cols];
        for &p in &self.pivots {
            is_pivot[p] = true;
        }
        (0..self.matrix.cols).filter(|&c| !is_pivot[c]).collect()
    }

    /// Basis of the null space by free-variable parametrization.
    ///
    /// For each free column `f` (ascending): `v[f] = 1`; for the pivot
    /// column `p` of reduced row `r`, `v[p] = -RREF[r][f]`; all other
    /// entries `0`. The vectors are linearly independent (each is the
    /// only one with a nonzero entry at its own free column) and span
    /// the null space exactly.
    ///
    /// A full-rank matrix yields an empty basis; a zero matrix yields
    /// the identity basis of the whole space.
    #[must_use]
    pub fn null_space_basis(&self) -> Vec<Vec<BigRational>> {
        self.free_columns()
            .into_iter()
            .map(|f| {
                let mut v = vec![BigRational::zero(); self.matrix.cols];
                v[f] = BigRational::one();
                for (row, &p) in self.pivots.iter().enumerate() {
                    v[p] = -self.matrix.rows[row][f].clone();
                }
                v
            })
            .collect()
    }
}
