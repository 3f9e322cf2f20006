//! Reducer Module
//!
//! Exact Gauss-Jordan elimination to reduced row-echelon form.

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::linalg::Matrix;

// == Reduction ==
/// Reduced row-echelon form of a matrix together with its pivot columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// The RREF matrix
    pub rref: Matrix,
    /// Pivot column indices in ascending order; one per nonzero RREF row
    pub pivots: Vec<usize>,
}

impl Reduction {
    /// Number of pivots.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Column indices without a pivot, ascending.
    pub fn free_columns(&self) -> Vec<usize> {
        (0..self.rref.cols())
            .filter(|c| !self.pivots.contains(c))
            .collect()
    }
}

// == Reduce ==
/// Reduces `matrix` to RREF using exact rational arithmetic.
///
/// Columns are scanned left to right. The pivot for a column is the topmost
/// nonzero entry at or below the current pivot row; it is swapped up, its row
/// scaled so the pivot is exactly 1, and the column cleared in every other row.
pub fn reduce(matrix: &Matrix) -> Reduction {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let mut a = matrix.clone().into_rows();
    let mut pivots = Vec::with_capacity(rows.min(cols));
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row == rows {
            break;
        }

        let Some(found) = (pivot_row..rows).find(|&r| !a[r][col].is_zero()) else {
            continue;
        };
        a.swap(pivot_row, found);

        let inv = a[pivot_row][col].recip();
        for entry in a[pivot_row].iter_mut().skip(col) {
            *entry *= &inv;
        }
        debug_assert!(a[pivot_row][col].is_one());

        let pivot = a[pivot_row].clone();
        for (r, row) in a.iter_mut().enumerate() {
            if r == pivot_row || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for (entry, p) in row.iter_mut().zip(&pivot).skip(col) {
                *entry -= &factor * p;
            }
        }

        pivots.push(col);
        pivot_row += 1;
    }

    Reduction {
        rref: Matrix::from_rows_unchecked(a),
        pivots,
    }
}

/// Zero vector of length `n`.
pub(crate) fn zeros(n: usize) -> Vec<BigRational> {
    vec![BigRational::zero(); n]
}

/// True when every entry of `v` is zero.
pub(crate) fn is_zero_vector(v: &[BigRational]) -> bool {
    v.iter().all(Zero::is_zero)
}
