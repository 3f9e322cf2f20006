//! Matrix Module
//!
//! Immutable dense matrix of exact rationals.

use num_rational::BigRational;
use num_traits::Zero;

// == Matrix ==
/// Dense row-major matrix of exact rational entries.
///
/// Always rectangular with at least one row and one column. Fields are private
/// so a constructed matrix cannot be mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<BigRational>>,
}

impl Matrix {
    // == Constructor ==
    /// Builds a matrix from rows that are already known to be rectangular.
    ///
    /// Returns None if `data` is empty, has an empty first row, or is ragged.
    pub fn from_rows(data: Vec<Vec<BigRational>>) -> Option<Self> {
        let rows = data.len();
        let cols = data.first().map(Vec::len)?;
        if cols == 0 || data.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Wraps rows produced by a shape-preserving operation on an existing matrix.
    pub(crate) fn from_rows_unchecked(data: Vec<Vec<BigRational>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        debug_assert!(rows > 0 && cols > 0);
        Self { rows, cols, data }
    }

    /// Builds a matrix from small integers. Handy for tests and examples.
    pub fn from_integers<const C: usize>(data: &[[i64; C]]) -> Option<Self> {
        let rows = data
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| BigRational::from_integer(v.into()))
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Square identity matrix of size `n` (n >= 1).
    pub fn identity(n: usize) -> Option<Self> {
        let data = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            BigRational::from_integer(1.into())
                        } else {
                            BigRational::zero()
                        }
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(data)
    }

    // == Accessors ==
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &BigRational {
        &self.data[row][col]
    }

    pub fn row(&self, row: usize) -> &[BigRational] {
        &self.data[row]
    }

    /// Iterates rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[BigRational]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Copies column `col` out as a vector.
    pub fn column(&self, col: usize) -> Vec<BigRational> {
        self.data.iter().map(|row| row[col].clone()).collect()
    }

    /// Consumes the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<BigRational>> {
        self.data
    }

    // == Derived Matrices ==
    /// Returns the transpose as a new matrix.
    pub fn transpose(&self) -> Self {
        let data = (0..self.cols).map(|c| self.column(c)).collect();
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    // == Products ==
    /// Computes `M · v`. `v` must have `cols()` entries.
    pub fn mul_vector(&self, v: &[BigRational]) -> Vec<BigRational> {
        debug_assert_eq!(v.len(), self.cols);
        self.data
            .iter()
            .map(|row| dot(row, v))
            .collect()
    }

    /// Computes `wᵀ · M`. `w` must have `rows()` entries.
    pub fn left_mul_vector(&self, w: &[BigRational]) -> Vec<BigRational> {
        debug_assert_eq!(w.len(), self.rows);
        (0..self.cols)
            .map(|c| {
                self.data
                    .iter()
                    .zip(w)
                    .fold(BigRational::zero(), |acc, (row, wi)| acc + &row[c] * wi)
            })
            .collect()
    }

    /// True when every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(Zero::is_zero)
    }
}

fn dot(a: &[BigRational], b: &[BigRational]) -> BigRational {
    a.iter()
        .zip(b)
        .fold(BigRational::zero(), |acc, (x, y)| acc + x * y)
}
