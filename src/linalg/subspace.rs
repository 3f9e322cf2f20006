//! Subspace Extraction Module
//!
//! Derives bases of the four fundamental subspaces from RREF data.

use std::fmt;

use num_rational::BigRational;
use num_traits::{One, Zero};
use serde::Serialize;

use crate::linalg::reduce::{zeros, Reduction};
use crate::linalg::Matrix;

// == Subspace Kind ==
/// Which of the four fundamental subspaces a basis spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubspaceKind {
    ColumnSpace,
    NullSpace,
    RowSpace,
    LeftNullSpace,
}

impl fmt::Display for SubspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubspaceKind::ColumnSpace => "column space",
            SubspaceKind::NullSpace => "null space",
            SubspaceKind::RowSpace => "row space",
            SubspaceKind::LeftNullSpace => "left null space",
        };
        f.write_str(name)
    }
}

// == Subspace Result ==
/// An ordered basis for one fundamental subspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubspaceResult {
    /// Which subspace this is
    pub kind: SubspaceKind,
    /// Basis vectors, each of length `ambient_dimension`
    pub basis: Vec<Vec<BigRational>>,
    /// The `n` in "subspace of R^n"
    pub ambient_dimension: usize,
}

impl SubspaceResult {
    pub fn new(kind: SubspaceKind, basis: Vec<Vec<BigRational>>, ambient_dimension: usize) -> Self {
        Self {
            kind,
            basis,
            ambient_dimension,
        }
    }

    /// Dimension of the subspace, i.e. the number of basis vectors.
    pub fn dimension(&self) -> usize {
        self.basis.len()
    }

    /// True for the trivial subspace {0}.
    pub fn is_trivial(&self) -> bool {
        self.basis.is_empty()
    }
}

// == Extraction ==
/// Row space basis: the nonzero rows of the RREF, in pivot order.
pub fn row_space(reduction: &Reduction) -> SubspaceResult {
    let basis = reduction
        .rref
        .iter_rows()
        .take(reduction.rank())
        .map(<[BigRational]>::to_vec)
        .collect();
    SubspaceResult::new(SubspaceKind::RowSpace, basis, reduction.rref.cols())
}

/// Column space basis: the original matrix's columns at the pivot indices.
pub fn column_space(original: &Matrix, reduction: &Reduction) -> SubspaceResult {
    let basis = reduction
        .pivots
        .iter()
        .map(|&c| original.column(c))
        .collect();
    SubspaceResult::new(SubspaceKind::ColumnSpace, basis, original.rows())
}

/// Null space basis, one vector per free column in ascending order.
///
/// For free column `f` the vector has 1 at `f`, 0 at every other free column,
/// and `-rref[i][f]` at the pivot column of row `i`.
pub fn null_space(reduction: &Reduction) -> SubspaceResult {
    SubspaceResult::new(
        SubspaceKind::NullSpace,
        kernel_basis(reduction),
        reduction.rref.cols(),
    )
}

/// Left null space basis: the null space construction on the transpose's RREF.
pub fn left_null_space(transpose_reduction: &Reduction) -> SubspaceResult {
    SubspaceResult::new(
        SubspaceKind::LeftNullSpace,
        kernel_basis(transpose_reduction),
        transpose_reduction.rref.cols(),
    )
}

fn kernel_basis(reduction: &Reduction) -> Vec<Vec<BigRational>> {
    let rref = &reduction.rref;
    reduction
        .free_columns()
        .into_iter()
        .map(|free| {
            let mut v = zeros(rref.cols());
            v[free] = BigRational::one();
            for (row, &pivot) in reduction.pivots.iter().enumerate() {
                let coeff = rref.get(row, free);
                if !coeff.is_zero() {
                    v[pivot] = -coeff;
                }
            }
            v
        })
        .collect()
}
