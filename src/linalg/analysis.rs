//! Analysis Module
//!
//! Bundles the reduction of a matrix and its transpose into the four
//! fundamental subspaces, and checks the result before it is handed out.

use crate::error::{Result, SubspaceError};
use crate::linalg::reduce::{is_zero_vector, reduce};
use crate::linalg::subspace::{self, SubspaceResult};
use crate::linalg::Matrix;

// == Compute Result ==
/// Everything computed for one matrix. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeResult {
    /// The input matrix
    pub matrix: Matrix,
    /// Reduced row-echelon form of `matrix`
    pub rref: Matrix,
    /// Pivot columns of `rref`
    pub pivots: Vec<usize>,
    pub column_space: SubspaceResult,
    pub null_space: SubspaceResult,
    pub row_space: SubspaceResult,
    pub left_null_space: SubspaceResult,
}

impl ComputeResult {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }

    pub fn cols(&self) -> usize {
        self.matrix.cols()
    }

    /// True when all dimension identities hold.
    pub fn dimensions_consistent(&self) -> bool {
        let rank = self.rank();
        self.column_space.dimension() == rank
            && self.row_space.dimension() == rank
            && self.null_space.dimension() + rank == self.cols()
            && self.left_null_space.dimension() + rank == self.rows()
    }

    // == Verify ==
    /// Checks rank-nullity on both sides, `M·v = 0` for every null space vector
    /// and `wᵀ·M = 0` for every left null space vector.
    pub fn verify(&self) -> Result<()> {
        if !self.dimensions_consistent() {
            return Err(SubspaceError::ArithmeticInvariant(format!(
                "dimension mismatch for {}x{} matrix of rank {}: column {}, row {}, null {}, left null {}",
                self.rows(),
                self.cols(),
                self.rank(),
                self.column_space.dimension(),
                self.row_space.dimension(),
                self.null_space.dimension(),
                self.left_null_space.dimension(),
            )));
        }

        if let Some(i) = self
            .null_space
            .basis
            .iter()
            .position(|v| !is_zero_vector(&self.matrix.mul_vector(v)))
        {
            return Err(SubspaceError::ArithmeticInvariant(format!(
                "null space vector {} is not annihilated by the matrix",
                i
            )));
        }

        if let Some(i) = self
            .left_null_space
            .basis
            .iter()
            .position(|w| !is_zero_vector(&self.matrix.left_mul_vector(w)))
        {
            return Err(SubspaceError::ArithmeticInvariant(format!(
                "left null space vector {} is not annihilated by the matrix",
                i
            )));
        }

        Ok(())
    }
}

// == Analyze ==
/// Reduces `matrix` and its transpose and extracts all four subspaces.
pub fn analyze(matrix: &Matrix) -> ComputeResult {
    let reduction = reduce(matrix);
    let transpose_reduction = reduce(&matrix.transpose());

    ComputeResult {
        column_space: subspace::column_space(matrix, &reduction),
        null_space: subspace::null_space(&reduction),
        row_space: subspace::row_space(&reduction),
        left_null_space: subspace::left_null_space(&transpose_reduction),
        matrix: matrix.clone(),
        rref: reduction.rref,
        pivots: reduction.pivots,
    }
}
