//! Property-Based Tests for the Linear Algebra Module
//!
//! Uses proptest over small integer and fractional matrices.

use num_rational::BigRational;
use num_traits::{One, Zero};
use proptest::prelude::*;
use serde_json::{json, Value};

use crate::linalg::reduce::is_zero_vector;
use crate::linalg::{analyze, reduce, Canonicalizer, Matrix};

// == Strategies ==
/// Generates matrices of 1..=5 rows and 1..=5 columns with entries in -6..=6.
fn small_matrix_strategy() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(-6i64..=6, cols), rows)
    })
}

/// Same shapes, but entries are fractions p/q with q in 1..=4.
fn fraction_matrix_strategy() -> impl Strategy<Value = Vec<Vec<(i64, i64)>>> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec((-5i64..=5, 1i64..=4), cols), rows)
    })
}

fn to_matrix(data: &[Vec<i64>]) -> Matrix {
    let rows = data
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| BigRational::from_integer(v.into()))
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).unwrap()
}

fn fractions_to_matrix(data: &[Vec<(i64, i64)>]) -> Matrix {
    let rows = data
        .iter()
        .map(|row| {
            row.iter()
                .map(|&(p, q)| BigRational::new(p.into(), q.into()))
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Rank-nullity holds on both sides for every matrix.
    #[test]
    fn prop_dimension_identities(data in small_matrix_strategy()) {
        let m = to_matrix(&data);
        let result = analyze(&m);
        let rank = result.rank();

        prop_assert_eq!(result.column_space.dimension(), rank);
        prop_assert_eq!(result.row_space.dimension(), rank);
        prop_assert_eq!(result.null_space.dimension() + rank, m.cols());
        prop_assert_eq!(result.left_null_space.dimension() + rank, m.rows());
        prop_assert!(result.verify().is_ok());
    }

    // Every null space vector is annihilated exactly.
    #[test]
    fn prop_null_space_annihilated(data in fraction_matrix_strategy()) {
        let m = fractions_to_matrix(&data);
        let result = analyze(&m);

        for v in &result.null_space.basis {
            prop_assert!(is_zero_vector(&m.mul_vector(v)));
        }
        for w in &result.left_null_space.basis {
            prop_assert!(is_zero_vector(&m.left_mul_vector(w)));
        }
    }

    // Row rank equals column rank.
    #[test]
    fn prop_rank_of_transpose(data in small_matrix_strategy()) {
        let m = to_matrix(&data);
        prop_assert_eq!(reduce(&m).rank(), reduce(&m.transpose()).rank());
    }

    // The output really is in reduced row-echelon form.
    #[test]
    fn prop_rref_shape(data in fraction_matrix_strategy()) {
        let m = fractions_to_matrix(&data);
        let red = reduce(&m);

        let mut last_pivot = None;
        for (row, &pivot) in red.pivots.iter().enumerate() {
            prop_assert!(last_pivot.map_or(true, |p| pivot > p), "pivots must move right");
            last_pivot = Some(pivot);

            prop_assert!(red.rref.get(row, pivot).is_one());
            prop_assert!(red.rref.row(row)[..pivot].iter().all(Zero::is_zero));
            for other in 0..red.rref.rows() {
                if other != row {
                    prop_assert!(red.rref.get(other, pivot).is_zero());
                }
            }
        }
        for row in red.rank()..red.rref.rows() {
            prop_assert!(is_zero_vector(red.rref.row(row)));
        }
    }

    // Writing the same values differently does not change the key.
    #[test]
    fn prop_key_ignores_representation(data in small_matrix_strategy()) {
        let canonicalizer = Canonicalizer::default();
        let plain: Vec<Vec<Value>> = data
            .iter()
            .map(|row| row.iter().map(|&v| json!(v)).collect())
            .collect();
        let doubled: Vec<Vec<Value>> = data
            .iter()
            .map(|row| row.iter().map(|&v| json!(format!("{}/2", 2 * v))).collect())
            .collect();

        let (m1, k1) = canonicalizer.canonicalize(&plain).unwrap();
        let (m2, k2) = canonicalizer.canonicalize(&doubled).unwrap();
        prop_assert_eq!(m1, m2);
        prop_assert_eq!(k1, k2);
    }

    // Changing a single entry changes the key.
    #[test]
    fn prop_key_detects_changes(
        data in small_matrix_strategy(),
        pick in any::<prop::sample::Index>()
    ) {
        let canonicalizer = Canonicalizer::default();
        let original: Vec<Vec<Value>> = data
            .iter()
            .map(|row| row.iter().map(|&v| json!(v)).collect())
            .collect();
        let mut changed = original.clone();
        let cols = data[0].len();
        let flat = pick.index(data.len() * cols);
        changed[flat / cols][flat % cols] = json!(data[flat / cols][flat % cols] + 1);

        let (_, k1) = canonicalizer.canonicalize(&original).unwrap();
        let (_, k2) = canonicalizer.canonicalize(&changed).unwrap();
        prop_assert_ne!(k1, k2);
    }
}
