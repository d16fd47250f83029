// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Property-Based Tests (proptest) for lawt-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for lawt-math using proptest.
//!
//! Covers: transpose involution, addition commutativity, multiplication
//! associativity, Gauss-Jordan round trip, 2x2 eigen relations, accuracy
//! bounds.

use lawt_math::accuracy::estimate;
use lawt_math::eigen::{eigenvalues, eigenvectors};
use lawt_math::elementary::{add, multiply, transpose};
use lawt_math::inverse::invert;
use lawt_types::error::{LawtError, NumericError};
use lawt_types::matrix::Matrix;
use lawt_types::operation::OperationKind;
use proptest::prelude::*;

fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(prop::collection::vec(-10.0f64..10.0, cols), rows)
        .prop_map(|r| Matrix::new(r, "A").unwrap())
}

fn any_matrix(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(r, c)| matrix_strategy(r, c))
}

/// Strictly diagonally dominant, so every direct pivot stays well away from zero.
fn dominant_square(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(-1.0f64..1.0, n), n),
            prop::collection::vec(1.0f64..5.0, n),
            any::<bool>(),
        )
            .prop_map(move |(mut rows, boost, negate)| {
                for i in 0..n {
                    let d = n as f64 + boost[i];
                    rows[i][i] = if negate { -d } else { d };
                }
                Matrix::new(rows, "A").unwrap()
            })
    })
}

fn max_abs(m: &Matrix) -> f64 {
    m.as_array().iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

// ── Elementary Operation Properties ──────────────────────────────────

proptest! {
    /// transpose(transpose(A)) == A exactly.
    #[test]
    fn transpose_involution(a in any_matrix(7)) {
        prop_assert_eq!(transpose(&transpose(&a)), a);
    }

    /// Transpose swaps dimensions.
    #[test]
    fn transpose_swaps_shape(a in any_matrix(7)) {
        let t = transpose(&a);
        prop_assert_eq!(t.rows(), a.cols());
        prop_assert_eq!(t.cols(), a.rows());
    }

    /// A + B == B + A.
    #[test]
    fn add_commutative(
        (a, b) in (1usize..6, 1usize..6)
            .prop_flat_map(|(r, c)| (matrix_strategy(r, c), matrix_strategy(r, c)))
    ) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    /// (AB)C ≈ A(BC).
    #[test]
    fn multiply_associative(
        (a, b, c) in (1usize..5, 1usize..5, 1usize..5, 1usize..5)
            .prop_flat_map(|(m, k, l, n)| {
                (matrix_strategy(m, k), matrix_strategy(k, l), matrix_strategy(l, n))
            })
    ) {
        let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        let tol = 1e-9 * (1.0 + max_abs(&left));
        prop_assert!(left.approx_eq(&right, tol),
            "(AB)C = {:?}, A(BC) = {:?}", left.to_rows(), right.to_rows());
    }

    /// Multiplying by the identity is exact.
    #[test]
    fn multiply_identity(a in any_matrix(6)) {
        let i = Matrix::identity(a.cols()).unwrap();
        prop_assert_eq!(multiply(&a, &i).unwrap(), a);
    }
}

// ── Gauss-Jordan Properties ──────────────────────────────────────────

proptest! {
    /// A · invert(A) is within 1e-6 of I.
    #[test]
    fn inverse_roundtrip(a in dominant_square(6)) {
        let inv = invert(&a).unwrap();
        let prod = multiply(&a, &inv).unwrap();
        let eye = Matrix::identity(a.rows()).unwrap();
        prop_assert!(prod.approx_eq(&eye, 1e-6), "A·A⁻¹ = {:?}", prod.to_rows());
    }

    /// A matrix with a repeated row is always rejected as singular.
    #[test]
    fn inverse_duplicate_row_singular(a in dominant_square(5).prop_filter("n >= 2", |m| m.rows() >= 2)) {
        let mut rows = a.to_rows();
        let last = rows.len() - 1;
        rows[last] = rows[0].clone();
        let dup = Matrix::new(rows, "A").unwrap();
        let singular = matches!(invert(&dup), Err(LawtError::Numeric(NumericError::Singular { .. })));
        prop_assert!(singular);
    }
}

// ── Eigenvalue Properties ────────────────────────────────────────────

proptest! {
    /// Eigenvalues of a symmetric 2x2 matrix satisfy trace and determinant relations.
    #[test]
    fn eig_2x2_trace_det(
        a00 in -10.0f64..10.0,
        a11 in -10.0f64..10.0,
        a01 in -10.0f64..10.0,
    ) {
        let a = Matrix::new(vec![vec![a00, a01], vec![a01, a11]], "A").unwrap();
        let vals = eigenvalues(&a).unwrap();

        let trace = a00 + a11;
        let det = a00 * a11 - a01 * a01;

        prop_assert!((vals[0] + vals[1] - trace).abs() < 1e-8,
            "λ₁+λ₂ = {}, trace = {}", vals[0] + vals[1], trace);
        prop_assert!((vals[0] * vals[1] - det).abs() < 1e-6,
            "λ₁·λ₂ = {}, det = {}", vals[0] * vals[1], det);
        prop_assert!(vals[0] >= vals[1], "not larger-first: {:?}", vals);
    }

    /// Returned eigenvectors satisfy A v = λ v for symmetric input.
    #[test]
    fn eig_2x2_vectors(
        a00 in -10.0f64..10.0,
        a11 in -10.0f64..10.0,
        a01 in 0.1f64..10.0,
    ) {
        let a = Matrix::new(vec![vec![a00, a01], vec![a01, a11]], "A").unwrap();
        let res = eigenvectors(&a).unwrap();
        prop_assert!(!res.placeholder);
        for (lambda, v) in res.values.iter().zip(&res.vectors) {
            let r0 = a00 * v[0] + a01 * v[1] - lambda * v[0];
            let r1 = a01 * v[0] + a11 * v[1] - lambda * v[1];
            prop_assert!(r0.abs() < 1e-8 && r1.abs() < 1e-8,
                "residual ({}, {}) for λ = {}", r0, r1, lambda);
        }
    }

    /// trace² < 4·det always fails with ComplexEigenvaluesUnsupported.
    #[test]
    fn eig_2x2_complex_rejected(
        re in -5.0f64..5.0,
        im in 0.1f64..5.0,
    ) {
        // [[re, -im], [im, re]] has eigenvalues re ± i·im.
        let a = Matrix::new(vec![vec![re, -im], vec![im, re]], "A").unwrap();
        let rejected = matches!(
            eigenvalues(&a),
            Err(LawtError::Numeric(NumericError::ComplexEigenvaluesUnsupported { .. }))
        );
        prop_assert!(rejected);
    }
}

// ── Accuracy Properties ──────────────────────────────────────────────

proptest! {
    /// Scores are positive and never above 99.9.
    #[test]
    fn accuracy_bounded(a in any_matrix(8), op_idx in 0usize..6) {
        let s = estimate(OperationKind::ALL[op_idx], &a).value();
        prop_assert!(s > 0.0 && s <= 99.9, "score {} out of range", s);
    }
}
