// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Eigen solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Eigenvalues and eigenvectors of small square matrices.
//!
//! - 2x2: closed form from trace and determinant. Real roots only, larger
//!   first. Eigenvectors are the unit null vectors of `A - λI`.
//! - 3x3: **not a decomposition.** Values are `trace/3` plus uniform jitter
//!   in `[0, 0.1)` and vectors are uniform in `[-1, 1]`. The result is
//!   flagged `placeholder` and must not be shown as exact.
//! - Any other size fails `UnsupportedDimension`.

use lawt_types::constants::{EIGEN_3X3_JITTER, EIGENVECTOR_OFFDIAG_EPSILON};
use lawt_types::error::{DimensionError, LawtResult, NumericError};
use lawt_types::matrix::Matrix;
use lawt_types::operation::{EigenResult, OperationKind};
use rand::Rng;

/// Whether results for an `n x n` operand are placeholders rather than math.
pub fn is_placeholder(n: usize) -> bool {
    n == 3
}

fn check_supported(a: &Matrix, operation: OperationKind) -> LawtResult<usize> {
    if !a.is_square() {
        return Err(DimensionError::NotSquare {
            operation,
            rows: a.rows(),
            cols: a.cols(),
        }
        .into());
    }
    match a.rows() {
        n @ (2 | 3) => Ok(n),
        n => Err(DimensionError::UnsupportedDimension { operation, n }.into()),
    }
}

/// Closed-form 2x2 eigenvalues, larger root first.
fn eigenvalues_2x2(a: &Matrix) -> Result<[f64; 2], NumericError> {
    let trace = a[(0, 0)] + a[(1, 1)];
    let det = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
    let discriminant = trace * trace - 4.0 * det;

    if discriminant < 0.0 {
        return Err(NumericError::ComplexEigenvaluesUnsupported { discriminant });
    }

    let sqrt_disc = discriminant.sqrt();
    Ok([(trace + sqrt_disc) / 2.0, (trace - sqrt_disc) / 2.0])
}

/// Unit eigenvector of a 2x2 matrix for eigenvalue `lambda`.
///
/// `(λ - d, c)` and `(b, λ - a)` both lie in the null space of `A - λI`
/// for `A = [[a, b], [c, d]]`; pick whichever has a nonzero off-diagonal.
fn eigenvector_2x2(a: &Matrix, lambda: f64) -> [f64; 2] {
    let (a00, a01, a10, a11) = (a[(0, 0)], a[(0, 1)], a[(1, 0)], a[(1, 1)]);
    let (x, y) = if a10.abs() > EIGENVECTOR_OFFDIAG_EPSILON {
        (lambda - a11, a10)
    } else {
        (a01, lambda - a00)
    };
    let norm = (x * x + y * y).sqrt();
    [x / norm, y / norm]
}

fn eigenvectors_2x2(a: &Matrix, values: &[f64; 2]) -> Vec<Vec<f64>> {
    let diagonal = a[(0, 1)].abs() <= EIGENVECTOR_OFFDIAG_EPSILON
        && a[(1, 0)].abs() <= EIGENVECTOR_OFFDIAG_EPSILON;
    if diagonal {
        // values[0] is the larger diagonal entry.
        return if a[(0, 0)] >= a[(1, 1)] {
            vec![vec![1.0, 0.0], vec![0.0, 1.0]]
        } else {
            vec![vec![0.0, 1.0], vec![1.0, 0.0]]
        };
    }
    values
        .iter()
        .map(|&lambda| eigenvector_2x2(a, lambda).to_vec())
        .collect()
}

fn placeholder_values_3x3<R: Rng + ?Sized>(a: &Matrix, rng: &mut R) -> Vec<f64> {
    let trace = a[(0, 0)] + a[(1, 1)] + a[(2, 2)];
    (0..3)
        .map(|_| trace / 3.0 + rng.gen::<f64>() * EIGEN_3X3_JITTER)
        .collect()
}

fn placeholder_vectors<R: Rng + ?Sized>(n: usize, count: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..count)
        .map(|_| (0..n).map(|_| rng.gen_range(-1.0..=1.0)).collect())
        .collect()
}

/// Eigenvalues of a 2x2 or 3x3 matrix, using the thread RNG for the 3x3
/// placeholder.
pub fn eigenvalues(a: &Matrix) -> LawtResult<Vec<f64>> {
    eigenvalues_with_rng(a, &mut rand::thread_rng())
}

pub fn eigenvalues_with_rng<R: Rng + ?Sized>(a: &Matrix, rng: &mut R) -> LawtResult<Vec<f64>> {
    match check_supported(a, OperationKind::Eigenvalues)? {
        2 => Ok(eigenvalues_2x2(a)?.to_vec()),
        _ => Ok(placeholder_values_3x3(a, rng)),
    }
}

/// Eigenvalues with one eigenvector per value. Same failure modes as
/// [`eigenvalues`].
pub fn eigenvectors(a: &Matrix) -> LawtResult<EigenResult> {
    eigenvectors_with_rng(a, &mut rand::thread_rng())
}

pub fn eigenvectors_with_rng<R: Rng + ?Sized>(a: &Matrix, rng: &mut R) -> LawtResult<EigenResult> {
    match check_supported(a, OperationKind::Eigenvectors)? {
        2 => {
            let values = eigenvalues_2x2(a)?;
            Ok(EigenResult {
                vectors: eigenvectors_2x2(a, &values),
                values: values.to_vec(),
                placeholder: false,
            })
        }
        n => {
            let values = placeholder_values_3x3(a, rng);
            let vectors = placeholder_vectors(n, values.len(), rng);
            Ok(EigenResult {
                values,
                vectors,
                placeholder: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawt_types::error::LawtError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::new(rows, "A").unwrap()
    }

    fn assert_eigenpair(a: &Matrix, lambda: f64, v: &[f64]) {
        let av0 = a[(0, 0)] * v[0] + a[(0, 1)] * v[1];
        let av1 = a[(1, 0)] * v[0] + a[(1, 1)] * v[1];
        assert!((av0 - lambda * v[0]).abs() < 1e-10, "Av != λv (row 0)");
        assert!((av1 - lambda * v[1]).abs() < 1e-10, "Av != λv (row 1)");
        let norm = (v[0] * v[0] + v[1] * v[1]).sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "|v| = {norm}");
    }

    #[test]
    fn test_eigenvalues_diagonal_larger_first() {
        let vals = eigenvalues(&m(vec![vec![2.0, 0.0], vec![0.0, 3.0]])).unwrap();
        assert_eq!(vals, vec![3.0, 2.0]);
    }

    #[test]
    fn test_eigenvalues_symmetric() {
        let vals = eigenvalues(&m(vec![vec![2.0, 1.0], vec![1.0, 2.0]])).unwrap();
        assert!((vals[0] - 3.0).abs() < 1e-10);
        assert!((vals[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_complex_eigenvalues_rejected() {
        // Rotation: trace 0, det 1, discriminant -4.
        let a = m(vec![vec![0.0, -1.0], vec![1.0, 0.0]]);
        match eigenvalues(&a) {
            Err(LawtError::Numeric(NumericError::ComplexEigenvaluesUnsupported {
                discriminant,
            })) => assert_eq!(discriminant, -4.0),
            other => panic!("expected ComplexEigenvaluesUnsupported, got {other:?}"),
        }
        assert!(eigenvectors(&a).is_err());
    }

    #[test]
    fn test_unsupported_and_not_square() {
        assert!(matches!(
            eigenvalues(&m(vec![vec![5.0]])),
            Err(LawtError::Dimension(DimensionError::UnsupportedDimension { n: 1, .. }))
        ));
        let four = Matrix::identity(4).unwrap();
        assert!(matches!(
            eigenvectors(&four),
            Err(LawtError::Dimension(DimensionError::UnsupportedDimension { n: 4, .. }))
        ));
        assert!(matches!(
            eigenvalues(&m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])),
            Err(LawtError::Dimension(DimensionError::NotSquare { .. }))
        ));
    }

    #[test]
    fn test_eigenvectors_2x2_general() {
        let a = m(vec![vec![4.0, 1.0], vec![2.0, 3.0]]);
        let res = eigenvectors(&a).unwrap();
        assert!(!res.placeholder);
        assert_eq!(res.values.len(), 2);
        assert!((res.values[0] - 5.0).abs() < 1e-10);
        assert!((res.values[1] - 2.0).abs() < 1e-10);
        for (lambda, v) in res.values.iter().zip(&res.vectors) {
            assert_eigenpair(&a, *lambda, v);
        }
    }

    #[test]
    fn test_eigenvectors_upper_triangular() {
        let a = m(vec![vec![1.0, 1.0], vec![0.0, 2.0]]);
        let res = eigenvectors(&a).unwrap();
        for (lambda, v) in res.values.iter().zip(&res.vectors) {
            assert_eigenpair(&a, *lambda, v);
        }
    }

    #[test]
    fn test_eigenvectors_diagonal_follow_value_order() {
        let res = eigenvectors(&m(vec![vec![2.0, 0.0], vec![0.0, 3.0]])).unwrap();
        assert_eq!(res.values, vec![3.0, 2.0]);
        assert_eq!(res.vectors, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
    }

    #[test]
    fn test_3x3_placeholder_values() {
        let a = m(vec![
            vec![3.0, 0.0, 0.0],
            vec![0.0, 6.0, 0.0],
            vec![0.0, 0.0, 9.0],
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let vals = eigenvalues_with_rng(&a, &mut rng).unwrap();
        assert_eq!(vals.len(), 3);
        for v in vals {
            assert!((6.0..6.1).contains(&v), "value {v} outside trace/3 + [0, 0.1)");
        }
        assert!(is_placeholder(3));
        assert!(!is_placeholder(2));
    }

    #[test]
    fn test_3x3_placeholder_vectors_flagged() {
        let a = Matrix::identity(3).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let res = eigenvectors_with_rng(&a, &mut rng).unwrap();
        assert!(res.placeholder);
        assert_eq!(res.vectors.len(), 3);
        for vec in &res.vectors {
            assert_eq!(vec.len(), 3);
            assert!(vec.iter().all(|c| (-1.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_3x3_deterministic_with_seed() {
        let a = Matrix::identity(3).unwrap();
        let r1 = eigenvectors_with_rng(&a, &mut StdRng::seed_from_u64(1)).unwrap();
        let r2 = eigenvectors_with_rng(&a, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(r1, r2);
    }
}
