// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Elementary operations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Transpose, addition and multiplication.
//!
//! No clamping or overflow handling: IEEE `inf`/`NaN` propagate as-is.

use lawt_types::error::DimensionError;
use lawt_types::matrix::Matrix;

/// `result[j][i] = a[i][j]`. Total.
pub fn transpose(a: &Matrix) -> Matrix {
    Matrix::from_shape_fn(a.shape().transposed(), |i, j| a[(j, i)])
}

/// Elementwise sum. Shapes must match exactly.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, DimensionError> {
    if a.shape() != b.shape() {
        return Err(DimensionError::DimensionMismatchAdd {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        });
    }
    Ok(Matrix::from_shape_fn(a.shape(), |i, j| a[(i, j)] + b[(i, j)]))
}

/// Standard inner-product multiplication, `(m x k) · (k x n) -> (m x n)`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, DimensionError> {
    if a.cols() != b.rows() {
        return Err(DimensionError::DimensionMismatchMultiply {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        });
    }
    let k = a.cols();
    Ok(Matrix::from_shape_fn(a.shape().product(b.shape()), |i, j| {
        let mut sum = 0.0;
        for r in 0..k {
            sum += a[(i, r)] * b[(r, j)];
        }
        sum
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::new(rows, "A").unwrap()
    }

    #[test]
    fn test_transpose_square() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(transpose(&a), m(vec![vec![1.0, 3.0], vec![2.0, 4.0]]));
    }

    #[test]
    fn test_transpose_rectangular() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = transpose(&a);
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn test_add() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(add(&a, &b).unwrap(), m(vec![vec![6.0, 8.0], vec![10.0, 12.0]]));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = m(vec![vec![1.0, 2.0]]);
        let b = m(vec![vec![1.0], vec![2.0]]);
        assert_eq!(
            add(&a, &b).unwrap_err(),
            DimensionError::DimensionMismatchAdd {
                a_rows: 1,
                a_cols: 2,
                b_rows: 2,
                b_cols: 1
            }
        );
    }

    #[test]
    fn test_multiply() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![2.0, 0.0], vec![1.0, 2.0]]);
        assert_eq!(multiply(&a, &b).unwrap(), m(vec![vec![4.0, 4.0], vec![10.0, 8.0]]));
    }

    #[test]
    fn test_multiply_rectangular_shape() {
        let a = m(vec![vec![1.0, 2.0, 3.0]]);
        let b = m(vec![vec![1.0], vec![1.0], vec![1.0]]);
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![6.0]]);

        let outer = multiply(&b, &a).unwrap();
        assert_eq!(outer.rows(), 3);
        assert_eq!(outer.cols(), 3);
    }

    #[test]
    fn test_multiply_mismatch_reports_both_shapes() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let b = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let err = multiply(&a, &b).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("2x3") && msg.contains("2x2"), "{msg}");
    }

    #[test]
    fn test_multiply_overflow_propagates() {
        let a = m(vec![vec![f64::MAX, f64::MAX]]);
        let b = m(vec![vec![2.0], vec![2.0]]);
        let c = multiply(&a, &b).unwrap();
        assert!(c[(0, 0)].is_infinite());
    }
}
