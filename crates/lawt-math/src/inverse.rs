// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Gauss-Jordan inversion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Square-matrix inversion by Gauss-Jordan elimination on `[A | I]`.
//!
//! Pivots are taken straight from the diagonal: no row interchange. A pivot
//! with magnitude below [`PIVOT_EPSILON`] fails the whole inversion as
//! singular, so matrices such as `[[0, 1], [1, 0]]` are rejected even though
//! they are invertible. Elimination is full (above and below the pivot).
//! O(n^3) time, O(n^2) extra space.

use lawt_types::constants::PIVOT_EPSILON;
use lawt_types::error::{DimensionError, LawtResult, NumericError};
use lawt_types::matrix::Matrix;
use lawt_types::operation::OperationKind;
use ndarray::Array2;

/// Invert `a`.
///
/// Fails `NotSquare` for rectangular input and `Singular` (with the 1-based
/// row and the offending pivot) when a diagonal pivot degenerates.
pub fn invert(a: &Matrix) -> LawtResult<Matrix> {
    if !a.is_square() {
        return Err(DimensionError::NotSquare {
            operation: OperationKind::Inverse,
            rows: a.rows(),
            cols: a.cols(),
        }
        .into());
    }
    let n = a.rows();
    let width = 2 * n;

    // [A | I]
    let mut aug = Array2::<f64>::zeros((n, width));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = a[(i, j)];
        }
        aug[[i, n + i]] = 1.0;
    }

    for i in 0..n {
        let pivot = aug[[i, i]];
        if pivot.abs() < PIVOT_EPSILON {
            return Err(NumericError::Singular { row: i + 1, pivot }.into());
        }

        for j in 0..width {
            aug[[i, j]] /= pivot;
        }

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = aug[[k, i]];
            for j in 0..width {
                aug[[k, j]] -= factor * aug[[i, j]];
            }
        }
    }

    Ok(Matrix::from_shape_fn(a.shape(), |i, j| aug[[i, n + j]]))
}
