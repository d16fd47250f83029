// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Accuracy estimator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Display-only confidence heuristic for model results.
//!
//! Base accuracy per operation scaled by operand size. Not a measured error
//! bound.

use lawt_types::constants::*;
use lawt_types::matrix::Matrix;
use lawt_types::operation::{AccuracyScore, OperationKind};

pub fn base_accuracy(operation: OperationKind) -> f64 {
    match operation {
        OperationKind::Transpose => BASE_ACCURACY_TRANSPOSE,
        OperationKind::Add => BASE_ACCURACY_ADD,
        OperationKind::Multiply => BASE_ACCURACY_MULTIPLY,
        OperationKind::Inverse => BASE_ACCURACY_INVERSE,
        OperationKind::Eigenvalues => BASE_ACCURACY_EIGENVALUES,
        OperationKind::Eigenvectors => BASE_ACCURACY_EIGENVECTORS,
    }
}

/// x0.95 above 25 cells, x1.05 below 9 cells, x1.0 otherwise.
pub fn size_factor(cells: usize) -> f64 {
    if cells > LARGE_MATRIX_CELLS {
        LARGE_MATRIX_FACTOR
    } else if cells < SMALL_MATRIX_CELLS {
        SMALL_MATRIX_FACTOR
    } else {
        1.0
    }
}

/// Heuristic accuracy for `operation` on `operand_a`, capped at 99.9.
pub fn estimate(operation: OperationKind, operand_a: &Matrix) -> AccuracyScore {
    let cells = operand_a.shape().cells();
    AccuracyScore::new(base_accuracy(operation) * size_factor(cells))
}
