// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Gauss–Jordan pivots with magnitude below this are treated as singular.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// Ceiling of every accuracy score (percentage points).
pub const ACCURACY_CEILING: f64 = 99.9;

/// Base accuracy per operation (percentage points), taken from the
/// published LAWT model evaluation.
pub const BASE_ACCURACY_TRANSPOSE: f64 = 95.2;
pub const BASE_ACCURACY_ADD: f64 = 92.8;
pub const BASE_ACCURACY_MULTIPLY: f64 = 89.5;
pub const BASE_ACCURACY_INVERSE: f64 = 87.3;
pub const BASE_ACCURACY_EIGENVALUES: f64 = 85.1;
pub const BASE_ACCURACY_EIGENVECTORS: f64 = 82.7;

/// Operands with more than this many cells get [`LARGE_MATRIX_FACTOR`].
pub const LARGE_MATRIX_CELLS: usize = 25;
/// Operands with fewer than this many cells get [`SMALL_MATRIX_FACTOR`].
pub const SMALL_MATRIX_CELLS: usize = 9;
pub const LARGE_MATRIX_FACTOR: f64 = 0.95;
pub const SMALL_MATRIX_FACTOR: f64 = 1.05;

/// Width of the uniform jitter added to trace/3 by the 3x3 placeholder.
pub const EIGEN_3X3_JITTER: f64 = 0.1;

/// Off-diagonal magnitude below which a 2x2 matrix is treated as diagonal
/// when extracting eigenvectors.
pub const EIGENVECTOR_OFFDIAG_EPSILON: f64 = 1e-15;

/// Random operands are drawn from [-RANDOM_CELL_BOUND, RANDOM_CELL_BOUND].
pub const RANDOM_CELL_BOUND: f64 = 10.0;

/// Default bound of the computation history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
pub const DEFAULT_HISTORY_SLOT: &str = "lawt_history";
pub const DEFAULT_SESSION_SLOT: &str = "lawt_session_id";
