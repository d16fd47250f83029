// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Random operands
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Random operand generation for quick experiments.

use lawt_types::constants::RANDOM_CELL_BOUND;
use lawt_types::error::ValidationError;
use lawt_types::matrix::Matrix;
use lawt_types::validate::Shape;
use rand::Rng;

/// `rows x cols` matrix with cells uniform in `[-10, 10]`, rounded to two
/// decimals.
pub fn random_matrix<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Matrix, ValidationError> {
    let shape = Shape::new(rows, cols).ok_or_else(|| ValidationError::EmptyMatrix {
        label: "random".to_string(),
    })?;
    Ok(Matrix::from_shape_fn(shape, |_, _| {
        let v: f64 = rng.gen_range(-RANDOM_CELL_BOUND..=RANDOM_CELL_BOUND);
        (v * 100.0).round() / 100.0
    }))
}
