// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Matrix validator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Structural checks on raw operand input, run before any arithmetic.

use crate::error::ValidationError;

/// Rows x columns of a validated operand. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Shape {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Validate a row-major operand.
///
/// Fails `EmptyMatrix` when there are no rows or the first row is empty,
/// then `RaggedRows` at the first row whose length differs from the first
/// row's. `label` names the operand ("A", "B") in the error message.
pub fn validate(rows: &[Vec<f64>], label: &str) -> Result<Shape, ValidationError> {
    let Some(first) = rows.first() else {
        return Err(ValidationError::EmptyMatrix {
            label: label.to_string(),
        });
    };
    let cols = first.len();
    if cols == 0 {
        return Err(ValidationError::EmptyMatrix {
            label: label.to_string(),
        });
    }

    if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(ValidationError::RaggedRows {
            label: label.to_string(),
            row: idx + 1,
            expected: cols,
            found: row.len(),
        });
    }

    Ok(Shape {
        rows: rows.len(),
        cols,
    })
}
