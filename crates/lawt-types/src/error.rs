// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

use crate::operation::OperationKind;

/// Structural problems with raw operand input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Matrix {label} must not be empty")]
    EmptyMatrix { label: String },

    /// `row` is 1-based.
    #[error("Matrix {label} row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        label: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Operation {operation} {}", arity_phrase(.requires_second))]
    OperandArity {
        operation: OperationKind,
        requires_second: bool,
    },
}

fn arity_phrase(requires_second: &bool) -> &'static str {
    if *requires_second {
        "requires a second matrix"
    } else {
        "takes a single matrix"
    }
}

/// Operand shapes incompatible with the requested operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("Matrices must have the same shape to be added: A is {a_rows}x{a_cols}, B is {b_rows}x{b_cols}")]
    DimensionMismatchAdd {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },

    #[error("Columns of A ({a_cols}) must equal rows of B ({b_rows}) to multiply: A is {a_rows}x{a_cols}, B is {b_rows}x{b_cols}")]
    DimensionMismatchMultiply {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },

    #[error("{operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        operation: OperationKind,
        rows: usize,
        cols: usize,
    },

    #[error("{operation} is only supported for 2x2 and 3x3 matrices, got {n}x{n}")]
    UnsupportedDimension { operation: OperationKind, n: usize },
}

/// Numerically degenerate inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Matrix is not invertible: pivot {pivot:e} in row {row} is below threshold")]
    Singular { row: usize, pivot: f64 },

    #[error("Matrix has complex eigenvalues (discriminant {discriminant}), which are not supported")]
    ComplexEigenvaluesUnsupported { discriminant: f64 },
}

/// Durable storage failures.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Stored history in slot '{slot}' is corrupt: {reason}")]
    CorruptHistory { slot: String, reason: String },

    #[error("Invalid storage slot name: '{0}'")]
    InvalidSlot(String),

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum LawtError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for LawtError {
    fn from(e: std::io::Error) -> Self {
        LawtError::Persistence(PersistenceError::Io(e))
    }
}

pub type LawtResult<T> = Result<T, LawtError>;
