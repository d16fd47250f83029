// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Operations, requests and results
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::ACCURACY_CEILING;
use crate::error::ValidationError;
use crate::matrix::Matrix;

/// The six supported operations. Serialized with the wire names
/// (`"transpose"`, `"add"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Transpose,
    Add,
    Multiply,
    Inverse,
    Eigenvalues,
    Eigenvectors,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Transpose,
        OperationKind::Add,
        OperationKind::Multiply,
        OperationKind::Inverse,
        OperationKind::Eigenvalues,
        OperationKind::Eigenvectors,
    ];

    /// Add and Multiply take two operands; everything else takes one.
    pub fn is_binary(self) -> bool {
        matches!(self, OperationKind::Add | OperationKind::Multiply)
    }

    /// True when the result is an eigen decomposition rather than a matrix.
    pub fn yields_eigen(self) -> bool {
        matches!(self, OperationKind::Eigenvalues | OperationKind::Eigenvectors)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Transpose => "transpose",
            OperationKind::Add => "add",
            OperationKind::Multiply => "multiply",
            OperationKind::Inverse => "inverse",
            OperationKind::Eigenvalues => "eigenvalues",
            OperationKind::Eigenvectors => "eigenvectors",
        }
    }

    /// Human-readable label for history lists and result headers.
    pub fn display_name(self) -> &'static str {
        match self {
            OperationKind::Transpose => "Matrix transpose",
            OperationKind::Add => "Matrix addition",
            OperationKind::Multiply => "Matrix multiplication",
            OperationKind::Inverse => "Matrix inverse",
            OperationKind::Eigenvalues => "Eigenvalues",
            OperationKind::Eigenvectors => "Eigenvectors",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported operation: '{0}'")]
pub struct ParseOperationError(pub String);

impl FromStr for OperationKind {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}

/// Which backend the remote collaborator should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeMethod {
    /// The learned model. Results carry an accuracy estimate.
    #[default]
    Model,
    /// The exact reference implementation.
    Reference,
}

impl fmt::Display for ComputeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeMethod::Model => f.write_str("model"),
            ComputeMethod::Reference => f.write_str("reference"),
        }
    }
}

/// Where a result was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Remote,
    LocalFallback,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote => f.write_str("remote"),
            Source::LocalFallback => f.write_str("local fallback"),
        }
    }
}

/// An operation with its operands. `operand_b` is present iff the
/// operation is binary; enforced on construction and deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RequestRepr", into = "RequestRepr")]
pub struct ComputationRequest {
    operation: OperationKind,
    operand_a: Matrix,
    operand_b: Option<Matrix>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestRepr {
    operation: OperationKind,
    matrix_a: Matrix,
    #[serde(default)]
    matrix_b: Option<Matrix>,
}

impl ComputationRequest {
    pub fn new(
        operation: OperationKind,
        operand_a: Matrix,
        operand_b: Option<Matrix>,
    ) -> Result<Self, ValidationError> {
        if operation.is_binary() != operand_b.is_some() {
            return Err(ValidationError::OperandArity {
                operation,
                requires_second: operation.is_binary(),
            });
        }
        Ok(ComputationRequest {
            operation,
            operand_a,
            operand_b,
        })
    }

    /// Validate raw rows for both operands (labelled "A" and "B") and build
    /// the request.
    pub fn from_rows(
        operation: OperationKind,
        matrix_a: Vec<Vec<f64>>,
        matrix_b: Option<Vec<Vec<f64>>>,
    ) -> Result<Self, ValidationError> {
        let operand_a = Matrix::new(matrix_a, "A")?;
        let operand_b = matrix_b.map(|rows| Matrix::new(rows, "B")).transpose()?;
        Self::new(operation, operand_a, operand_b)
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn operand_a(&self) -> &Matrix {
        &self.operand_a
    }

    pub fn operand_b(&self) -> Option<&Matrix> {
        self.operand_b.as_ref()
    }
}

impl TryFrom<RequestRepr> for ComputationRequest {
    type Error = ValidationError;

    fn try_from(repr: RequestRepr) -> Result<Self, Self::Error> {
        ComputationRequest::new(repr.operation, repr.matrix_a, repr.matrix_b)
    }
}

impl From<ComputationRequest> for RequestRepr {
    fn from(req: ComputationRequest) -> Self {
        RequestRepr {
            operation: req.operation,
            matrix_a: req.operand_a,
            matrix_b: req.operand_b,
        }
    }
}

/// Eigenvalues, optionally with one eigenvector per value.
///
/// `placeholder` is set when the numbers are not a real decomposition
/// (the 3x3 path: jittered trace/3 values and random vectors). Callers must
/// surface that rather than present the values as exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenResult {
    #[serde(with = "crate::scalar::vec")]
    pub values: Vec<f64>,
    /// One row per eigenvalue; empty for an eigenvalues-only request.
    #[serde(with = "crate::scalar::nested", default)]
    pub vectors: Vec<Vec<f64>>,
    #[serde(default)]
    pub placeholder: bool,
}

/// Result of one computation, shaped by its operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ComputationResult {
    Matrix(Matrix),
    Eigen(EigenResult),
}

impl ComputationResult {
    /// Whether this result has the shape `operation` produces.
    pub fn fits(&self, operation: OperationKind) -> bool {
        match self {
            ComputationResult::Matrix(_) => !operation.yields_eigen(),
            ComputationResult::Eigen(e) => match operation {
                OperationKind::Eigenvalues => e.vectors.is_empty(),
                OperationKind::Eigenvectors => e.vectors.len() == e.values.len(),
                _ => false,
            },
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            ComputationResult::Matrix(m) => Some(m),
            ComputationResult::Eigen(_) => None,
        }
    }

    pub fn as_eigen(&self) -> Option<&EigenResult> {
        match self {
            ComputationResult::Matrix(_) => None,
            ComputationResult::Eigen(e) => Some(e),
        }
    }
}

/// Advisory accuracy percentage in `[0, 99.9]`. A display heuristic, not an
/// error bound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct AccuracyScore(f64);

impl AccuracyScore {
    /// Clamp into `[0, 99.9]`; NaN maps to 0.
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return AccuracyScore(0.0);
        }
        AccuracyScore(percent.clamp(0.0, ACCURACY_CEILING))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for AccuracyScore {
    fn from(v: f64) -> Self {
        AccuracyScore::new(v)
    }
}

impl From<AccuracyScore> for f64 {
    fn from(s: AccuracyScore) -> Self {
        s.0
    }
}

impl fmt::Display for AccuracyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
