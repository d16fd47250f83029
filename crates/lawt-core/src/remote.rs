// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Remote compute contract
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Wire types for the remote compute service and the port it is reached
//! through.
//!
//! The transport itself lives with the embedding application. This module
//! only builds requests and turns responses into typed results; anything
//! it cannot decode is reported as [`RemoteError::Malformed`] so the facade
//! falls back to local computation.

use lawt_types::matrix::Matrix;
use lawt_types::operation::{
    ComputationRequest, ComputationResult, ComputeMethod, EigenResult, OperationKind,
};
use lawt_types::validate::Shape;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Body of a compute call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRequest {
    pub operation: OperationKind,
    pub matrix_a: Matrix,
    pub matrix_b: Option<Matrix>,
    pub method: ComputeMethod,
}

impl RemoteRequest {
    pub fn from_request(request: &ComputationRequest, method: ComputeMethod) -> Self {
        RemoteRequest {
            operation: request.operation(),
            matrix_a: request.operand_a().clone(),
            matrix_b: request.operand_b().cloned(),
            method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub model_available: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Remote service unreachable: {0}")]
    Transport(String),

    #[error("Remote computation failed: {0}")]
    Rejected(String),

    #[error("Malformed remote response: {0}")]
    Malformed(String),
}

/// A remote compute service. Implementations own the transport and its
/// timeout policy; any error makes the caller compute locally.
pub trait RemoteCompute {
    fn compute(&self, request: &RemoteRequest) -> Result<RemoteResponse, RemoteError>;

    fn status(&self) -> Result<ServiceStatus, RemoteError>;
}

impl<R: RemoteCompute + ?Sized> RemoteCompute for Box<R> {
    fn compute(&self, request: &RemoteRequest) -> Result<RemoteResponse, RemoteError> {
        (**self).compute(request)
    }

    fn status(&self) -> Result<ServiceStatus, RemoteError> {
        (**self).status()
    }
}

impl<R: RemoteCompute + ?Sized> RemoteCompute for &R {
    fn compute(&self, request: &RemoteRequest) -> Result<RemoteResponse, RemoteError> {
        (**self).compute(request)
    }

    fn status(&self) -> Result<ServiceStatus, RemoteError> {
        (**self).status()
    }
}

/// A service that is never reachable. Every computation runs locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineRemote;

impl RemoteCompute for OfflineRemote {
    fn compute(&self, _request: &RemoteRequest) -> Result<RemoteResponse, RemoteError> {
        Err(RemoteError::Transport("offline".to_string()))
    }

    fn status(&self) -> Result<ServiceStatus, RemoteError> {
        Err(RemoteError::Transport("offline".to_string()))
    }
}

/// Turn a response into the result `request` should produce.
///
/// `success = false` is `Rejected` with the service's message. A missing or
/// undecodable payload, or a matrix of the wrong shape, is `Malformed`.
pub fn interpret(
    request: &ComputationRequest,
    response: RemoteResponse,
) -> Result<ComputationResult, RemoteError> {
    if !response.success {
        return Err(RemoteError::Rejected(
            response
                .error
                .unwrap_or_else(|| "computation failed".to_string()),
        ));
    }
    let payload = response
        .result
        .ok_or_else(|| RemoteError::Malformed("missing result".to_string()))?;
    let result = decode_result(request.operation(), &payload)?;
    check_shape(request, &result)?;
    Ok(result)
}

/// Decode an untyped `result` payload for `operation`: a matrix for the
/// elementary ops and inverse, a list of numbers for eigenvalues, and an
/// `{eigenvalues, eigenvectors}` object for eigenvectors.
pub fn decode_result(
    operation: OperationKind,
    payload: &Value,
) -> Result<ComputationResult, RemoteError> {
    match operation {
        OperationKind::Transpose
        | OperationKind::Add
        | OperationKind::Multiply
        | OperationKind::Inverse => {
            let rows = numbers_2d(payload, "result")?;
            let m = Matrix::new(rows, "result")
                .map_err(|e| RemoteError::Malformed(e.to_string()))?;
            Ok(ComputationResult::Matrix(m))
        }
        OperationKind::Eigenvalues => Ok(ComputationResult::Eigen(EigenResult {
            values: numbers_1d(payload, "eigenvalues")?,
            vectors: Vec::new(),
            placeholder: false,
        })),
        OperationKind::Eigenvectors => {
            let field = |name: &str| {
                payload
                    .get(name)
                    .ok_or_else(|| RemoteError::Malformed(format!("missing field '{name}'")))
            };
            let values = numbers_1d(field("eigenvalues")?, "eigenvalues")?;
            let vectors = numbers_2d(field("eigenvectors")?, "eigenvectors")?;
            if vectors.len() != values.len() {
                return Err(RemoteError::Malformed(format!(
                    "{} eigenvectors for {} eigenvalues",
                    vectors.len(),
                    values.len()
                )));
            }
            Ok(ComputationResult::Eigen(EigenResult {
                values,
                vectors,
                placeholder: false,
            }))
        }
    }
}

fn numbers_1d(value: &Value, what: &str) -> Result<Vec<f64>, RemoteError> {
    let items = value
        .as_array()
        .ok_or_else(|| RemoteError::Malformed(format!("{what} is not a list")))?;
    items
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_f64().ok_or_else(|| {
                RemoteError::Malformed(format!("{what}[{i}] is not a number: {v}"))
            })
        })
        .collect()
}

fn numbers_2d(value: &Value, what: &str) -> Result<Vec<Vec<f64>>, RemoteError> {
    let rows = value
        .as_array()
        .ok_or_else(|| RemoteError::Malformed(format!("{what} is not a list of rows")))?;
    rows.iter()
        .enumerate()
        .map(|(i, row)| numbers_1d(row, &format!("{what}[{i}]")))
        .collect()
}

/// Matrix shape the local engine would produce for `request`.
fn expected_shape(request: &ComputationRequest) -> Option<Shape> {
    let a = request.operand_a().shape();
    match request.operation() {
        OperationKind::Transpose => Some(a.transposed()),
        OperationKind::Add | OperationKind::Inverse => Some(a),
        OperationKind::Multiply => request.operand_b().map(|b| a.product(b.shape())),
        OperationKind::Eigenvalues | OperationKind::Eigenvectors => None,
    }
}

fn check_shape(request: &ComputationRequest, result: &ComputationResult) -> Result<(), RemoteError> {
    match result {
        ComputationResult::Matrix(m) => match expected_shape(request) {
            Some(expected) if expected != m.shape() => Err(RemoteError::Malformed(format!(
                "result is {}, expected {expected}",
                m.shape()
            ))),
            _ => Ok(()),
        },
        ComputationResult::Eigen(e) => {
            let n = request.operand_a().rows();
            if e.values.len() != n || e.vectors.iter().any(|v| v.len() != n) {
                return Err(RemoteError::Malformed(format!(
                    "eigen result does not match a {n}x{n} operand"
                )));
            }
            Ok(())
        }
    }
}
