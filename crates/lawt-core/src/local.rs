// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Local fallback engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! In-process computation used whenever the remote service cannot answer.

use lawt_math::eigen::{eigenvalues_with_rng, eigenvectors_with_rng, is_placeholder};
use lawt_math::elementary::{add, multiply, transpose};
use lawt_math::inverse::invert;
use lawt_types::error::{LawtResult, ValidationError};
use lawt_types::matrix::Matrix;
use lawt_types::operation::{ComputationRequest, ComputationResult, EigenResult, OperationKind};
use rand::Rng;

/// Run `request` locally with the thread RNG.
pub fn compute_local(request: &ComputationRequest) -> LawtResult<ComputationResult> {
    compute_local_with_rng(request, &mut rand::thread_rng())
}

/// Run `request` locally. `rng` only feeds the 3x3 eigen placeholder.
pub fn compute_local_with_rng<R: Rng + ?Sized>(
    request: &ComputationRequest,
    rng: &mut R,
) -> LawtResult<ComputationResult> {
    let a = request.operand_a();
    let result = match request.operation() {
        OperationKind::Transpose => ComputationResult::Matrix(transpose(a)),
        OperationKind::Add => ComputationResult::Matrix(add(a, second(request)?)?),
        OperationKind::Multiply => ComputationResult::Matrix(multiply(a, second(request)?)?),
        OperationKind::Inverse => ComputationResult::Matrix(invert(a)?),
        OperationKind::Eigenvalues => ComputationResult::Eigen(EigenResult {
            values: eigenvalues_with_rng(a, rng)?,
            vectors: Vec::new(),
            placeholder: is_placeholder(a.rows()),
        }),
        OperationKind::Eigenvectors => ComputationResult::Eigen(eigenvectors_with_rng(a, rng)?),
    };
    Ok(result)
}

fn second(request: &ComputationRequest) -> Result<&Matrix, ValidationError> {
    request
        .operand_b()
        .ok_or(ValidationError::OperandArity {
            operation: request.operation(),
            requires_second: true,
        })
}
