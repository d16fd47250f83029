// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Model metadata
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-operation transformer architecture, shown next to model results.

use lawt_types::operation::OperationKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub n_enc_layers: u32,
    pub n_dec_layers: u32,
    pub n_enc_heads: u32,
    pub n_dec_heads: u32,
    pub enc_emb_dim: u32,
    pub dec_emb_dim: u32,
    pub max_epoch: u32,
    pub optimizer: &'static str,
}

const MAX_EPOCH: u32 = 100_000;
const WARMUP_LR_5E5: &str = "adam_warmup,warmup_updates=10000,lr=0.00005";
const COSINE_LR_1E4: &str = "adam_cosine,warmup_updates=10000,lr=0.0001";

impl ModelInfo {
    pub fn for_operation(operation: OperationKind) -> Self {
        match operation {
            OperationKind::Transpose => ModelInfo {
                n_enc_layers: 1,
                n_dec_layers: 1,
                n_enc_heads: 8,
                n_dec_heads: 8,
                enc_emb_dim: 256,
                dec_emb_dim: 256,
                max_epoch: MAX_EPOCH,
                optimizer: "adam,lr=0.0001",
            },
            OperationKind::Add => ModelInfo {
                n_enc_layers: 2,
                n_dec_layers: 2,
                n_enc_heads: 8,
                n_dec_heads: 8,
                enc_emb_dim: 512,
                dec_emb_dim: 512,
                max_epoch: MAX_EPOCH,
                optimizer: WARMUP_LR_5E5,
            },
            OperationKind::Multiply => ModelInfo {
                n_enc_layers: 1,
                n_dec_layers: 4,
                n_enc_heads: 8,
                n_dec_heads: 8,
                enc_emb_dim: 512,
                dec_emb_dim: 512,
                max_epoch: MAX_EPOCH,
                optimizer: WARMUP_LR_5E5,
            },
            OperationKind::Inverse => ModelInfo {
                n_enc_layers: 6,
                n_dec_layers: 1,
                n_enc_heads: 12,
                n_dec_heads: 8,
                enc_emb_dim: 516,
                dec_emb_dim: 512,
                max_epoch: MAX_EPOCH,
                optimizer: "adam_warmup,warmup_updates=10000,lr=0.0001",
            },
            OperationKind::Eigenvalues | OperationKind::Eigenvectors => ModelInfo {
                n_enc_layers: 6,
                n_dec_layers: 1,
                n_enc_heads: 8,
                n_dec_heads: 8,
                enc_emb_dim: 512,
                dec_emb_dim: 512,
                max_epoch: MAX_EPOCH,
                optimizer: COSINE_LR_1E4,
            },
        }
    }

    /// Encoder/decoder layers as `"6/1"`.
    pub fn layers(&self) -> String {
        format!("{}/{}", self.n_enc_layers, self.n_dec_layers)
    }
}
