// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Service status check
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Display-only readiness of the remote model. Nothing in the compute path
//! depends on it.

use std::fmt;
use tracing::debug;

use crate::remote::RemoteCompute;

const READY_LABEL: &str = "LAWT model ready";
const UNAVAILABLE_LABEL: &str = "LAWT model unavailable, reference computation will be used";
const UNREACHABLE_LABEL: &str = "Server unreachable, local computation will be used";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    /// Service reachable and the model loaded. `message` is the service's
    /// own text, possibly empty.
    Ready { message: String },
    /// Service reachable, model not loaded.
    Unavailable,
    /// The status request itself failed.
    Unreachable,
}

impl ModelStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            ModelStatus::Ready { message } if !message.trim().is_empty() => message.as_str(),
            ModelStatus::Ready { .. } => READY_LABEL,
            ModelStatus::Unavailable => UNAVAILABLE_LABEL,
            ModelStatus::Unreachable => UNREACHABLE_LABEL,
        }
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn check_status<R: RemoteCompute + ?Sized>(remote: &R) -> ModelStatus {
    match remote.status() {
        Ok(s) if s.model_available => ModelStatus::Ready { message: s.message },
        Ok(_) => ModelStatus::Unavailable,
        Err(e) => {
            debug!(error = %e, "status check failed");
            ModelStatus::Unreachable
        }
    }
}
