// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_SLOT, DEFAULT_SESSION_SLOT};
use crate::error::{LawtError, LawtResult};
use crate::operation::ComputeMethod;

/// Engine configuration. Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of history entries kept (default: 10).
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Storage key of the history list (default: "lawt_history").
    #[serde(default = "default_history_slot")]
    pub history_slot: String,
    /// Storage key of the session identity (default: "lawt_session_id").
    #[serde(default = "default_session_slot")]
    pub session_slot: String,
    /// Backend requested from the remote service (default: model).
    #[serde(default)]
    pub method: ComputeMethod,
    /// Directory for file-backed storage. In-memory storage when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
fn default_history_slot() -> String {
    DEFAULT_HISTORY_SLOT.to_string()
}
fn default_session_slot() -> String {
    DEFAULT_SESSION_SLOT.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            history_capacity: default_history_capacity(),
            history_slot: default_history_slot(),
            session_slot: default_session_slot(),
            method: ComputeMethod::default(),
            storage_dir: None,
        }
    }
}

/// Slot names double as file names, so only a conservative character set
/// is accepted.
pub fn is_safe_slot(slot: &str) -> bool {
    !slot.is_empty()
        && slot != "."
        && slot != ".."
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

impl EngineConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> LawtResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LawtResult<()> {
        if self.history_capacity == 0 {
            return Err(LawtError::Config(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        for (name, slot) in [
            ("history_slot", &self.history_slot),
            ("session_slot", &self.session_slot),
        ] {
            if !is_safe_slot(slot) {
                return Err(LawtError::Config(format!(
                    "{name} '{slot}' must be non-empty and use only [A-Za-z0-9_.-]"
                )));
            }
        }
        if self.history_slot == self.session_slot {
            return Err(LawtError::Config(
                "history_slot and session_slot must differ".to_string(),
            ));
        }
        Ok(())
    }
}
