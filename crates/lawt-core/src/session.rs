// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Session identity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Stable per-installation token, generated once and persisted.

use chrono::{DateTime, Utc};
use lawt_types::error::PersistenceError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::store::KeyValueStore;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Opaque `session_<unix-millis>_<9 base-36 chars>` token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        SessionId(format!("session_{}_{suffix}", now.timestamp_millis()))
    }

    /// The token stored in `slot`, or a fresh one written there.
    pub fn load_or_create<S, R>(
        store: &mut S,
        slot: &str,
        rng: &mut R,
    ) -> Result<Self, PersistenceError>
    where
        S: KeyValueStore + ?Sized,
        R: Rng + ?Sized,
    {
        if let Some(existing) = store.read(slot)? {
            let existing = existing.trim();
            if !existing.is_empty() {
                return Ok(SessionId(existing.to_string()));
            }
        }
        let id = Self::generate(rng, Utc::now());
        store.write(slot, &id.0)?;
        info!(session = %id, "session created");
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
