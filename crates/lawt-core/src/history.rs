// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Bounded computation history
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bounded, newest-first log of completed computations.
//!
//! The full list is rewritten to one storage slot on every mutation and
//! read back once when the store is opened.

use chrono::{DateTime, Utc};
use lawt_types::error::{LawtResult, PersistenceError};
use lawt_types::operation::{
    AccuracyScore, ComputationRequest, ComputationResult, ComputeMethod, Source,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::store::KeyValueStore;

/// One completed computation, before it is given an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Computation {
    pub request: ComputationRequest,
    pub result: ComputationResult,
    pub source: Source,
    pub method: ComputeMethod,
    pub elapsed_seconds: f64,
    #[serde(default)]
    pub accuracy: Option<AccuracyScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Strictly increasing within a store, milliseconds-based.
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub computation: Computation,
}

/// Capacity-bounded history persisted through a [`KeyValueStore`].
#[derive(Debug)]
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    slot: String,
    capacity: usize,
    /// Front is the most recent entry.
    entries: Vec<HistoryEntry>,
    last_id: u64,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Read the list from `slot`. An absent slot is an empty history; a slot
    /// that does not parse is `CorruptHistory`. A stored list longer than
    /// `capacity` is cut down and written back. Capacity is at least 1.
    pub fn load(storage: S, slot: &str, capacity: usize) -> LawtResult<Self> {
        let capacity = capacity.max(1);
        let entries = match storage.read(slot)? {
            None => Vec::new(),
            Some(text) => parse_entries(slot, &text)?,
        };
        let last_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        let mut store = HistoryStore {
            storage,
            slot: slot.to_string(),
            capacity,
            entries,
            last_id,
        };
        if store.entries.len() > capacity {
            let mut kept = store.entries.clone();
            kept.truncate(capacity);
            store.persist(&kept)?;
            debug!(
                dropped = store.entries.len() - capacity,
                "history over capacity on load"
            );
            store.entries = kept;
        }
        info!(slot, count = store.entries.len(), "history loaded");
        Ok(store)
    }

    /// Insert at the front, evict past capacity, persist. Nothing changes
    /// in memory if persisting fails.
    pub fn record(&mut self, computation: Computation) -> LawtResult<&HistoryEntry> {
        let created_at = Utc::now();
        let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
        let next_id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| PersistenceError::CorruptHistory {
                slot: self.slot.clone(),
                reason: "entry ids exhausted".to_string(),
            })?;
        let id = millis.max(next_id);
        let entry = HistoryEntry {
            id,
            created_at,
            computation,
        };

        let mut next = Vec::with_capacity(self.capacity.min(self.entries.len() + 1));
        next.push(entry);
        next.extend(self.entries.iter().take(self.capacity - 1).cloned());
        let evicted = (self.entries.len() + 1).saturating_sub(next.len());

        self.persist(&next)?;
        self.entries = next;
        self.last_id = id;
        debug!(
            id,
            operation = %self.entries[0].computation.request.operation(),
            evicted,
            "history recorded"
        );
        Ok(&self.entries[0])
    }

    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The inputs and result of entry `id`, for repopulating a caller's view.
    pub fn restore(&self, id: u64) -> Option<(ComputationRequest, ComputationResult)> {
        self.get(id).map(|e| {
            (
                e.computation.request.clone(),
                e.computation.result.clone(),
            )
        })
    }

    /// Empty the list and remove the slot from storage.
    pub fn clear(&mut self) -> LawtResult<()> {
        self.storage.remove(&self.slot)?;
        let cleared = self.entries.len();
        self.entries.clear();
        info!(slot = %self.slot, cleared, "history cleared");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, entries: &[HistoryEntry]) -> LawtResult<()> {
        let text = serde_json::to_string(entries)?;
        self.storage.write(&self.slot, &text)?;
        Ok(())
    }
}

fn parse_entries(slot: &str, text: &str) -> Result<Vec<HistoryEntry>, PersistenceError> {
    let corrupt = |reason: String| PersistenceError::CorruptHistory {
        slot: slot.to_string(),
        reason,
    };
    let entries: Vec<HistoryEntry> =
        serde_json::from_str(text).map_err(|e| corrupt(e.to_string()))?;
    for entry in &entries {
        if entry.id == u64::MAX {
            return Err(corrupt(format!("entry id {} leaves no successor", entry.id)));
        }
        let op = entry.computation.request.operation();
        if !entry.computation.result.fits(op) {
            return Err(corrupt(format!(
                "entry {} holds a result that {op} cannot produce",
                entry.id
            )));
        }
    }
    Ok(entries)
}
