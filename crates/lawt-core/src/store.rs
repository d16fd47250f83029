// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Key-value persistence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Durable key-value slots used for the history list and session identity.
//!
//! [`KeyValueStore`] is the persistence port; [`MemoryStore`] and
//! [`FileStore`] are the two shipped adapters.

use lawt_types::config::{is_safe_slot, EngineConfig};
use lawt_types::error::PersistenceError;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Named string slots in durable storage.
pub trait KeyValueStore {
    /// `Ok(None)` when the slot has never been written or was removed.
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError>;

    fn write(&mut self, slot: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removing an absent slot is not an error.
    fn remove(&mut self, slot: &str) -> Result<(), PersistenceError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        (**self).read(slot)
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).write(slot, value)
    }

    fn remove(&mut self, slot: &str) -> Result<(), PersistenceError> {
        (**self).remove(slot)
    }
}

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<(), PersistenceError> {
        self.slots.remove(slot);
        Ok(())
    }
}

/// One `<slot>.json` file per slot under a directory. Writes go through a
/// temporary file and a rename, so a crash never leaves a half-written slot.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the storage directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(FileStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf, PersistenceError> {
        if !is_safe_slot(slot) {
            return Err(PersistenceError::InvalidSlot(slot.to_string()));
        }
        Ok(self.root.join(format!("{slot}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, slot: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.slot_path(slot)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), PersistenceError> {
        let final_path = self.slot_path(slot)?;
        let tmp_path = self.root.join(format!(".{slot}.{}.tmp", Uuid::new_v4()));

        if let Err(e) = write_then_rename(&tmp_path, &final_path, value.as_bytes()) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        debug!(slot, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<(), PersistenceError> {
        let path = self.slot_path(slot)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_then_rename(tmp_path: &Path, final_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    {
        let mut file = std::fs::File::create(tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    std::fs::rename(tmp_path, final_path)
}

/// File-backed storage when `storage_dir` is configured, memory otherwise.
pub fn open_store(config: &EngineConfig) -> Result<Box<dyn KeyValueStore>, PersistenceError> {
    match &config.storage_dir {
        Some(dir) => Ok(Box::new(FileStore::open(dir)?)),
        None => Ok(Box::new(MemoryStore::new())),
    }
}
