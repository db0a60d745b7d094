use super::backend::StorageBackend;
use crate::error::{JotError, Result};
use crate::model::Note;
use std::collections::HashSet;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Encodes the whole note collection as one JSON array under a single key.
pub struct NotePersistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> NotePersistence<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Strict load: a missing value is an empty collection, anything unreadable
    /// is an error. Callers that must not fail use [`super::NoteStore::open`].
    pub fn load(&self) -> Result<Vec<Note>> {
        let Some(raw) = self.backend.read(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(dedupe(decode(&raw)?))
    }

    pub fn save(&self, notes: &[Note]) -> Result<()> {
        let raw = encode(notes)?;
        self.backend.write(&self.key, &raw)
    }
}

pub fn encode(notes: &[Note]) -> Result<String> {
    serde_json::to_string(notes).map_err(JotError::Serialization)
}

pub fn decode(raw: &str) -> Result<Vec<Note>> {
    serde_json::from_str(raw).map_err(JotError::Serialization)
}

/// Keeps the first occurrence of each id.
fn dedupe(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::with_capacity(notes.len());
    let before = notes.len();
    let kept: Vec<Note> = notes
        .into_iter()
        .filter(|note| seen.insert(note.id.clone()))
        .collect();
    if kept.len() != before {
        tracing::warn!(
            dropped = before - kept.len(),
            "stored notes contained duplicate ids"
        );
    }
    kept
}
