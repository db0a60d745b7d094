use super::backend::StorageBackend;
use super::persistence::NotePersistence;
use crate::error::{JotError, Result};
use crate::id::IdGenerator;
use crate::model::{Note, NoteDraft, NoteId};
use chrono::Utc;

/// Result of a mutation that was applied in memory.
///
/// `persist_error` is set when the backend write failed: the in-memory
/// collection is still authoritative for this session but the change may not
/// survive a restart.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub persist_error: Option<JotError>,
}

impl<T> Mutation<T> {
    fn new(value: T, persisted: Result<()>) -> Self {
        Self {
            value,
            persist_error: persisted.err(),
        }
    }

    fn unwritten(value: T) -> Self {
        Self {
            value,
            persist_error: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Owner of the note collection. Every effective mutation writes the whole
/// collection once before returning.
pub struct NoteStore<B: StorageBackend> {
    notes: Vec<Note>,
    persistence: NotePersistence<B>,
    ids: IdGenerator,
    load_warning: Option<JotError>,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Load the stored collection, falling back to an empty one when the value is
    /// unreadable. The failure is kept for [`NoteStore::take_load_warning`].
    pub fn open(persistence: NotePersistence<B>) -> Self {
        let (notes, load_warning) = match persistence.load() {
            Ok(notes) => (notes, None),
            Err(err) => {
                tracing::warn!(
                    %err,
                    key = persistence.key(),
                    "stored notes unreadable, starting empty"
                );
                (Vec::new(), Some(err))
            }
        };
        Self {
            notes,
            persistence,
            ids: IdGenerator::new(),
            load_warning,
        }
    }

    pub fn with_backend(backend: B) -> Self {
        Self::open(NotePersistence::new(backend))
    }

    pub fn persistence(&self) -> &NotePersistence<B> {
        &self.persistence
    }

    pub fn take_load_warning(&mut self) -> Option<JotError> {
        self.load_warning.take()
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn create(&mut self, title: &str, content: &str) -> Result<Mutation<Note>> {
        let draft = NoteDraft::parse(title, content)?;
        let note = Note::new(self.ids.next(), draft, Utc::now());
        tracing::debug!(id = %note.id, "creating note");

        self.notes.insert(0, note.clone());
        Ok(Mutation::new(note, self.persist()))
    }

    pub fn update(&mut self, id: &NoteId, title: &str, content: &str) -> Result<Mutation<Note>> {
        let draft = NoteDraft::parse(title, content)?;
        let note = self
            .notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| JotError::NoteNotFound(id.clone()))?;
        note.apply(draft, Utc::now());
        tracing::debug!(id = %note.id, "updated note");

        let updated = note.clone();
        Ok(Mutation::new(updated, self.persist()))
    }

    /// Remove the note with `id`. Nothing is written when no note matched.
    pub fn delete(&mut self, id: &NoteId) -> Mutation<bool> {
        let before = self.notes.len();
        self.notes.retain(|n| &n.id != id);
        if self.notes.len() == before {
            return Mutation::unwritten(false);
        }
        tracing::debug!(%id, "deleted note");
        Mutation::new(true, self.persist())
    }

    fn persist(&self) -> Result<()> {
        let result = self.persistence.save(&self.notes);
        if let Err(err) = &result {
            tracing::warn!(%err, "failed to persist notes");
        }
        result
    }
}
