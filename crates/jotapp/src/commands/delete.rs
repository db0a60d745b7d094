//! Two-step delete: a request hands out a token, only confirming that token
//! removes the note. The front end decides how to ask the user.

use crate::commands::{unsaved_warning, CmdMessage, CmdResult, FormState};
use crate::error::{JotError, Result};
use crate::id::IdGenerator;
use crate::model::NoteId;
use crate::session::EditingSession;
use crate::store::{NoteStore, StorageBackend};
use std::collections::HashMap;

pub const CONFIRM_MESSAGE: &str = "Are you sure you want to delete this note?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub token: String,
    pub note_id: NoteId,
    pub title: String,
    pub message: String,
}

/// Outstanding delete requests, keyed by token. Tokens are single use.
#[derive(Debug, Default)]
pub struct PendingDeletes {
    pending: HashMap<String, NoteId>,
    ids: IdGenerator,
}

impl PendingDeletes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Issue a token for `id`. An earlier outstanding token for the same note
    /// is dropped, so each note has at most one open prompt.
    fn issue(&mut self, id: NoteId) -> String {
        self.forget(&id);
        let mut token = self.ids.token();
        while self.pending.contains_key(&token) {
            token = self.ids.token();
        }
        self.pending.insert(token.clone(), id);
        token
    }

    fn take(&mut self, token: &str) -> Result<NoteId> {
        self.pending
            .remove(token)
            .ok_or_else(|| JotError::UnknownConfirmation(token.to_string()))
    }

    fn forget(&mut self, id: &NoteId) {
        self.pending.retain(|_, pending_id| pending_id != id);
    }
}

pub fn request<B: StorageBackend>(
    store: &NoteStore<B>,
    pending: &mut PendingDeletes,
    id: &NoteId,
) -> Result<CmdResult> {
    let note = store
        .get(id)
        .ok_or_else(|| JotError::NoteNotFound(id.clone()))?;
    let token = pending.issue(id.clone());

    Ok(CmdResult::default().with_prompt(DeletePrompt {
        token,
        note_id: id.clone(),
        title: note.title.clone(),
        message: CONFIRM_MESSAGE.to_string(),
    }))
}

pub fn confirm<B: StorageBackend>(
    store: &mut NoteStore<B>,
    session: &mut EditingSession,
    pending: &mut PendingDeletes,
    token: &str,
) -> Result<CmdResult> {
    let id = pending.take(token)?;
    let removed_note = store.get(&id).cloned();
    let mutation = store.delete(&id);
    pending.forget(&id);
    let mut result = CmdResult::default();

    match removed_note {
        Some(note) if mutation.value => {
            result.add_message(CmdMessage::success(format!("Note deleted: {}", note.title)));
            result.affected_notes.push(note);
        }
        _ => result.add_message(CmdMessage::info("Note was already deleted")),
    }
    if let Some(err) = &mutation.persist_error {
        result.add_message(unsaved_warning(err));
    }

    if session.is_editing(&id) {
        session.clear();
        result = result.with_form(FormState::blank(session));
    }
    Ok(result)
}

pub fn cancel(pending: &mut PendingDeletes, token: &str) -> Result<CmdResult> {
    pending.take(token)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Delete cancelled"));
    Ok(result)
}
