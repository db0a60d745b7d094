use crate::commands::{CmdResult, FormState};
use crate::error::{JotError, Result};
use crate::model::NoteId;
use crate::session::EditingSession;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &NoteStore<B>,
    session: &mut EditingSession,
    id: &NoteId,
) -> Result<CmdResult> {
    let note = store
        .get(id)
        .ok_or_else(|| JotError::NoteNotFound(id.clone()))?;
    session.begin(id.clone());

    Ok(CmdResult::default()
        .with_form(FormState::editing(note, session))
        .with_affected_notes(vec![note.clone()]))
}
