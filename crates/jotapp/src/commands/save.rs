use crate::commands::{unsaved_warning, CmdMessage, CmdResult, FormState};
use crate::error::{JotError, Result};
use crate::session::EditingSession;
use crate::store::{NoteStore, StorageBackend};

/// Create a note, or update the note under edit. On success the session is
/// back to idle and the form is blank. Blank input leaves everything as is.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    session: &mut EditingSession,
    title: &str,
    content: &str,
) -> Result<CmdResult> {
    let (mutation, verb) = match session.current_id().cloned() {
        Some(id) => match store.update(&id, title, content) {
            Ok(mutation) => (mutation, "updated"),
            Err(err @ JotError::NoteNotFound(_)) => {
                session.clear();
                return Err(err);
            }
            Err(err) => return Err(err),
        },
        None => (store.create(title, content)?, "created"),
    };

    session.clear();
    let mut result = CmdResult::default().with_form(FormState::blank(session));
    result.add_message(CmdMessage::success(format!(
        "Note {}: {}",
        verb, mutation.value.title
    )));
    if let Some(err) = &mutation.persist_error {
        result.add_message(unsaved_warning(err));
    }
    result.affected_notes.push(mutation.value);
    Ok(result)
}
