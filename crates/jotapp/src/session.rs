use crate::model::NoteId;

pub const SAVE_LABEL: &str = "Save Note";
pub const UPDATE_LABEL: &str = "Update Note";

/// Which note, if any, the input form is currently editing.
///
/// Every transition is allowed: `begin` while already editing simply switches
/// to the new note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditingSession {
    #[default]
    Idle,
    Editing(NoteId),
}

impl EditingSession {
    pub fn begin(&mut self, id: NoteId) {
        *self = EditingSession::Editing(id);
    }

    pub fn clear(&mut self) {
        *self = EditingSession::Idle;
    }

    pub fn current_id(&self) -> Option<&NoteId> {
        match self {
            EditingSession::Idle => None,
            EditingSession::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self, id: &NoteId) -> bool {
        self.current_id() == Some(id)
    }

    /// Label for the form's primary action.
    pub fn action_label(&self) -> &'static str {
        match self {
            EditingSession::Idle => SAVE_LABEL,
            EditingSession::Editing(_) => UPDATE_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let session = EditingSession::default();
        assert_eq!(session.current_id(), None);
        assert_eq!(session.action_label(), SAVE_LABEL);
    }

    #[test]
    fn last_begin_wins() {
        let mut session = EditingSession::default();
        session.begin(NoteId::from("a"));
        session.begin(NoteId::from("b"));
        assert_eq!(session.current_id(), Some(&NoteId::from("b")));
        assert_eq!(session.action_label(), UPDATE_LABEL);
    }

    #[test]
    fn clear_from_any_state() {
        let mut session = EditingSession::default();
        session.clear();
        assert_eq!(session, EditingSession::Idle);

        session.begin(NoteId::from("a"));
        session.clear();
        assert_eq!(session, EditingSession::Idle);
    }
}
