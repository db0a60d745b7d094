use crate::model::{Note, NoteId};
use crate::session::EditingSession;

pub mod clear;
pub mod delete;
pub mod edit;
pub mod save;

pub use delete::{DeletePrompt, PendingDeletes};

/// A discrete request coming from a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Create a note, or update the one being edited.
    Save { title: String, content: String },
    /// Load a note into the form.
    Edit(NoteId),
    /// Ask for a delete; answered with a [`DeletePrompt`].
    RequestDelete(NoteId),
    ConfirmDelete(String),
    CancelDelete(String),
    /// Blank the form and stop editing.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What the input form should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub content: String,
    pub action_label: &'static str,
}

impl FormState {
    pub fn blank(session: &EditingSession) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            action_label: session.action_label(),
        }
    }

    pub fn editing(note: &Note, session: &EditingSession) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            action_label: session.action_label(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub form: Option<FormState>,
    pub prompt: Option<DeletePrompt>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_form(mut self, form: FormState) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_prompt(mut self, prompt: DeletePrompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// Message for a mutation whose write failed.
pub(crate) fn unsaved_warning(err: &crate::error::JotError) -> CmdMessage {
    CmdMessage::warning(format!(
        "Changes are kept for this session but could not be saved ({}). \
         They may be lost on restart.",
        err
    ))
}
