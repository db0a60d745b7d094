use crate::model::NoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("Please enter a title or content for your note.")]
    EmptyInput,

    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    #[error("Unknown or expired confirmation: {0}")]
    UnknownConfirmation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl JotError {
    /// True for failures coming from the storage backend rather than from user input.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            JotError::Io(_) | JotError::Serialization(_) | JotError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, JotError>;
