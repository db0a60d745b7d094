use crate::error::{JotError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title stored when the user leaves the title blank.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Opaque identifier of a note. Assigned once by [`crate::id::IdGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for NoteId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A single note as it is kept in memory and in the persisted array.
///
/// Field names are camelCase on the wire so a collection written by older
/// clients (`createdAt`, `updatedAt`) loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: NoteId, draft: NoteDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content. `updated_at` never moves backwards, even if the
    /// wall clock does.
    pub fn apply(&mut self, draft: NoteDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.updated_at = now.max(self.updated_at);
    }

    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// Validated title/content pair, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// Trims both fields, rejects input where both are blank and substitutes
    /// [`DEFAULT_TITLE`] for a blank title.
    pub fn parse(title: &str, content: &str) -> Result<Self> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() && content.is_empty() {
            return Err(JotError::EmptyInput);
        }

        let title = if title.is_empty() {
            DEFAULT_TITLE
        } else {
            title
        };

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}
