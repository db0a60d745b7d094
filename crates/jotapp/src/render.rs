//! View state handed to render sinks.
//!
//! A sink never sees a [`Note`] directly: it gets escaped strings and
//! precomputed labels, and only talks back through [`crate::commands::Intent`]s.

use crate::format::{date_label, escape, total_label};
use crate::model::{Note, NoteId};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;

pub const EMPTY_MESSAGE: &str = "No notes yet. Create your first note above!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderState {
    pub notes: Vec<NoteView>,
    pub total_label: String,
    pub empty_message: Option<String>,
}

impl RenderState {
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Neutralizes whatever is special to a particular sink.
pub type Escaper = fn(&str) -> String;

/// Render state for markup sinks: title and content are HTML-escaped.
pub fn render_state<Tz>(notes: &[Note], now: &DateTime<Tz>) -> RenderState
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    render_state_with(notes, now, escape)
}

pub fn render_state_with<Tz>(notes: &[Note], now: &DateTime<Tz>, escaper: Escaper) -> RenderState
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let views = notes
        .iter()
        .map(|note| NoteView {
            id: note.id.clone(),
            title: escaper(&note.title),
            content: escaper(&note.content),
            date_label: date_label(note, now),
        })
        .collect::<Vec<_>>();

    RenderState {
        empty_message: views.is_empty().then(|| EMPTY_MESSAGE.to_string()),
        total_label: total_label(views.len()),
        notes: views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteDraft;
    use chrono::{Duration, Utc};

    #[test]
    fn empty_collection() {
        let state = render_state(&[], &Utc::now());
        assert!(state.is_empty());
        assert_eq!(state.total_label, "0 notes");
        assert_eq!(state.empty_message.as_deref(), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn views_are_escaped_and_ordered() {
        let now = Utc::now();
        let notes = vec![
            Note::new(
                NoteId::from("b"),
                NoteDraft::parse("<i>New</i>", "x & y").unwrap(),
                now,
            ),
            Note::new(
                NoteId::from("a"),
                NoteDraft::parse("Old", "").unwrap(),
                now - Duration::days(3),
            ),
        ];

        let state = render_state(&notes, &now);
        assert_eq!(state.total_label, "2 notes");
        assert!(state.empty_message.is_none());
        assert_eq!(state.notes[0].id, NoteId::from("b"));
        assert_eq!(state.notes[0].title, "&lt;i&gt;New&lt;/i&gt;");
        assert_eq!(state.notes[0].content, "x &amp; y");
        assert_eq!(state.notes[0].date_label, "Created Today");
        assert_eq!(state.notes[1].date_label, "Created 2 days ago");
    }

    #[test]
    fn terminal_escaper_keeps_markup_characters() {
        let now = Utc::now();
        let notes = vec![Note::new(
            NoteId::from("a"),
            NoteDraft::parse("a < b", "\u{1b}[31mred").unwrap(),
            now,
        )];
        let state = render_state_with(&notes, &now, crate::format::escape_terminal);
        assert_eq!(state.notes[0].title, "a < b");
        assert_eq!(state.notes[0].content, "\u{fffd}[31mred");
    }

    #[test]
    fn single_note_label() {
        let now = Utc::now();
        let notes = vec![Note::new(
            NoteId::from("a"),
            NoteDraft::parse("One", "").unwrap(),
            now,
        )];
        assert_eq!(render_state(&notes, &now).total_label, "1 note");
    }
}
