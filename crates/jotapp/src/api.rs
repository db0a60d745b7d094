//! # API Facade
//!
//! [`JotApi`] is the single entry point for front ends. It owns the note store,
//! the editing session and the outstanding delete confirmations, and turns each
//! [`Intent`] into exactly one command call.
//!
//! The API does not print, prompt or decide how things look: it returns
//! [`CmdResult`] values and a [`RenderState`] that the caller draws however it
//! likes.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `JotApi<FsBackend>`
//! - Testing: `JotApi<MemBackend>`

use crate::commands::{self, CmdMessage, CmdResult, Intent, PendingDeletes};
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::render::{render_state, render_state_with, Escaper, RenderState};
use crate::session::EditingSession;
use crate::store::{NotePersistence, NoteStore, StorageBackend};
use chrono::{DateTime, TimeZone};
use std::fmt;

pub struct JotApi<B: StorageBackend> {
    store: NoteStore<B>,
    session: EditingSession,
    pending: PendingDeletes,
}

impl<B: StorageBackend> JotApi<B> {
    pub fn new(store: NoteStore<B>) -> Self {
        Self {
            store,
            session: EditingSession::default(),
            pending: PendingDeletes::new(),
        }
    }

    pub fn open(persistence: NotePersistence<B>) -> Self {
        Self::new(NoteStore::open(persistence))
    }

    /// Dispatch table: every intent maps to one command.
    pub fn dispatch(&mut self, intent: Intent) -> Result<CmdResult> {
        match intent {
            Intent::Save { title, content } => self.save(&title, &content),
            Intent::Edit(id) => self.edit(&id),
            Intent::RequestDelete(id) => self.request_delete(&id),
            Intent::ConfirmDelete(token) => self.confirm_delete(&token),
            Intent::CancelDelete(token) => self.cancel_delete(&token),
            Intent::Clear => Ok(self.clear()),
        }
    }

    pub fn save(&mut self, title: &str, content: &str) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &mut self.session, title, content)
    }

    pub fn edit(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::edit::run(&self.store, &mut self.session, id)
    }

    pub fn request_delete(&mut self, id: &NoteId) -> Result<CmdResult> {
        commands::delete::request(&self.store, &mut self.pending, id)
    }

    pub fn confirm_delete(&mut self, token: &str) -> Result<CmdResult> {
        commands::delete::confirm(&mut self.store, &mut self.session, &mut self.pending, token)
    }

    pub fn cancel_delete(&mut self, token: &str) -> Result<CmdResult> {
        commands::delete::cancel(&mut self.pending, token)
    }

    pub fn clear(&mut self) -> CmdResult {
        commands::clear::run(&mut self.session)
    }

    /// One-shot notice when the stored collection could not be read at startup.
    pub fn take_startup_messages(&mut self) -> Vec<CmdMessage> {
        self.store
            .take_load_warning()
            .map(|err| {
                CmdMessage::warning(format!(
                    "Stored notes could not be read ({}). Starting with an empty list.",
                    err
                ))
            })
            .into_iter()
            .collect()
    }

    pub fn render<Tz>(&self, now: &DateTime<Tz>) -> RenderState
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        render_state(self.store.list(), now)
    }

    /// Like [`JotApi::render`] with a sink-specific escaper (e.g. for terminals).
    pub fn render_with<Tz>(&self, now: &DateTime<Tz>, escaper: Escaper) -> RenderState
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        render_state_with(self.store.list(), now, escaper)
    }

    pub fn notes(&self) -> &[Note] {
        self.store.list()
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }
}
