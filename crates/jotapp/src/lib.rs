//! # Jot Architecture
//!
//! Jot is a **UI-agnostic note library**. It owns a list of short notes, keeps
//! it in sync with a key-value store and derives everything a front end needs
//! to draw it. The `jot` binary is one such front end; a browser or TUI client
//! would sit on the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front end (e.g. the `jot` CLI)                             │
//! │  - Captures input, asks for confirmation, draws RenderState │
//! │  - Only speaks in Intents                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Intent dispatch table                                    │
//! │  - Owns store, editing session, pending deletes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - save / edit / delete / clear logic                       │
//! │  - Returns CmdResult: affected notes, form state, messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore owns the collection                            │
//! │  - NotePersistence encodes it as one JSON array             │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward prints, prompts or exits. Failures come back
//! as [`error::JotError`] or, for writes that failed after the in-memory
//! change, as warning messages in the [`commands::CmdResult`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and intent dispatch
//! - [`commands`]: Intent handlers
//! - [`store`]: Note store, persistence adapter, backends
//! - [`model`]: `Note`, `NoteId`, input validation
//! - [`session`]: Editing session state
//! - [`id`]: Identifier generation
//! - [`format`] / [`render`]: Labels, escaping and render state
//! - [`config`]: Configuration and data directory discovery
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod id;
pub mod model;
pub mod render;
pub mod session;
pub mod store;

