//! # Storage Layer
//!
//! Jot keeps its notes in memory and writes the whole collection back after
//! every mutation. Storage is split in three pieces:
//!
//! 1. [`StorageBackend`]: raw string get/set keyed by name. Knows nothing
//!    about notes.
//! 2. [`NotePersistence`]: encodes the collection as a JSON array under one
//!    fixed key (default `"notes"`).
//! 3. [`NoteStore`]: the owner of the in-memory collection and the only type
//!    allowed to mutate it.
//!
//! ## Failure Model
//!
//! - **Load**: missing data is an empty collection. Unreadable data is *also*
//!   an empty collection; the error is logged and kept on the store so a UI can
//!   tell the user once.
//! - **Write**: the mutation stays applied in memory and the error travels back
//!   inside [`Mutation::persist_error`]. Nothing is retried.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key (`<key>.json`), atomic writes.
//! - [`mem_backend::MemBackend`]: in-memory, with error simulation for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── notes.json      # the note collection (JSON array)
//! └── config.json     # client configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;
pub mod persistence;

pub use backend::StorageBackend;
pub use note_store::{Mutation, NoteStore};
pub use persistence::{NotePersistence, DEFAULT_STORAGE_KEY};
