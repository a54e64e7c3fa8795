//! Vaultnotes client library
//!
//! Synchronizes an Obsidian-style vault of notes against a remote server:
//! a typed HTTP transport for the note and history endpoints, content/path
//! digests for change detection and optimistic concurrency, active-vault
//! resolution, and the view state machine that folds list/view/edit
//! navigation back into a consistent selection.

pub mod api;
pub mod config;
pub mod error;
pub mod hash;
pub mod vault;
pub mod view;

pub use api::client::NoteClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
