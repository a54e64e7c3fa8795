//! HTTP API surface: wire models and the note transport client.

pub mod client;
pub mod models;

pub use client::NoteClient;
