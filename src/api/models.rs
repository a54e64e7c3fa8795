//! Wire models for the note synchronization API
//!
//! Rust structs mirroring the server's JSON shapes. Fields are camelCase on
//! the wire. Two historical list response shapes coexist (paged object and
//! bare array); both are decoded here and normalized to [`NotePage`] before
//! any downstream code sees them.

use crate::error::{Error, Result};
use crate::hash;
use serde::{Deserialize, Serialize};

/// A note as it appears in list responses. Content is never implied by the
/// list view; fetch a [`NoteDetail`] on demand instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    /// Last recorded operation tag (create/update/delete/rename).
    /// Informational only; never drives state transitions.
    #[serde(default)]
    pub action: String,
    pub path: String,
    /// Digest of `path`; always server-confirmed, never fabricated locally
    /// apart from `path`.
    pub path_hash: String,
    pub ctime: i64,
    pub mtime: i64,
    pub updated_timestamp: i64,
    pub updated_at: String,
    pub created_at: String,
    /// Monotonically increasing, assigned by the server on each accepted save.
    pub version: i64,
}

/// A note plus its full content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDetail {
    #[serde(flatten)]
    pub note: Note,
    pub content: String,
    pub content_hash: String,
}

/// A named vault (project/workspace root) within the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub id: i64,
    pub vault: String,
}

/// Server-side pagination cursor. `total_rows` is authoritative and may
/// exceed `page * page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub page: u32,
    pub page_size: u32,
    pub total_rows: u64,
}

/// Requested page, sanitized before transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Coerce possibly-fractional values coming from imprecise UI state.
    /// Values are floored, never rounded up, and clamped to 1.
    pub fn from_raw(page: f64, page_size: f64) -> Self {
        Self {
            page: floor_clamp(page),
            page_size: floor_clamp(page_size),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: crate::config::FIRST_PAGE,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

fn floor_clamp(value: f64) -> u32 {
    if value.is_finite() && value >= 1.0 {
        value.floor() as u32
    } else {
        1
    }
}

/// The two historical shapes of the list-notes response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NoteListPayload {
    Paged { list: Vec<Note>, pager: Pager },
    Unpaged(Vec<Note>),
}

/// Normalized list-notes result; the only shape downstream code sees.
#[derive(Debug, Clone, PartialEq)]
pub struct NotePage {
    pub list: Vec<Note>,
    pub pager: Pager,
}

impl NoteListPayload {
    /// Collapse both wire shapes into one. A legacy bare array synthesizes
    /// a single-page pager covering the full list.
    pub fn normalize(self, requested: Option<PageRequest>) -> NotePage {
        match self {
            NoteListPayload::Paged { list, pager } => NotePage { list, pager },
            NoteListPayload::Unpaged(list) => {
                let total_rows = list.len() as u64;
                let page_size = requested
                    .map(|p| p.page_size)
                    .unwrap_or_else(|| (list.len() as u32).max(1));
                NotePage {
                    list,
                    pager: Pager {
                        page: 1,
                        page_size,
                        total_rows,
                    },
                }
            }
        }
    }
}

/// An immutable server-retained snapshot of a note version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteHistory {
    pub id: i64,
    pub note_id: i64,
    pub vault_id: i64,
    pub path: String,
    /// Name of the client that produced this version.
    pub client_name: String,
    pub version: i64,
    pub created_at: String,
}

/// One page of history snapshots, in server-authoritative order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryPage {
    pub list: Vec<NoteHistory>,
    pub pager: Pager,
}

/// Edit operation within a history diff. Wire encoding follows the go-diff
/// convention: -1 delete, 0 equal, 1 insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum DiffOp {
    Delete,
    Equal,
    Insert,
}

impl From<DiffOp> for i8 {
    fn from(op: DiffOp) -> Self {
        match op {
            DiffOp::Delete => -1,
            DiffOp::Equal => 0,
            DiffOp::Insert => 1,
        }
    }
}

impl TryFrom<i8> for DiffOp {
    type Error = String;

    fn try_from(value: i8) -> std::result::Result<Self, String> {
        match value {
            -1 => Ok(DiffOp::Delete),
            0 => Ok(DiffOp::Equal),
            1 => Ok(DiffOp::Insert),
            other => Err(format!("unknown diff operation: {}", other)),
        }
    }
}

/// One segment of the edit script between a snapshot and its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSegment {
    #[serde(rename = "Type")]
    pub op: DiffOp,
    #[serde(rename = "Text")]
    pub text: String,
}

/// A history snapshot plus its content and the diff from the prior
/// retained version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteHistoryDetail {
    #[serde(flatten)]
    pub history: NoteHistory,
    pub content: String,
    #[serde(default)]
    pub diffs: Vec<DiffSegment>,
}

impl NoteHistoryDetail {
    /// Reconstruct this snapshot's document from the edit script
    /// (Equal + Insert segments, in order).
    pub fn reconstruct_new(&self) -> String {
        self.diffs
            .iter()
            .filter(|d| d.op != DiffOp::Delete)
            .map(|d| d.text.as_str())
            .collect()
    }

    /// Reconstruct the prior retained version (Equal + Delete segments).
    pub fn reconstruct_old(&self) -> String {
        self.diffs
            .iter()
            .filter(|d| d.op != DiffOp::Insert)
            .map(|d| d.text.as_str())
            .collect()
    }
}

/// Optional save fields. Hashes let the server short-circuit unchanged
/// saves; `src_path`/`src_path_hash` mark the save as a rename so history
/// continuity is preserved instead of recording delete-old + create-new.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_path_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl SaveOptions {
    /// Fill `path_hash` and `content_hash` from the note being saved.
    pub fn with_hashes(path: &str, content: &str) -> Self {
        Self {
            path_hash: Some(hash::path_hash(path)),
            content_hash: Some(hash::content_hash(content)),
            ..Self::default()
        }
    }

    /// Mark the save as a rename-with-edit from `src_path`.
    pub fn for_rename(mut self, src_path: &str) -> Self {
        self.src_path_hash = Some(hash::path_hash(src_path));
        self.src_path = Some(src_path.to_string());
        self
    }
}

/// Save-note request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNoteRequest<'a> {
    pub vault: &'a str,
    pub path: &'a str,
    pub content: &'a str,
    #[serde(flatten)]
    pub options: SaveOptions,
}

/// Delete-note request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteRequest<'a> {
    pub vault: &'a str,
    pub path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_hash: Option<&'a str>,
}

/// Acknowledgement for a mutating call. `message` is the server's success
/// text, intended for direct user display.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveAck {
    pub code: i64,
    pub message: String,
}

/// The uniform wrapper around every API response.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub details: Option<Vec<String>>,
}

impl<T> Envelope<T> {
    /// Application-level success range.
    pub fn is_success(&self) -> bool {
        self.code > 0 && self.code <= 200
    }

    /// Server message with field-level details appended for display.
    pub fn display_message(&self) -> String {
        match &self.details {
            Some(details) if !details.is_empty() => {
                format!("{}: {}", self.message, details.join(", "))
            }
            _ => self.message.clone(),
        }
    }

    /// Route the envelope: payload on success, typed error otherwise.
    pub fn into_result(self) -> Result<T> {
        if self.is_success() {
            self.data.ok_or(Error::MissingData)
        } else {
            Err(Error::Api {
                code: self.code,
                message: self.display_message(),
            })
        }
    }
}
