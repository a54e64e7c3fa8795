//! View-state reconciliation
//!
//! The state machine deciding whether the user sees the note list, a
//! read-only note, or an editor, plus the guard that discards responses
//! whose originating selection is no longer current. Returning to the list
//! after a successful save forces a fresh list fetch; that fetch is the
//! sole mechanism by which server-assigned fields (version, timestamps,
//! recomputed hashes) reach the UI.

use crate::api::models::Note;

/// How a note was opened from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    View,
    Edit,
}

/// Current view of the note manager. There is no terminal state; the
/// machine is re-entered indefinitely as the user navigates.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    List,
    Viewing(Note),
    /// `Editing(None)` is a brand-new note; a save from there performs a
    /// create, not an update.
    Editing(Option<Note>),
}

impl ViewState {
    /// Open a note from the list, read-only or straight into the editor.
    /// Ignored outside the list.
    pub fn select(self, note: Note, mode: Mode) -> Self {
        match (self, mode) {
            (ViewState::List, Mode::View) => ViewState::Viewing(note),
            (ViewState::List, Mode::Edit) => ViewState::Editing(Some(note)),
            (other, _) => other,
        }
    }

    /// Start a new note.
    pub fn create(self) -> Self {
        match self {
            ViewState::List => ViewState::Editing(None),
            other => other,
        }
    }

    /// Switch a viewed note into the editor.
    pub fn edit(self) -> Self {
        match self {
            ViewState::Viewing(note) => ViewState::Editing(Some(note)),
            other => other,
        }
    }

    /// Leave the viewer or editor, discarding in-progress edits. Whether
    /// to confirm the discard is the UI collaborator's decision.
    pub fn back(self) -> Self {
        match self {
            ViewState::Viewing(_) | ViewState::Editing(_) => ViewState::List,
            other => other,
        }
    }

    /// Fold a successful save or delete back into the list. The saved
    /// note's identity is not retained for further local edits.
    pub fn save_success(self) -> Self {
        match self {
            ViewState::Editing(_) => ViewState::List,
            other => other,
        }
    }

    /// True when a save from the current state performs a create.
    pub fn is_create(&self) -> bool {
        matches!(self, ViewState::Editing(None))
    }
}

/// Selection captured when a request is issued, compared against the
/// current selection before the response is applied.
///
/// There is no cancellation primitive: a request outlives any navigation
/// that made it irrelevant, and its late response is simply dropped when
/// this check fails. A dropped response is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContext {
    vault: String,
    path: Option<String>,
}

impl ResponseContext {
    /// Context for vault-scoped requests (note lists).
    pub fn for_vault(vault: &str) -> Self {
        Self { vault: vault.to_string(), path: None }
    }

    /// Context for note-scoped requests (get, history).
    pub fn for_note(vault: &str, path: &str) -> Self {
        Self {
            vault: vault.to_string(),
            path: Some(path.to_string()),
        }
    }

    /// Whether a completed response may still be applied.
    pub fn is_current(&self, active_vault: Option<&str>, selected_path: Option<&str>) -> bool {
        if active_vault != Some(self.vault.as_str()) {
            return false;
        }
        match &self.path {
            Some(path) => selected_path == Some(path.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash;

    fn note(path: &str) -> Note {
        Note {
            id: 1,
            action: "update".to_string(),
            path: path.to_string(),
            path_hash: hash::path_hash(path),
            ctime: 0,
            mtime: 0,
            updated_timestamp: 0,
            updated_at: String::new(),
            created_at: String::new(),
            version: 1,
        }
    }

    #[test]
    fn test_select_for_viewing() {
        let state = ViewState::List.select(note("a.md"), Mode::View);
        assert_eq!(state, ViewState::Viewing(note("a.md")));
    }

    #[test]
    fn test_select_for_editing() {
        let state = ViewState::List.select(note("a.md"), Mode::Edit);
        assert_eq!(state, ViewState::Editing(Some(note("a.md"))));
        assert!(!state.is_create());
    }

    #[test]
    fn test_create_has_no_note_identity() {
        let state = ViewState::List.create();
        assert!(state.is_create());
    }

    #[test]
    fn test_viewing_to_editing() {
        let state = ViewState::Viewing(note("a.md")).edit();
        assert_eq!(state, ViewState::Editing(Some(note("a.md"))));
    }

    #[test]
    fn test_back_discards_edits() {
        assert_eq!(ViewState::Editing(Some(note("a.md"))).back(), ViewState::List);
        assert_eq!(ViewState::Viewing(note("a.md")).back(), ViewState::List);
        assert_eq!(ViewState::List.back(), ViewState::List);
    }

    #[test]
    fn test_save_success_returns_to_list() {
        assert_eq!(ViewState::Editing(None).save_success(), ViewState::List);
        assert_eq!(ViewState::Editing(Some(note("a.md"))).save_success(), ViewState::List);
    }

    #[test]
    fn test_select_ignored_outside_list() {
        let editing = ViewState::Editing(None);
        assert_eq!(editing.clone().select(note("a.md"), Mode::View), editing);
    }

    #[test]
    fn test_stale_response_after_vault_switch() {
        // Request issued while vault "A" was active.
        let ctx = ResponseContext::for_note("A", "a.md");

        // User switches to vault "B" before the response arrives.
        assert!(!ctx.is_current(Some("B"), Some("a.md")));

        // Still current when nothing changed.
        assert!(ctx.is_current(Some("A"), Some("a.md")));
    }

    #[test]
    fn test_stale_response_after_note_switch() {
        let ctx = ResponseContext::for_note("A", "a.md");
        assert!(!ctx.is_current(Some("A"), Some("b.md")));
        assert!(!ctx.is_current(Some("A"), None));
    }

    #[test]
    fn test_vault_scoped_context_ignores_note_selection() {
        let ctx = ResponseContext::for_vault("A");
        assert!(ctx.is_current(Some("A"), Some("anything.md")));
        assert!(!ctx.is_current(None, None));
    }
}
