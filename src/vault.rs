//! Active-vault resolution
//!
//! Tracks which vault the session is pointed at and revalidates that
//! selection whenever the vault list is reloaded, so the notes view never
//! references a vault that was deleted or renamed elsewhere. The selection
//! is session-local UI state, not server state; it is mutated only here and
//! by explicit user switches, never implicitly by a save or delete.

use crate::api::client::NoteClient;
use crate::api::models::Vault;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct VaultSelection {
    active_vault: Option<String>,
    vaults_loaded: bool,
}

impl VaultSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_vault(&self) -> Option<&str> {
        self.active_vault.as_deref()
    }

    /// Gate for the notes view: false until at least one resolution pass
    /// has completed since the last reload began.
    pub fn vaults_loaded(&self) -> bool {
        self.vaults_loaded
    }

    /// Explicit user switch. The only other writer is [`resolve`].
    ///
    /// [`resolve`]: VaultSelection::resolve
    pub fn switch_to(&mut self, vault: &str) {
        self.active_vault = Some(vault.to_string());
    }

    /// Apply a reloaded vault list to the selection.
    ///
    /// A selection that is unset or missing from a non-empty list (exact
    /// name match) falls back to the first element; server list order is
    /// authoritative and never re-sorted. An empty list leaves a prior
    /// selection in place, even though it is currently unconfirmed.
    /// `vaults_loaded` becomes true unconditionally.
    pub fn resolve(&mut self, vaults: &[Vault]) {
        if !vaults.is_empty() {
            let exists = self
                .active_vault
                .as_deref()
                .is_some_and(|active| vaults.iter().any(|v| v.vault == active));

            if !exists {
                tracing::debug!("Active vault reset to: {}", vaults[0].vault);
                self.active_vault = Some(vaults[0].vault.clone());
            }
        }

        self.vaults_loaded = true;
    }

    /// Fetch the vault list and revalidate the selection against it.
    ///
    /// On a fetch failure the selection is untouched but the gate still
    /// opens, so the UI can render and let the user retry manually.
    pub async fn reload(&mut self, client: &NoteClient) -> Result<Vec<Vault>> {
        self.vaults_loaded = false;

        match client.list_vaults().await {
            Ok(vaults) => {
                self.resolve(&vaults);
                Ok(vaults)
            }
            Err(e) => {
                tracing::warn!("Vault list reload failed: {}", e);
                self.vaults_loaded = true;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vaults(names: &[&str]) -> Vec<Vault> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Vault { id: i as i64 + 1, vault: name.to_string() })
            .collect()
    }

    #[test]
    fn test_missing_selection_falls_back_to_first() {
        let mut selection = VaultSelection::new();
        selection.switch_to("A");

        selection.resolve(&vaults(&["B", "C"]));

        assert_eq!(selection.active_vault(), Some("B"));
        assert!(selection.vaults_loaded());
    }

    #[test]
    fn test_present_selection_is_kept() {
        let mut selection = VaultSelection::new();
        selection.switch_to("B");

        selection.resolve(&vaults(&["B", "C"]));

        assert_eq!(selection.active_vault(), Some("B"));
    }

    #[test]
    fn test_unset_selection_takes_first() {
        let mut selection = VaultSelection::new();

        selection.resolve(&vaults(&["C", "A"]));

        assert_eq!(selection.active_vault(), Some("C"));
    }

    #[test]
    fn test_empty_list_preserves_selection_but_still_loads() {
        let mut selection = VaultSelection::new();
        selection.switch_to("A");

        selection.resolve(&[]);

        assert_eq!(selection.active_vault(), Some("A"));
        assert!(selection.vaults_loaded());
    }

    #[test]
    fn test_empty_list_with_no_selection() {
        let mut selection = VaultSelection::new();

        selection.resolve(&[]);

        assert_eq!(selection.active_vault(), None);
        assert!(selection.vaults_loaded());
    }
}
