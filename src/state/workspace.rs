//! Workspace list and selection store for the my-page shell.
//!
//! DESIGN
//! ======
//! The list is replaced wholesale on every fetch; there is no
//! incremental merge. Overlapping fetches are last-write-wins (no
//! request fencing) and no timeout is applied, so a hung backend hangs
//! the operation. The `loading` flag has a single reset point per
//! outcome, so it can never be left set.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::config::ApiConfig;
pub use crate::net::types::Workspace;

/// User-facing message for a failed workspace fetch.
pub const ERR_FETCH_WORKSPACES: &str = "Failed to fetch workspaces";

/// What happens to `current` when a refetch no longer contains it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaleSelection {
    /// Leave the selection in place even when absent from the new set.
    #[default]
    Keep,
    /// Drop a selection that is absent from a freshly fetched set.
    ClearIfAbsent,
}

/// Workspace store state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkspaceState {
    /// All workspaces visible to the session user, in backend order.
    pub workspaces: Vec<Workspace>,
    /// The selected workspace, if any.
    pub current: Option<Workspace>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Last fetch failure message, empty when the last fetch succeeded.
    pub error: String,
    /// Policy applied to `current` when a refetch drops it from the set.
    pub stale_selection: StaleSelection,
}

impl WorkspaceState {
    /// Mark a fetch as in flight and clear any stale error.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    /// Replace the set wholesale and resolve the selection.
    ///
    /// A fresh non-empty set selects its first element only when no
    /// selection exists. An existing selection is handled by the
    /// [`StaleSelection`] policy.
    pub fn apply_fetched(&mut self, workspaces: Vec<Workspace>) {
        self.workspaces = workspaces;
        match &self.current {
            None => self.current = self.workspaces.first().cloned(),
            Some(current) => {
                let still_present = self.workspaces.iter().any(|w| w.id == current.id);
                if self.stale_selection == StaleSelection::ClearIfAbsent && !still_present {
                    self.current = None;
                }
            }
        }
        self.loading = false;
    }

    /// Record a fetch failure; the previously loaded set is untouched.
    pub fn apply_fetch_error(&mut self) {
        self.error = ERR_FETCH_WORKSPACES.to_owned();
        self.loading = false;
    }

    /// Unconditionally overwrite the selection.
    ///
    /// No membership check against the loaded set is performed.
    pub fn set_current(&mut self, workspace: Workspace) {
        self.current = Some(workspace);
    }
}

/// Load the workspace list for `user_id`, replacing the current set.
///
/// Failures leave the set untouched and surface through the store error
/// string; the typed detail is only logged.
pub async fn fetch_workspaces(state: RwSignal<WorkspaceState>, config: &ApiConfig, user_id: i64) {
    state.update(WorkspaceState::begin_fetch);
    match api::fetch_workspaces(&config.base_url, user_id).await {
        Ok(list) => state.update(|s| s.apply_fetched(list)),
        Err(err) => {
            log::warn!("workspace fetch failed for user {user_id}: {err}");
            state.update(WorkspaceState::apply_fetch_error);
        }
    }
}

/// Select `workspace` as current.
pub fn set_current_workspace(state: RwSignal<WorkspaceState>, workspace: Workspace) {
    state.update(|s| s.set_current(workspace));
}
