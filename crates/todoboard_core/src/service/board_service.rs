//! Session-scoped board service.
//!
//! # Responsibility
//! - Own the current record store snapshot for one hosting session.
//! - Guard submits with draft validation before any action is dispatched.
//! - Emit metadata-only log events for every transition.
//! - Hold the side panel visibility flag.
//!
//! # Invariants
//! - The snapshot is replaced wholesale on each dispatch.
//! - A rejected draft never reaches the store.
//! - Record names are user content and are never logged.

use crate::model::action::Action;
use crate::model::record::{Draft, DraftValidationError, Record, RecordId};
use crate::service::projection::{panel_items, table_rows, PanelItem, TableRow};
use crate::store::record_store::RecordStore;
use log::{debug, info, warn};

/// Observable effect of one dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Added(RecordId),
    Updated(RecordId),
    Removed(RecordId),
    Toggled { id: RecordId, complete: bool },
    /// Id-addressed action with no matching record.
    NoMatch(RecordId),
    /// Unknown action kind, or an add refused because ids ran out.
    Ignored,
}

impl DispatchOutcome {
    /// Whether the snapshot changed.
    pub fn changed(self) -> bool {
        !matches!(self, Self::NoMatch(_) | Self::Ignored)
    }

    /// Record affected by the action, if any.
    pub fn record_id(self) -> Option<RecordId> {
        match self {
            Self::Added(id)
            | Self::Updated(id)
            | Self::Removed(id)
            | Self::Toggled { id, .. }
            | Self::NoMatch(id) => Some(id),
            Self::Ignored => None,
        }
    }
}

/// Board state for one session: the record store plus panel visibility.
#[derive(Debug, Clone)]
pub struct TodoBoard {
    store: RecordStore,
    panel_open: bool,
}

impl Default for TodoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoBoard {
    /// Creates a board holding the seed records.
    pub fn new() -> Self {
        Self::with_store(RecordStore::seeded())
    }

    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            panel_open: false,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        table_rows(self.store.records())
    }

    pub fn panel_items(&self) -> Vec<PanelItem> {
        panel_items(self.store.records())
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Restores the seed records and closes the panel.
    pub fn reset(&mut self) {
        self.store = RecordStore::seeded();
        self.panel_open = false;
        info!(
            "event=board_reset module=board status=ok len={}",
            self.store.len()
        );
    }

    /// Applies one action to the store without validating drafts.
    pub fn dispatch(&mut self, action: &Action) -> DispatchOutcome {
        let outcome = match action {
            Action::Add { .. } => {
                let id = self.store.next_id();
                let next = self.store.apply(action);
                if next.contains(id) {
                    self.store = next;
                    DispatchOutcome::Added(id)
                } else {
                    DispatchOutcome::Ignored
                }
            }
            Action::Edit { id, .. } => {
                if self.apply_to_existing(*id, action) {
                    DispatchOutcome::Updated(*id)
                } else {
                    DispatchOutcome::NoMatch(*id)
                }
            }
            Action::Remove { id } => {
                if self.apply_to_existing(*id, action) {
                    DispatchOutcome::Removed(*id)
                } else {
                    DispatchOutcome::NoMatch(*id)
                }
            }
            Action::ToggleComplete { id } => {
                if self.apply_to_existing(*id, action) {
                    DispatchOutcome::Toggled {
                        id: *id,
                        complete: self.store.get(*id).is_some_and(|record| record.complete),
                    }
                } else {
                    DispatchOutcome::NoMatch(*id)
                }
            }
            Action::Unknown => DispatchOutcome::Ignored,
        };

        log_outcome(action, outcome, self.store.len());
        outcome
    }

    /// Replaces the snapshot when `id` is present; a miss leaves it untouched.
    fn apply_to_existing(&mut self, id: RecordId, action: &Action) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.store = self.store.apply(action);
        true
    }

    /// Validates `draft` and dispatches `add` when it passes.
    pub fn submit_add(&mut self, draft: Draft) -> Result<DispatchOutcome, DraftValidationError> {
        guard_draft(&draft, "add")?;
        Ok(self.dispatch(&Action::Add { draft }))
    }

    /// Validates `draft` and dispatches `edit` when it passes.
    pub fn submit_edit(
        &mut self,
        id: RecordId,
        draft: Draft,
    ) -> Result<DispatchOutcome, DraftValidationError> {
        guard_draft(&draft, "edit")?;
        Ok(self.dispatch(&Action::Edit { id, draft }))
    }

    pub fn remove(&mut self, id: RecordId) -> DispatchOutcome {
        self.dispatch(&Action::Remove { id })
    }

    pub fn toggle_complete(&mut self, id: RecordId) -> DispatchOutcome {
        self.dispatch(&Action::ToggleComplete { id })
    }
}

fn guard_draft(draft: &Draft, kind: &str) -> Result<(), DraftValidationError> {
    draft.validate().map_err(|err| {
        warn!(
            "event=draft_rejected module=board status=rejected kind={} reason={}",
            kind,
            err.reason()
        );
        err
    })
}

fn log_outcome(action: &Action, outcome: DispatchOutcome, len: usize) {
    let id = outcome
        .record_id()
        .map_or_else(|| "none".to_string(), |id| id.to_string());
    if outcome.changed() {
        info!(
            "event=record_dispatch module=board status=ok kind={} id={} len={}",
            action.kind_label(),
            id,
            len
        );
    } else {
        debug!(
            "event=record_dispatch module=board status=noop kind={} id={} len={}",
            action.kind_label(),
            id,
            len
        );
    }
}
