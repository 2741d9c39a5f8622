//! Action vocabulary for record store transitions.
//!
//! # Invariants
//! - The vocabulary is closed; anything unrecognized decodes to `Unknown`,
//!   which the store treats as an identity transition.

use crate::model::record::{Draft, RecordId};
use serde::{Deserialize, Serialize};

/// Discrete request to transform the record sequence.
///
/// Wire shape is tagged by `kind`:
/// `{"kind":"add","draft":{..}}`, `{"kind":"edit","id":5,"draft":{..}}`,
/// `{"kind":"remove","id":1}`, `{"kind":"toggleComplete","id":4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    Add { draft: Draft },
    Edit { id: RecordId, draft: Draft },
    Remove { id: RecordId },
    ToggleComplete { id: RecordId },
    /// Any kind this build does not know about.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Stable label used in log lines.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Remove { .. } => "remove",
            Self::ToggleComplete { .. } => "toggle_complete",
            Self::Unknown => "unknown",
        }
    }

    /// Record targeted by id-addressed actions.
    pub fn target_id(&self) -> Option<RecordId> {
        match self {
            Self::Edit { id, .. } | Self::Remove { id } | Self::ToggleComplete { id } => Some(*id),
            Self::Add { .. } | Self::Unknown => None,
        }
    }
}
