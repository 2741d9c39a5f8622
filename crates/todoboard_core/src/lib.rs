//! Core domain logic for the to-do board.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::action::Action;
pub use model::record::{parse_age, Age, Draft, DraftValidationError, Record, RecordId};
pub use service::board_service::{DispatchOutcome, TodoBoard};
pub use service::form_service::{FormError, FormSession, FormTarget};
pub use service::projection::{panel_items, table_rows, PanelItem, TableRow};
pub use store::record_store::{RecordStore, StoreError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
