//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the session board to Dart via FRB as sync, use-case-level calls.
//! - Serialize every call through one board lock (single writer).
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Validation failures never reach the record store.
//! - Lookup misses are reported as successful no-ops, not failures.

use log::warn;
use std::sync::{Mutex, OnceLock, PoisonError};
use todoboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Action, DispatchOutcome, Draft, PanelItem, Record, TodoBoard,
};

static BOARD: OnceLock<Mutex<TodoBoard>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Table row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    pub id: u64,
    pub name: String,
    /// `None` when the age text was not a whole number.
    pub age: Option<i64>,
    pub complete: bool,
    /// `active` or `inactive`.
    pub status: String,
}

/// Side panel entry as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPanelItem {
    pub id: u64,
    pub primary: String,
    pub secondary: String,
}

/// Action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the request was accepted.
    pub ok: bool,
    /// Record the action touched, when any.
    pub record_id: Option<u64>,
    /// Whether the record list changed.
    pub changed: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn from_outcome(outcome: DispatchOutcome) -> Self {
        let message = match outcome {
            DispatchOutcome::Added(_) => "Record added.",
            DispatchOutcome::Updated(_) => "Record updated.",
            DispatchOutcome::Removed(_) => "Record removed.",
            DispatchOutcome::Toggled { complete: true, .. } => "Record marked complete.",
            DispatchOutcome::Toggled { complete: false, .. } => "Record marked incomplete.",
            DispatchOutcome::NoMatch(_) => "No matching record.",
            DispatchOutcome::Ignored => "Action ignored.",
        };
        Self {
            ok: true,
            record_id: outcome.record_id(),
            changed: outcome.changed(),
            message: message.to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            changed: false,
            message: message.into(),
        }
    }
}

/// Lists records in table order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_list() -> Vec<BoardRecord> {
    with_board(|board| board.records().iter().map(to_board_record).collect())
}

/// Lists the read-only side panel projection.
#[flutter_rust_bridge::frb(sync)]
pub fn board_panel() -> Vec<BoardPanelItem> {
    with_board(|board| {
        board
            .panel_items()
            .into_iter()
            .map(to_board_panel_item)
            .collect()
    })
}

/// Adds a record from raw form text.
///
/// # FFI contract
/// - Blank (after trim) name or age returns `ok=false`; nothing is stored.
/// - Non-numeric age is accepted and reported back as `age=None`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add(name: String, age: String) -> BoardActionResponse {
    with_board(|board| add_on(board, name, age))
}

/// Replaces name and age of one record from raw form text.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit(id: u64, name: String, age: String) -> BoardActionResponse {
    with_board(|board| edit_on(board, id, name, age))
}

/// Removes one record.
#[flutter_rust_bridge::frb(sync)]
pub fn board_remove(id: u64) -> BoardActionResponse {
    with_board(|board| BoardActionResponse::from_outcome(board.remove(id)))
}

/// Flips the complete flag of one record.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_complete(id: u64) -> BoardActionResponse {
    with_board(|board| BoardActionResponse::from_outcome(board.toggle_complete(id)))
}

/// Dispatches one wire-format action, e.g. `{"kind":"remove","id":1}`.
///
/// # FFI contract
/// - Malformed JSON returns `ok=false` with the decode error.
/// - Unknown `kind` values are accepted as no-ops.
/// - `add`/`edit` drafts pass the same blank-field guard as `board_add`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_dispatch_json(action_json: String) -> BoardActionResponse {
    with_board(|board| dispatch_json_on(board, &action_json))
}

/// Restores the seed records.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset() {
    with_board(TodoBoard::reset)
}

fn add_on(board: &mut TodoBoard, name: String, age: String) -> BoardActionResponse {
    match board.submit_add(Draft::new(name, age)) {
        Ok(outcome) => BoardActionResponse::from_outcome(outcome),
        Err(err) => BoardActionResponse::failure(format!("board_add rejected: {err}")),
    }
}

fn edit_on(board: &mut TodoBoard, id: u64, name: String, age: String) -> BoardActionResponse {
    match board.submit_edit(id, Draft::new(name, age)) {
        Ok(outcome) => BoardActionResponse::from_outcome(outcome),
        Err(err) => BoardActionResponse::failure(format!("board_edit rejected: {err}")),
    }
}

fn dispatch_json_on(board: &mut TodoBoard, action_json: &str) -> BoardActionResponse {
    let action = match serde_json::from_str::<Action>(action_json) {
        Ok(action) => action,
        Err(err) => {
            return BoardActionResponse::failure(format!("board_dispatch_json failed: {err}"));
        }
    };

    match action {
        Action::Add { draft } => add_on(board, draft.name, draft.age),
        Action::Edit { id, draft } => edit_on(board, id, draft.name, draft.age),
        other => BoardActionResponse::from_outcome(board.dispatch(&other)),
    }
}

fn with_board<T>(f: impl FnOnce(&mut TodoBoard) -> T) -> T {
    let lock = BOARD.get_or_init(|| Mutex::new(TodoBoard::new()));
    let mut guard = lock.lock().unwrap_or_else(|poisoned| {
        warn!("event=board_lock_poisoned module=ffi status=recovered");
        PoisonError::into_inner(poisoned)
    });
    f(&mut *guard)
}

fn to_board_record(record: &Record) -> BoardRecord {
    BoardRecord {
        id: record.id,
        name: record.name.clone(),
        age: record.age.years(),
        complete: record.complete,
        status: record.status_label().to_string(),
    }
}

fn to_board_panel_item(item: PanelItem) -> BoardPanelItem {
    BoardPanelItem {
        id: item.id,
        primary: item.primary,
        secondary: item.secondary,
    }
}
