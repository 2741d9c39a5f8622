//! In-memory record store.
//!
//! # Responsibility
//! - Own the ordered record sequence for one session.
//! - Apply actions as pure snapshot-to-snapshot transitions.

pub mod record_store;
