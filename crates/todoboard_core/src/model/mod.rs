//! To-do board domain model.
//!
//! # Responsibility
//! - Define the record shape rendered by the table and the side panel.
//! - Define the closed action vocabulary the view layer dispatches.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` that is never reused.
//! - Draft text is only converted into record fields through `parse_age`.

pub mod action;
pub mod record;
