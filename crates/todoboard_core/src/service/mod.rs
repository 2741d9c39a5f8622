//! Boundary services over the record store.
//!
//! # Responsibility
//! - Keep draft validation and dialog/panel state out of the store.
//! - Give UI/FFI layers one session object to drive.

pub mod board_service;
pub mod form_service;
pub mod projection;
