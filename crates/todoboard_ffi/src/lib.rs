//! Flutter-facing bindings for the to-do board core.

pub mod api;
