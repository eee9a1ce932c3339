//! `vitrine-core` -- domain types and view-model logic for the portfolio
//! client.
//!
//! Everything in this crate is pure: entity types and wire DTOs, draft
//! validation, project-collection reconciliation, and the view-model
//! state with its transitions. Network I/O lives in `vitrine-client`.

pub mod collection;
pub mod error;
pub mod project;
pub mod site;
pub mod state;
pub mod types;
