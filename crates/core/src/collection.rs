//! Reconciliation of the local project collection against server
//! responses.
//!
//! The collection is a prefix-insert list: a newly created project is
//! prepended. Invariant: at most one entry per server-assigned id.

use crate::project::Project;
use crate::types::DbId;

/// Prepend a newly created project.
///
/// If an entry with the same id is already present (the server reused
/// an id, which a well-behaved server never does) it is dropped first
/// so the one-entry-per-id invariant holds.
pub fn prepend(projects: &mut Vec<Project>, created: Project) {
    projects.retain(|p| p.id != created.id);
    projects.insert(0, created);
}

/// Replace the entry matching `updated.id` in place, preserving order.
///
/// Returns `false` (collection untouched) when no entry matches.
pub fn replace_by_id(projects: &mut [Project], updated: Project) -> bool {
    match projects.iter_mut().find(|p| p.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the entry with the given id. Returns `false` when absent.
pub fn remove_by_id(projects: &mut Vec<Project>, id: DbId) -> bool {
    let before = projects.len();
    projects.retain(|p| p.id != id);
    projects.len() != before
}
