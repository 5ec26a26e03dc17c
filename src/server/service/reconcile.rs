//! Set-difference core of the editable-table reconciliation save.
//!
//! Row removal in the UI is expressed by absence: the operator deletes a row
//! from the visible table and saves, and whatever id disappeared between the
//! before and after snapshots gets deleted from the database. That contract
//! is load-bearing for the form/table workflow, so it lives here as a pure
//! function rather than being buried in the save loops.

use std::collections::HashSet;

/// Identifiers present in `before` but absent from `after`, preserving
/// `before` order. These are the rows the operator removed during the
/// editing session.
pub fn removed_ids(before: &[i32], after: &[i32]) -> Vec<i32> {
    let after: HashSet<i32> = after.iter().copied().collect();

    before
        .iter()
        .copied()
        .filter(|id| !after.contains(id))
        .collect()
}
