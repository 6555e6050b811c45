//! What to show when a listing comes back empty.

use serde::Serialize;

use super::EntityFilters;

/// Title and body of an empty-state panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

impl EmptyState {
    /// Nothing has been created yet.
    pub const NO_DATA: EmptyState = EmptyState {
        title: "No records yet",
        message: "Nothing has been added here so far. Create the first record to get started.",
    };

    /// Records exist, but none pass the current filters.
    pub const FILTERED: EmptyState = EmptyState {
        title: "No matching records",
        message: "No records match the current filters. Try adjusting or clearing them.",
    };
}

/// `None` when there is something to show, otherwise the message that fits
/// the filter state.
pub fn get_empty_state_message(filters: &EntityFilters, count: usize) -> Option<EmptyState> {
    if count > 0 {
        return None;
    }
    Some(if filters.is_active() {
        EmptyState::FILTERED
    } else {
        EmptyState::NO_DATA
    })
}
