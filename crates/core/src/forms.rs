//! Form input handling
//!
//! Turns the raw text of the add, search, and allocate forms into
//! validated requests, and holds the text the UI shows around them.
//! Destructive actions go through [`PendingAction`] so the UI can ask
//! for confirmation before calling into the store.

use uuid::Uuid;

use crate::allocation::AllocationRequest;
use crate::error::ValidationError;
use crate::models::NewRoom;
use crate::search::SearchCriteria;

pub mod messages {
    pub const ROOM_ADDED: &str = "Room added successfully";
    pub const ROOM_DELETED: &str = "Room deleted successfully";
    pub const ROOMS_CLEARED: &str = "All rooms cleared successfully";
    pub const NO_ROOM_AVAILABLE: &str = "No room available";
    pub const ALLOCATED: &str = "Room Allocated Successfully";
}

/// Parse a whole number from a form field; blank or non-numeric gives `None`
fn parse_number(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Read the add-room form
///
/// Only parsing happens here; the store does the validation so that
/// direct callers get the same checks.
pub fn parse_new_room(
    room_number: &str,
    capacity: &str,
    has_ac: bool,
    has_attached_washroom: bool,
) -> NewRoom {
    NewRoom {
        room_number: room_number.to_string(),
        capacity: parse_number(capacity),
        has_ac,
        has_attached_washroom,
    }
}

/// Read the search form
pub fn parse_search(min_capacity: &str, require_ac: bool, require_washroom: bool) -> SearchCriteria {
    SearchCriteria {
        min_capacity: parse_number(min_capacity),
        require_ac,
        require_washroom,
    }
}

/// Whether to show the "no matching rooms" notice
///
/// Follows the search fields as they are, so the notice also appears when a
/// collection change has cleared the results while a filter is still filled in.
pub fn show_no_matches(
    result_count: usize,
    min_capacity: &str,
    require_ac: bool,
    require_washroom: bool,
) -> bool {
    result_count == 0 && (!min_capacity.is_empty() || require_ac || require_washroom)
}

/// Read the allocation form, rejecting missing or non-positive counts
pub fn parse_allocation(
    students: &str,
    needs_ac: bool,
    needs_washroom: bool,
) -> Result<AllocationRequest, ValidationError> {
    let students = parse_number(students).ok_or(ValidationError::InvalidStudentCount)?;
    AllocationRequest::new(students, needs_ac, needs_washroom)
}

/// Whether the Allocate button should be enabled for this input
pub fn allocation_input_enabled(students: &str) -> bool {
    matches!(parse_number(students), Some(n) if n > 0)
}

/// A destructive action waiting for the user to confirm it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteRoom(Uuid),
    ClearAll,
}

impl PendingAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingAction::DeleteRoom(_) => "Are you sure you want to delete this room?",
            PendingAction::ClearAll => "Are you sure you want to delete ALL rooms?",
        }
    }

    /// Message shown once the action has been carried out
    pub fn done_message(&self) -> &'static str {
        match self {
            PendingAction::DeleteRoom(_) => messages::ROOM_DELETED,
            PendingAction::ClearAll => messages::ROOMS_CLEARED,
        }
    }
}
