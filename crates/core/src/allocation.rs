//! Best-fit room allocation
//!
//! A request is served by the unallocated room that meets every stated
//! requirement with the smallest capacity. Equal capacities resolve to the
//! room that appears first in the collection.
//!
//! Per-room allocation state:
//!
//! ```text
//! Unallocated --allocate--> Allocated --delete/clear--> (removed)
//! ```
//!
//! There is no path back from Allocated to Unallocated.

use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::Room;

/// A group of students looking for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRequest {
    pub students: u32,
    pub needs_ac: bool,
    pub needs_washroom: bool,
}

impl AllocationRequest {
    /// Build a request, rejecting non-positive student counts
    ///
    /// Counts beyond any possible room capacity saturate at `u32::MAX`, so
    /// they still reach the allocator and find no room.
    pub fn new(
        students: i64,
        needs_ac: bool,
        needs_washroom: bool,
    ) -> Result<Self, ValidationError> {
        if students <= 0 {
            return Err(ValidationError::InvalidStudentCount);
        }
        let students = u32::try_from(students).unwrap_or(u32::MAX);

        Ok(Self {
            students,
            needs_ac,
            needs_washroom,
        })
    }

    /// Whether `room` could take this group
    pub fn is_satisfied_by(&self, room: &Room) -> bool {
        !room.is_allocated
            && room.capacity >= self.students
            && (!self.needs_ac || room.has_ac)
            && (!self.needs_washroom || room.has_attached_washroom)
    }
}

/// Result of an allocation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The room as it stands after allocation
    Allocated(Room),
    NoRoomAvailable,
}

impl AllocationOutcome {
    pub const NO_ROOM_REASON: &'static str = "no room available";

    pub fn is_success(&self) -> bool {
        matches!(self, AllocationOutcome::Allocated(_))
    }

    pub fn room(&self) -> Option<&Room> {
        match self {
            AllocationOutcome::Allocated(room) => Some(room),
            AllocationOutcome::NoRoomAvailable => None,
        }
    }

    /// Failure reason, `None` on success
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            AllocationOutcome::Allocated(_) => None,
            AllocationOutcome::NoRoomAvailable => Some(Self::NO_ROOM_REASON),
        }
    }
}

/// The best-fit room for `request`, without changing anything
pub fn best_fit<'a>(rooms: &'a [Room], request: &AllocationRequest) -> Option<&'a Room> {
    let mut candidates: Vec<&Room> = rooms
        .iter()
        .filter(|room| request.is_satisfied_by(room))
        .collect();

    // Stable: ties keep collection order
    candidates.sort_by_key(|room| room.capacity);
    candidates.into_iter().next()
}

/// Select the best-fit room and mark it allocated in place
pub fn allocate(rooms: &mut [Room], request: &AllocationRequest) -> AllocationOutcome {
    let selected: Uuid = match best_fit(rooms, request) {
        Some(room) => room.id,
        None => return AllocationOutcome::NoRoomAvailable,
    };

    match rooms.iter_mut().find(|room| room.id == selected) {
        Some(room) => {
            room.is_allocated = true;
            AllocationOutcome::Allocated(room.clone())
        }
        None => AllocationOutcome::NoRoomAvailable,
    }
}
