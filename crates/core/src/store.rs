//! Room store
//!
//! Owns the room collection for a session and mirrors it to a
//! [`RoomRepository`] after every mutation. Writes are best-effort: a
//! failed save is logged and the in-memory collection stays authoritative.

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::allocation::{self, AllocationOutcome, AllocationRequest};
use crate::error::ValidationError;
use crate::invariants::{assert_collection_invariants, assert_stats_invariants};
use crate::models::{NewRoom, Room, RoomStats};
use crate::search::{self, SearchCriteria};
use crate::storage::RoomRepository;

pub struct RoomStore<R: RoomRepository> {
    rooms: Vec<Room>,
    repo: R,
}

impl<R: RoomRepository> RoomStore<R> {
    /// Rehydrate from `repo`
    ///
    /// Missing, unreadable, or malformed snapshots start an empty
    /// collection rather than failing.
    #[instrument(skip(repo))]
    pub fn open(repo: R) -> Self {
        let rooms = match repo.load_rooms() {
            Ok(Some(rooms)) => {
                info!(count = rooms.len(), "Loaded rooms from storage");
                rooms
            }
            Ok(None) => {
                info!("No stored rooms, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable room snapshot");
                Vec::new()
            }
        };

        Self { rooms, repo }
    }

    /// Rooms in display order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: Uuid) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn stats(&self) -> RoomStats {
        let stats = RoomStats::from_rooms(&self.rooms);
        assert_stats_invariants(&stats);
        stats
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validate and append a new room
    pub fn add_room(&mut self, new_room: NewRoom) -> Result<Room, ValidationError> {
        if new_room.room_number.trim().is_empty() {
            return Err(ValidationError::EmptyRoomNumber);
        }

        let capacity = new_room
            .capacity
            .and_then(|c| u32::try_from(c).ok())
            .filter(|c| *c > 0)
            .ok_or(ValidationError::InvalidCapacity)?;

        if self.rooms.iter().any(|r| r.has_number(&new_room.room_number)) {
            return Err(ValidationError::DuplicateRoom);
        }

        let room = Room::new(new_room.room_number, capacity)
            .with_ac(new_room.has_ac)
            .with_attached_washroom(new_room.has_attached_washroom);

        debug!(room_id = %room.id, room_number = %room.room_number, capacity, "Adding room");
        self.rooms.push(room.clone());
        self.persist();

        Ok(room)
    }

    /// Remove a room by id; absent ids are a no-op
    pub fn delete_room(&mut self, id: Uuid) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != id);
        let removed = self.rooms.len() != before;

        debug!(room_id = %id, removed, "Deleting room");
        self.persist();
        removed
    }

    /// Remove every room
    pub fn clear_all(&mut self) {
        debug!(count = self.rooms.len(), "Clearing all rooms");
        self.rooms.clear();
        self.persist();
    }

    /// Rooms matching `criteria`, allocated or not
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Room> {
        search::search(&self.rooms, criteria)
    }

    /// Allocate the best-fit room, persisting only when one was found
    pub fn allocate(&mut self, request: &AllocationRequest) -> AllocationOutcome {
        let outcome = allocation::allocate(&mut self.rooms, request);

        match &outcome {
            AllocationOutcome::Allocated(room) => {
                debug!(
                    room_id = %room.id,
                    students = request.students,
                    "Allocated room"
                );
                self.persist();
            }
            AllocationOutcome::NoRoomAvailable => {
                debug!(students = request.students, "No room available");
            }
        }

        outcome
    }

    fn persist(&self) {
        assert_collection_invariants(&self.rooms);

        if let Err(e) = self.repo.save_rooms(&self.rooms) {
            warn!(error = %e, "Failed to persist rooms");
        }
    }
}
