//! Storage repository traits
//!
//! The room store is generic over this interface so it can be backed by
//! SQLite in the app and by memory in tests.

use crate::error::Result;
use crate::models::Room;

/// Durable home of the room collection snapshot
pub trait RoomRepository {
    /// Load the stored collection; `None` when nothing was ever saved
    fn load_rooms(&self) -> Result<Option<Vec<Room>>>;

    /// Replace the stored collection with `rooms`
    fn save_rooms(&self, rooms: &[Room]) -> Result<()>;
}

impl<T: RoomRepository + ?Sized> RoomRepository for &T {
    fn load_rooms(&self) -> Result<Option<Vec<Room>>> {
        (**self).load_rooms()
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        (**self).save_rooms(rooms)
    }
}
