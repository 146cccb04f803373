//! SQLite storage layer for Hostel

#[cfg(any(test, feature = "test-util"))]
mod memory;
mod migrations;
mod slots;
pub mod snapshot;
mod traits;

use rusqlite::Connection;
use std::path::Path;
use tracing::instrument;

use crate::error::Result;
use crate::models::Room;

#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryRepository;
pub use slots::SlotStore;
pub use traits::RoomRepository;

/// Slot holding the room collection unless configured otherwise
pub const DEFAULT_ROOMS_SLOT: &str = "rooms";

/// Main database handle
pub struct Database {
    conn: Connection,
    rooms_slot: String,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self {
            conn,
            rooms_slot: DEFAULT_ROOMS_SLOT.to_string(),
        };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn,
            rooms_slot: DEFAULT_ROOMS_SLOT.to_string(),
        };
        db.init()?;
        Ok(db)
    }

    /// Store the room collection under a different slot name
    pub fn with_rooms_slot(mut self, slot: impl Into<String>) -> Self {
        self.rooms_slot = slot.into();
        self
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        migrations::get_current_version(&self.conn).unwrap_or(0)
    }

    /// Get slot store for raw slot access
    pub fn slots(&self) -> SlotStore<'_> {
        SlotStore::new(&self.conn)
    }

    pub fn rooms_slot(&self) -> &str {
        &self.rooms_slot
    }
}

impl RoomRepository for Database {
    fn load_rooms(&self) -> Result<Option<Vec<Room>>> {
        self.slots()
            .get(&self.rooms_slot)?
            .as_deref()
            .map(snapshot::decode)
            .transpose()
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        let text = snapshot::encode(rooms)?;
        self.slots().set(&self.rooms_slot, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_open_in_memory_runs_migrations() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.schema_version(), 1);
    }

    #[test]
    fn test_rooms_slot_absent() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.load_rooms().unwrap().is_none());
    }

    #[test]
    fn test_rooms_save_load() {
        let db = Database::open_in_memory().unwrap();
        let rooms = vec![
            Room::new("101".to_string(), 2).with_ac(true),
            Room::new("102".to_string(), 3),
        ];

        db.save_rooms(&rooms).unwrap();

        let loaded = db.load_rooms().unwrap().unwrap();
        assert_eq!(loaded, rooms);
    }

    #[test]
    fn test_rooms_malformed_slot() {
        let db = Database::open_in_memory().unwrap();
        db.slots().set(DEFAULT_ROOMS_SLOT, "definitely not json").unwrap();

        assert!(matches!(db.load_rooms(), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_custom_slot_is_isolated() {
        let db = Database::open_in_memory().unwrap().with_rooms_slot("annex");
        db.save_rooms(&[Room::new("1".to_string(), 1)]).unwrap();

        assert_eq!(db.rooms_slot(), "annex");
        assert!(db.slots().get(DEFAULT_ROOMS_SLOT).unwrap().is_none());
        assert!(db.slots().get("annex").unwrap().is_some());
    }

    #[test]
    fn test_reopen_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostel.db");

        {
            let db = Database::open(&path).unwrap();
            db.save_rooms(&[Room::new("7".to_string(), 4)]).unwrap();
        }

        let db = Database::open(&path).unwrap();
        let loaded = db.load_rooms().unwrap().unwrap();
        assert_eq!(loaded[0].room_number, "7");
        assert_eq!(db.schema_version(), 1);
    }
}
