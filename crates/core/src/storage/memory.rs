//! In-memory room repository
//!
//! Holds the encoded snapshot text exactly as the database would, so
//! decoding rules apply the same way. Clones share the same slot.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use super::snapshot;
use super::traits::RoomRepository;
use crate::error::{Error, Result};
use crate::models::Room;

#[derive(Debug, Default)]
struct Inner {
    slot: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    inner: Rc<Inner>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw slot contents, valid or not
    pub fn with_raw(text: impl Into<String>) -> Self {
        let repo = Self::new();
        *repo.inner.slot.borrow_mut() = Some(text.into());
        repo
    }

    pub fn raw(&self) -> Option<String> {
        self.inner.slot.borrow().clone()
    }

    /// Make every subsequent save fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.inner.writes.get()
    }
}

impl RoomRepository for MemoryRepository {
    fn load_rooms(&self) -> Result<Option<Vec<Room>>> {
        self.inner
            .slot
            .borrow()
            .as_deref()
            .map(snapshot::decode)
            .transpose()
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        if self.inner.fail_writes.get() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::Other,
                "storage unavailable",
            )));
        }
        let text = snapshot::encode(rooms)?;
        *self.inner.slot.borrow_mut() = Some(text);
        self.inner.writes.set(self.inner.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_repository_loads_none() {
        let repo = MemoryRepository::new();
        assert!(repo.load_rooms().unwrap().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let repo = MemoryRepository::new();
        let other = repo.clone();

        repo.save_rooms(&[Room::new("1".to_string(), 1)]).unwrap();

        let loaded = other.load_rooms().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(other.write_count(), 1);
    }

    #[test]
    fn test_failing_writes_keep_previous_value() {
        let repo = MemoryRepository::with_raw("[]");
        repo.set_fail_writes(true);

        assert!(repo.save_rooms(&[Room::new("1".to_string(), 1)]).is_err());
        assert_eq!(repo.raw(), Some("[]".to_string()));
        assert_eq!(repo.write_count(), 0);
    }
}
