//! Named storage slots
//!
//! A slot holds one serialized document under a name and is always
//! overwritten wholesale.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::instrument;

use crate::error::Result;

/// Slot store
pub struct SlotStore<'a> {
    conn: &'a Connection,
}

impl<'a> SlotStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Read a slot's value
    #[instrument(skip(self))]
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_slots WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write a slot, replacing any previous value
    #[instrument(skip(self, value), fields(len = value.len()))]
    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO storage_slots (name, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![name, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_slot_set_get() {
        let db = Database::open_in_memory().unwrap();
        let slots = db.slots();

        slots.set("rooms", "[]").unwrap();
        assert_eq!(slots.get("rooms").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_slot_overwrite() {
        let db = Database::open_in_memory().unwrap();
        let slots = db.slots();

        slots.set("rooms", "[1]").unwrap();
        slots.set("rooms", "[2]").unwrap();

        assert_eq!(slots.get("rooms").unwrap(), Some("[2]".to_string()));
    }

    #[test]
    fn test_slot_missing() {
        let db = Database::open_in_memory().unwrap();
        let slots = db.slots();

        assert!(slots.get("nothing").unwrap().is_none());
    }
}
