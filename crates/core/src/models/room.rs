//! Room model - one physical hostel room

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hostel room and its allocation status
///
/// Serialized field names match the stored snapshot layout
/// (`roomNumber`, `hasAC`, `hasAttachedWashroom`, `isAllocated`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    #[serde(rename = "roomNumber")]
    pub room_number: String,
    pub capacity: u32,
    #[serde(rename = "hasAC")]
    pub has_ac: bool,
    #[serde(rename = "hasAttachedWashroom")]
    pub has_attached_washroom: bool,
    /// Older snapshots predate allocation and omit this field
    #[serde(rename = "isAllocated", default)]
    pub is_allocated: bool,
}

impl Room {
    pub fn new(room_number: String, capacity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_number,
            capacity,
            has_ac: false,
            has_attached_washroom: false,
            is_allocated: false,
        }
    }

    pub fn with_ac(mut self, has_ac: bool) -> Self {
        self.has_ac = has_ac;
        self
    }

    pub fn with_attached_washroom(mut self, has_attached_washroom: bool) -> Self {
        self.has_attached_washroom = has_attached_washroom;
        self
    }

    /// Key used for duplicate detection: trimmed and lowercased
    pub fn normalized_number(&self) -> String {
        normalize_room_number(&self.room_number)
    }

    /// True if `room_number` names this room under case-insensitive, trimmed comparison
    pub fn has_number(&self, room_number: &str) -> bool {
        self.normalized_number() == normalize_room_number(room_number)
    }

    pub fn ac_label(&self) -> &'static str {
        if self.has_ac {
            "AC"
        } else {
            "Non-AC"
        }
    }

    pub fn washroom_label(&self) -> &'static str {
        if self.has_attached_washroom {
            "Attached Washroom"
        } else {
            "Common Washroom"
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_allocated {
            "Allocated"
        } else {
            "Available"
        }
    }
}

pub fn normalize_room_number(room_number: &str) -> String {
    room_number.trim().to_lowercase()
}

/// Input for adding a room, before validation
///
/// Capacity stays signed and optional here so that missing or
/// non-positive values reach the store's validation intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub room_number: String,
    pub capacity: Option<i64>,
    pub has_ac: bool,
    pub has_attached_washroom: bool,
}

impl NewRoom {
    pub fn new(room_number: impl Into<String>, capacity: i64) -> Self {
        Self {
            room_number: room_number.into(),
            capacity: Some(capacity),
            has_ac: false,
            has_attached_washroom: false,
        }
    }

    pub fn with_ac(mut self) -> Self {
        self.has_ac = true;
        self
    }

    pub fn with_attached_washroom(mut self) -> Self {
        self.has_attached_washroom = true;
        self
    }
}
