//! Room search
//!
//! Non-mutating filter over the collection by minimum capacity and
//! required amenities. Allocation status is not a criterion: allocated
//! rooms show up in results alongside free ones.

use crate::models::Room;

/// Search filters; an empty criteria value matches every room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub min_capacity: Option<i64>,
    pub require_ac: bool,
    pub require_washroom: bool,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_capacity(mut self, min_capacity: i64) -> Self {
        self.min_capacity = Some(min_capacity);
        self
    }

    pub fn with_ac(mut self) -> Self {
        self.require_ac = true;
        self
    }

    pub fn with_washroom(mut self) -> Self {
        self.require_washroom = true;
        self
    }

    /// Whether the user asked for anything at all
    pub fn has_filters(&self) -> bool {
        self.min_capacity.is_some() || self.require_ac || self.require_washroom
    }

    pub fn matches(&self, room: &Room) -> bool {
        if let Some(min) = self.min_capacity {
            if i64::from(room.capacity) < min {
                return false;
            }
        }
        if self.require_ac && !room.has_ac {
            return false;
        }
        if self.require_washroom && !room.has_attached_washroom {
            return false;
        }
        true
    }
}

/// Rooms matching `criteria`, in collection order
pub fn search<'a>(rooms: &'a [Room], criteria: &SearchCriteria) -> Vec<&'a Room> {
    rooms.iter().filter(|room| criteria.matches(room)).collect()
}
