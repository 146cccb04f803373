//! Derived room counts for the dashboard

use super::Room;

/// Total / allocated / available counts, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomStats {
    pub total: usize,
    pub allocated: usize,
    pub available: usize,
}

impl RoomStats {
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let total = rooms.len();
        let allocated = rooms.iter().filter(|r| r.is_allocated).count();
        Self {
            total,
            allocated,
            available: total - allocated,
        }
    }
}
