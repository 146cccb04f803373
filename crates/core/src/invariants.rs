//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! The assertions are compiled out in release builds; `check_collection`
//! is always available and also screens snapshots loaded from storage.

use std::collections::HashSet;

use crate::models::{Room, RoomStats};

/// Check that a collection could have been built through the store
pub fn check_collection(rooms: &[Room]) -> Result<(), String> {
    let mut ids = HashSet::with_capacity(rooms.len());
    let mut numbers = HashSet::with_capacity(rooms.len());

    for room in rooms {
        if room.capacity == 0 {
            return Err(format!("room {} has zero capacity", room.id));
        }
        let number = room.normalized_number();
        if number.is_empty() {
            return Err(format!("room {} has an empty room number", room.id));
        }
        if !ids.insert(room.id) {
            return Err(format!("room id {} appears more than once", room.id));
        }
        if !numbers.insert(number) {
            return Err(format!(
                "room number {:?} appears more than once",
                room.room_number
            ));
        }
    }

    Ok(())
}

/// Validate the whole collection
pub fn assert_collection_invariants(rooms: &[Room]) {
    if cfg!(debug_assertions) {
        if let Err(problem) = check_collection(rooms) {
            panic!("Room collection invariant violated: {}", problem);
        }
    }
}

/// Validate that derived counts add up
pub fn assert_stats_invariants(stats: &RoomStats) {
    debug_assert!(
        stats.allocated <= stats.total,
        "{} rooms allocated out of {}",
        stats.allocated,
        stats.total
    );

    debug_assert!(
        stats.available == stats.total - stats.allocated,
        "available {} != total {} - allocated {}",
        stats.available,
        stats.total,
        stats.allocated
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_collection() {
        let rooms = vec![
            Room::new("101".to_string(), 2),
            Room::new("102".to_string(), 1),
        ];
        assert!(check_collection(&rooms).is_ok());
        assert_collection_invariants(&rooms);
    }

    #[test]
    fn test_duplicate_number_detected() {
        let rooms = vec![
            Room::new("B-2".to_string(), 2),
            Room::new("b-2 ".to_string(), 1),
        ];
        assert!(check_collection(&rooms).is_err());
    }

    #[test]
    fn test_duplicate_id_detected() {
        let first = Room::new("1".to_string(), 2);
        let mut second = Room::new("2".to_string(), 2);
        second.id = first.id;

        assert!(check_collection(&[first, second]).is_err());
    }

    #[test]
    fn test_zero_capacity_detected() {
        let rooms = vec![Room::new("1".to_string(), 0)];
        assert!(check_collection(&rooms).is_err());
    }

    #[test]
    fn test_blank_number_detected() {
        let rooms = vec![Room::new("   ".to_string(), 2)];
        assert!(check_collection(&rooms).is_err());
    }

    #[test]
    fn test_stats_invariants_hold() {
        let mut rooms = vec![Room::new("1".to_string(), 2)];
        rooms[0].is_allocated = true;
        assert_stats_invariants(&RoomStats::from_rooms(&rooms));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invariant violated")]
    fn test_assert_panics_on_bad_collection() {
        assert_collection_invariants(&[Room::new("1".to_string(), 0)]);
    }
}
