//! Room collection snapshots
//!
//! The whole collection is stored as one JSON array of room objects.

use crate::error::{Error, Result};
use crate::invariants::check_collection;
use crate::models::Room;

/// Serialize the full collection
pub fn encode(rooms: &[Room]) -> Result<String> {
    Ok(serde_json::to_string(rooms)?)
}

/// Parse a stored snapshot
///
/// Fails on malformed JSON and on collections that break the room
/// invariants (blank or duplicate numbers, zero capacity, repeated ids).
pub fn decode(text: &str) -> Result<Vec<Room>> {
    let rooms: Vec<Room> = serde_json::from_str(text)?;
    check_collection(&rooms).map_err(Error::InvalidSnapshot)?;
    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_preserves_order_and_flags() {
        let mut rooms = vec![
            Room::new("101".to_string(), 2).with_ac(true),
            Room::new("102".to_string(), 4).with_attached_washroom(true),
        ];
        rooms[1].is_allocated = true;

        let decoded = decode(&encode(&rooms).unwrap()).unwrap();
        assert_eq!(decoded, rooms);
    }

    #[test]
    fn test_decode_malformed_json() {
        assert!(matches!(decode("{not json"), Err(Error::Serialization(_))));
        assert!(matches!(decode(r#"{"rooms": []}"#), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_decode_rejects_negative_capacity() {
        let text = r#"[{"id":"6f1c1a52-6a57-4b38-9d1e-3c7a4f5f3e10","roomNumber":"1","capacity":-2,"hasAC":false,"hasAttachedWashroom":false}]"#;
        assert!(decode(text).is_err());
    }

    #[test]
    fn test_decode_rejects_duplicate_numbers() {
        let rooms = vec![
            Room::new("A1".to_string(), 2),
            Room::new(" a1".to_string(), 3),
        ];
        let text = serde_json::to_string(&rooms).unwrap();

        assert!(matches!(decode(&text), Err(Error::InvalidSnapshot(_))));
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }
}
