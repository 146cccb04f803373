//! Error types for Hostel Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejected user input. Raised before any state changes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty room number")]
    EmptyRoomNumber,

    #[error("invalid capacity")]
    InvalidCapacity,

    #[error("duplicate room")]
    DuplicateRoom,

    #[error("invalid student count")]
    InvalidStudentCount,
}

impl ValidationError {
    /// Inline message shown next to the form that produced the error
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyRoomNumber => "Room number is required.",
            ValidationError::InvalidCapacity => "Capacity must be greater than 0.",
            ValidationError::DuplicateRoom => "Room number already exists.",
            ValidationError::InvalidStudentCount => "Please enter a valid number of students.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_terse() {
        assert_eq!(ValidationError::EmptyRoomNumber.to_string(), "empty room number");
        assert_eq!(ValidationError::InvalidCapacity.to_string(), "invalid capacity");
        assert_eq!(ValidationError::DuplicateRoom.to_string(), "duplicate room");
    }

    #[test]
    fn test_validation_wraps_into_error() {
        let err: Error = ValidationError::DuplicateRoom.into();
        assert_eq!(err.to_string(), "Validation error: duplicate room");
    }
}
