//! Hostel Core Library
//!
//! Room models, the room store, search and best-fit allocation, and
//! storage for the hostel room allocation app.

pub mod allocation;
pub mod config;
pub mod error;
pub mod forms;
pub mod invariants;
pub mod models;
pub mod search;
pub mod storage;
pub mod store;

pub use allocation::{AllocationOutcome, AllocationRequest};
pub use config::{AppConfig, StorageConfig};
pub use error::{Error, Result, ValidationError};
pub use forms::PendingAction;
pub use models::*;
pub use search::SearchCriteria;
pub use storage::{Database, RoomRepository, SlotStore};

#[cfg(any(test, feature = "test-util"))]
pub use storage::MemoryRepository;
pub use store::RoomStore;
