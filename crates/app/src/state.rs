//! Application state management

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use hostel_core::config::{self, AppConfig, CONFIG_FILE_NAME};
use hostel_core::forms::{self, messages};
use hostel_core::{
    AllocationOutcome, Database, PendingAction, Result, Room, RoomStats, RoomStore,
    ValidationError,
};
use tracing::info;
use uuid::Uuid;

/// Main application state
pub struct AppState {
    pub store: Arc<Mutex<RoomStore<Database>>>,
    /// Destructive action awaiting confirmation
    pub pending: Arc<Mutex<Option<PendingAction>>>,
    data_dir: PathBuf,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let dirs = config::project_dirs()?;
        let config_path = dirs.config_dir().join(CONFIG_FILE_NAME);
        let config = AppConfig::load_or_default(&config_path)?;

        let db_path = config.storage.database_path(dirs.data_dir());

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!(path = %db_path.display(), slot = %config.storage.slot, "Opening room storage");
        let db = Database::open(&db_path)?.with_rooms_slot(config.storage.slot.clone());
        let data_dir = db_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dirs.data_dir().to_path_buf());

        Ok(Self::with_database(db, data_dir))
    }

    pub fn with_database(db: Database, data_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(Mutex::new(RoomStore::open(db))),
            pending: Arc::new(Mutex::new(None)),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.store.lock().unwrap().rooms().to_vec()
    }

    pub fn stats(&self) -> RoomStats {
        self.store.lock().unwrap().stats()
    }

    pub fn add_room(
        &self,
        room_number: &str,
        capacity: &str,
        has_ac: bool,
        has_attached_washroom: bool,
    ) -> std::result::Result<Room, ValidationError> {
        let new_room = forms::parse_new_room(room_number, capacity, has_ac, has_attached_washroom);
        self.store.lock().unwrap().add_room(new_room)
    }

    pub fn search(&self, min_capacity: &str, require_ac: bool, require_washroom: bool) -> SearchView {
        let criteria = forms::parse_search(min_capacity, require_ac, require_washroom);
        let store = self.store.lock().unwrap();
        let results: Vec<Room> = store.search(&criteria).into_iter().cloned().collect();

        SearchView {
            no_matches: forms::show_no_matches(
                results.len(),
                min_capacity,
                require_ac,
                require_washroom,
            ),
            results,
        }
    }

    pub fn allocate(
        &self,
        students: &str,
        needs_ac: bool,
        needs_washroom: bool,
    ) -> std::result::Result<AllocationOutcome, ValidationError> {
        let request = forms::parse_allocation(students, needs_ac, needs_washroom)?;
        Ok(self.store.lock().unwrap().allocate(&request))
    }

    /// Stage a destructive action and return the confirmation prompt
    pub fn request(&self, action: PendingAction) -> &'static str {
        *self.pending.lock().unwrap() = Some(action);
        action.prompt()
    }

    /// Carry out the staged action, returning its completion message
    pub fn confirm(&self) -> Option<&'static str> {
        let action = self.pending.lock().unwrap().take()?;
        let mut store = self.store.lock().unwrap();
        match action {
            PendingAction::DeleteRoom(id) => {
                store.delete_room(id);
            }
            PendingAction::ClearAll => store.clear_all(),
        }
        Some(action.done_message())
    }

    /// Drop the staged action without touching the rooms
    pub fn decline(&self) {
        self.pending.lock().unwrap().take();
    }

    pub fn request_delete(&self, id: Uuid) -> &'static str {
        self.request(PendingAction::DeleteRoom(id))
    }

    pub fn request_clear(&self) -> &'static str {
        self.request(PendingAction::ClearAll)
    }
}

/// Search results plus whether to show the empty-result notice
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    pub results: Vec<Room>,
    pub no_matches: bool,
}

/// Text for the allocation result panel
pub fn allocation_message(outcome: &AllocationOutcome) -> &'static str {
    match outcome {
        AllocationOutcome::Allocated(_) => messages::ALLOCATED,
        AllocationOutcome::NoRoomAvailable => messages::NO_ROOM_AVAILABLE,
    }
}
