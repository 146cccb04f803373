//! View model bindings for Slint UI

mod allocation;
mod rooms;
mod search;

use std::rc::Rc;
use std::sync::Arc;

use hostel_core::{forms, Room};
use slint::{Model, ModelRc, VecModel};

use crate::state::AppState;
use crate::{MainWindow, RoomItem};

pub fn setup_bindings(window: &MainWindow, state: Arc<AppState>) {
    window.set_app_version(crate::APP_VERSION.into());

    rooms::setup_room_bindings(window, state.clone());
    search::setup_search_bindings(window, state.clone());
    allocation::setup_allocation_bindings(window, state.clone());

    refresh_rooms(window, &state);
}

/// Clamp a count into the range of a Slint `int`
pub(crate) fn ui_int<T: TryInto<i32>>(n: T) -> i32 {
    n.try_into().unwrap_or(i32::MAX)
}

pub(crate) fn room_item(room: &Room) -> RoomItem {
    RoomItem {
        id: room.id.to_string().into(),
        number: room.room_number.clone().into(),
        capacity: ui_int(room.capacity),
        ac_label: room.ac_label().into(),
        washroom_label: room.washroom_label().into(),
        status_label: room.status_label().into(),
        allocated: room.is_allocated,
    }
}

pub(crate) fn room_model(rooms: &[Room]) -> ModelRc<RoomItem> {
    let items: Vec<RoomItem> = rooms.iter().map(room_item).collect();
    ModelRc::from(Rc::new(VecModel::from(items)))
}

/// Push the room list and dashboard counts to the window
///
/// Search results are dropped whenever the collection changes.
pub(crate) fn refresh_rooms(window: &MainWindow, state: &AppState) {
    let rooms = state.rooms();
    let stats = state.stats();

    window.set_rooms(room_model(&rooms));
    window.set_total_rooms(ui_int(stats.total));
    window.set_allocated_rooms(ui_int(stats.allocated));
    window.set_available_rooms(ui_int(stats.available));

    window.set_search_results(room_model(&[]));
    update_no_matches(window);
}

/// Recompute the "no matching rooms" notice from the current search fields
pub(crate) fn update_no_matches(window: &MainWindow) {
    let show = forms::show_no_matches(
        window.get_search_results().row_count(),
        &window.get_search_capacity(),
        window.get_search_ac(),
        window.get_search_washroom(),
    );
    window.set_show_no_matches(show);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_int_clamps() {
        assert_eq!(ui_int(7u32), 7);
        assert_eq!(ui_int(u32::MAX), i32::MAX);
        assert_eq!(ui_int(usize::MAX), i32::MAX);
    }

    #[test]
    fn test_room_item_large_capacity_stays_positive() {
        let room = Room::new("hall".to_string(), u32::MAX);
        let item = room_item(&room);
        assert_eq!(item.capacity, i32::MAX);
        assert_eq!(item.number, "hall");
    }
}
