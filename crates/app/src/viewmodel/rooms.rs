//! Room list view model: add, delete, clear

use std::sync::Arc;

use hostel_core::forms::messages;
use slint::ComponentHandle;
use uuid::Uuid;

use crate::state::AppState;
use crate::{AllocationView, MainWindow};

use super::refresh_rooms;

pub fn setup_room_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Add room
    let state_add = state.clone();
    let window_weak = window.as_weak();
    window.on_add_room(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        w.set_room_error("".into());
        w.set_message("".into());

        let result = state_add.add_room(
            &w.get_room_number(),
            &w.get_capacity_text(),
            w.get_has_ac(),
            w.get_has_washroom(),
        );

        match result {
            Ok(room) => {
                tracing::info!(room_id = %room.id, "Room added");
                w.set_allocation(AllocationView::default());
                w.set_message(messages::ROOM_ADDED.into());

                // Clear form
                w.set_room_number("".into());
                w.set_capacity_text("".into());
                w.set_has_ac(false);
                w.set_has_washroom(false);

                refresh_rooms(&w, &state_add);
            }
            Err(e) => {
                w.set_room_error(e.user_message().into());
            }
        }
    });

    // Delete room (asks first)
    let state_delete = state.clone();
    let window_weak = window.as_weak();
    window.on_delete_room(move |id_str| {
        let id = match Uuid::parse_str(&id_str) {
            Ok(id) => id,
            Err(_) => return,
        };

        let prompt = state_delete.request_delete(id);
        if let Some(w) = window_weak.upgrade() {
            w.set_confirm_text(prompt.into());
            w.set_confirm_visible(true);
        }
    });

    // Clear all rooms (asks first)
    let state_clear = state.clone();
    let window_weak = window.as_weak();
    window.on_clear_all(move || {
        let prompt = state_clear.request_clear();
        if let Some(w) = window_weak.upgrade() {
            w.set_confirm_text(prompt.into());
            w.set_confirm_visible(true);
        }
    });

    // Confirmation accepted
    let state_confirm = state.clone();
    let window_weak = window.as_weak();
    window.on_confirm_accepted(move || {
        let done = state_confirm.confirm();

        if let Some(w) = window_weak.upgrade() {
            w.set_confirm_visible(false);
            if let Some(message) = done {
                w.set_allocation(AllocationView::default());
                w.set_message(message.into());
                refresh_rooms(&w, &state_confirm);
            }
        }
    });

    // Confirmation declined
    let state_decline = state.clone();
    let window_weak = window.as_weak();
    window.on_confirm_declined(move || {
        state_decline.decline();
        if let Some(w) = window_weak.upgrade() {
            w.set_confirm_visible(false);
        }
    });
}
