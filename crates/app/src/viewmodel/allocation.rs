//! Allocation view model

use std::sync::Arc;

use hostel_core::forms;
use hostel_core::AllocationOutcome;
use slint::{ComponentHandle, SharedString};

use crate::state::{allocation_message, AppState};
use crate::{AllocationView, MainWindow};

use super::{refresh_rooms, ui_int};

fn allocation_view(outcome: &AllocationOutcome) -> AllocationView {
    let message: SharedString = allocation_message(outcome).into();
    match outcome {
        AllocationOutcome::Allocated(room) => AllocationView {
            visible: true,
            success: true,
            message,
            room_number: room.room_number.clone().into(),
            capacity: ui_int(room.capacity),
            ac_label: (if room.has_ac { "AC Available" } else { "Non-AC" }).into(),
            washroom_label: room.washroom_label().into(),
        },
        AllocationOutcome::NoRoomAvailable => AllocationView {
            visible: true,
            success: false,
            message,
            ..Default::default()
        },
    }
}

pub fn setup_allocation_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Keep the Allocate button in step with the student count
    let window_weak = window.as_weak();
    window.on_students_edited(move |text| {
        if let Some(w) = window_weak.upgrade() {
            w.set_allocate_enabled(forms::allocation_input_enabled(&text));
        }
    });

    let window_weak = window.as_weak();
    window.on_allocate(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        w.set_allocation_error("".into());
        w.set_allocation(AllocationView::default());

        match state.allocate(&w.get_students_text(), w.get_needs_ac(), w.get_needs_washroom()) {
            Ok(outcome) => {
                if let AllocationOutcome::Allocated(room) = &outcome {
                    tracing::info!(room_id = %room.id, "Room allocated");
                    refresh_rooms(&w, &state);
                }
                w.set_allocation(allocation_view(&outcome));
            }
            Err(e) => {
                w.set_allocation_error(e.user_message().into());
            }
        }
    });
}
