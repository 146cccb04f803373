//! Search view model

use std::sync::Arc;

use slint::ComponentHandle;

use crate::state::AppState;
use crate::{AllocationView, MainWindow};

use super::{room_model, update_no_matches};

pub fn setup_search_bindings(window: &MainWindow, state: Arc<AppState>) {
    let window_weak = window.as_weak();
    window.on_search(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        let view = state.search(
            &w.get_search_capacity(),
            w.get_search_ac(),
            w.get_search_washroom(),
        );

        w.set_allocation(AllocationView::default());
        w.set_search_results(room_model(&view.results));
        w.set_show_no_matches(view.no_matches);
    });

    // The notice follows the fields as they are edited
    let window_weak = window.as_weak();
    window.on_search_edited(move || {
        if let Some(w) = window_weak.upgrade() {
            update_no_matches(&w);
        }
    });
}
