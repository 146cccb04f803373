//! Smart Hostel Room Allocation
//!
//! Desktop app for tracking hostel rooms, searching them by amenities and
//! allocating the best-fit room to a group of students.

use std::sync::Arc;

use slint::ComponentHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod viewmodel;

slint::include_modules!();

pub const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(version = APP_VERSION, "Starting Smart Hostel Room Allocation");

    // Initialize application state
    let app_state = match state::AppState::new() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(data_dir = %app_state.data_dir().display(), "Using data directory");

    // Create main window
    let main_window = match MainWindow::new() {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("Failed to create main window: {}", e);
            std::process::exit(1);
        }
    };

    // Set up view model bindings
    viewmodel::setup_bindings(&main_window, app_state);

    // Run the application
    if let Err(e) = main_window.run() {
        tracing::error!("Event loop failed: {}", e);
        std::process::exit(1);
    }
}
