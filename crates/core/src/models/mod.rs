//! Data models for Hostel

mod room;
mod stats;

pub use room::*;
pub use stats::*;
