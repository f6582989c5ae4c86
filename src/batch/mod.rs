//! Batch input and output.
//!
//! Loading a shift batch from a JSON file and rendering reports as indented
//! JSON. These wrap the calculation pipeline; they hold no logic of their own.

mod loader;
mod render;

pub use loader::{load_shift_records, parse_shift_records};
pub use render::render_reports;
