//! Configuration loading and management for the weekly timesheet engine.
//!
//! Settings cover the weekly overtime threshold, the weekday that opens each
//! week bucket and how week totals are rounded.
//!
//! # Example
//!
//! ```no_run
//! use weekly_timesheet::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timesheet.yaml").unwrap();
//! println!("Weeks start on {}", config.config().week_starts_on);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_WEEKLY_OVERTIME_THRESHOLD, HoursRounding, TimesheetConfig};
