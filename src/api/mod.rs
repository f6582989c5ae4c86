//! HTTP API module for the weekly timesheet engine.
//!
//! This module exposes the timesheet pipeline over HTTP: `POST /timesheets`
//! takes a JSON array of shift records and returns the weekly reports.

mod handlers;
mod response;
mod state;

pub use handlers::{TimesheetQuery, create_router};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
