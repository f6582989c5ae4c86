//! Core data models for the weekly timesheet engine.
//!
//! This module contains the input records, validated shifts, issue records
//! and weekly reports used throughout the engine.

mod issue;
mod report;
mod shift;

pub use issue::{IssueKind, ShiftIssue};
pub use report::{EmployeeWeekReport, TimesheetBatch};
pub use shift::{Shift, ShiftRecord, hours_from_delta};
