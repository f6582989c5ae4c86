//! Calculation logic for the weekly timesheet engine.
//!
//! This module contains the shift-validation and hours-aggregation pipeline:
//! grouping records by employee, chronological ordering, overlap detection,
//! week bucketing with boundary splitting, and the weekly regular/overtime
//! split.

mod grouping;
mod hours;
mod ordering;
mod overlap;
mod timesheet;
mod week;

pub use grouping::group_by_employee;
pub use hours::{HoursAggregator, WeeklyHours, split_weekly_hours};
pub use ordering::sort_chronologically;
pub use overlap::{OverlapDetection, detect_overlaps};
pub use timesheet::{build_timesheets, summarize_shifts};
pub use week::{WeekSegment, segment_by_week, start_of_week};
