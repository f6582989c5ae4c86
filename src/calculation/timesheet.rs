//! The timesheet pipeline.
//!
//! Raw records are grouped per employee, ordered, validated, checked for
//! overlaps and finally bucketed into weekly regular/overtime totals. Each
//! employee is processed independently with its own working state.

use std::collections::BTreeSet;
use std::time::Instant;

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::TimesheetConfig;
use crate::models::{EmployeeWeekReport, Shift, ShiftIssue, ShiftRecord, TimesheetBatch};

use super::grouping::group_by_employee;
use super::hours::HoursAggregator;
use super::ordering::sort_chronologically;
use super::overlap::detect_overlaps;
use super::week::start_of_week;

/// Runs the full pipeline over a batch of raw records.
///
/// Never fails: malformed and overlapping shifts are reported as
/// [`ShiftIssue`]s and listed in the employee's invalid shift ids. Every
/// employee present in the input gets at least one report.
///
/// # Example
///
/// ```
/// use weekly_timesheet::calculation::summarize_shifts;
/// use weekly_timesheet::config::TimesheetConfig;
/// use weekly_timesheet::models::ShiftRecord;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     ShiftRecord::new(1, 1, "2021-08-30T09:00:00-05:00", "2021-08-30T17:00:00-05:00"),
///     ShiftRecord::new(2, 2, "2021-08-30T09:00:00-05:00", "2021-08-30T17:00:00-05:00"),
///     ShiftRecord::new(3, 2, "2021-08-30T16:00:00-05:00", "2021-08-30T20:00:00-05:00"),
/// ];
///
/// let batch = summarize_shifts(&records, &TimesheetConfig::default());
/// assert_eq!(batch.reports.len(), 2);
/// assert_eq!(batch.reports[0].regular_hours, Decimal::new(8, 0));
/// assert_eq!(batch.reports[1].regular_hours, Decimal::ZERO);
/// assert_eq!(batch.reports[1].invalid_shift_ids, vec![2, 3]);
/// ```
pub fn summarize_shifts(records: &[ShiftRecord], config: &TimesheetConfig) -> TimesheetBatch {
    let started = Instant::now();
    let mut batch = TimesheetBatch::default();
    let groups = group_by_employee(records);
    let employee_count = groups.len();

    for (employee_id, shifts) in groups {
        let employee = summarize_employee(employee_id, shifts, config);
        batch.reports.extend(employee.reports);
        batch.issues.extend(employee.issues);
    }

    info!(
        records = records.len(),
        employees = employee_count,
        reports = batch.reports.len(),
        rejected_shifts = batch.issues.len(),
        duration_us = started.elapsed().as_micros(),
        "Timesheet batch summarized"
    );

    batch
}

/// Runs the pipeline and keeps only the reports.
pub fn build_timesheets(
    records: &[ShiftRecord],
    config: &TimesheetConfig,
) -> Vec<EmployeeWeekReport> {
    summarize_shifts(records, config).reports
}

/// Working state and result for a single employee.
struct EmployeeTimesheet {
    reports: Vec<EmployeeWeekReport>,
    issues: Vec<ShiftIssue>,
}

fn summarize_employee(
    employee_id: i64,
    mut records: Vec<&ShiftRecord>,
    config: &TimesheetConfig,
) -> EmployeeTimesheet {
    sort_chronologically(&mut records);

    let mut issues = Vec::new();
    let mut shifts: Vec<Shift> = Vec::with_capacity(records.len());
    for record in &records {
        match record.validate() {
            Ok(shift) => shifts.push(shift),
            Err(issue) => issues.push(issue),
        }
    }

    let detection = detect_overlaps(&shifts);
    issues.extend(detection.issues);
    issues.sort_by_key(|issue| issue.shift_id);

    for issue in &issues {
        warn!(
            employee_id,
            shift_id = issue.shift_id,
            reason = %issue.message(),
            "Shift excluded from hour totals"
        );
    }

    let invalid_shift_ids: Vec<i64> = issues
        .iter()
        .map(|issue| issue.shift_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut aggregator = HoursAggregator::new(config.week_starts_on);
    for shift in &detection.valid {
        aggregator.add_shift(shift);
    }

    let mut reports: Vec<EmployeeWeekReport> = aggregator
        .finish(config.weekly_threshold(), config.hours_rounding)
        .into_iter()
        .map(|(start_of_week, hours)| EmployeeWeekReport {
            employee_id,
            start_of_week,
            regular_hours: hours.regular_hours,
            overtime_hours: hours.overtime_hours,
            invalid_shift_ids: invalid_shift_ids.clone(),
        })
        .collect();

    if reports.is_empty() {
        reports.push(EmployeeWeekReport {
            employee_id,
            start_of_week: fallback_week(&records, config),
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            invalid_shift_ids,
        });
    }

    debug!(
        employee_id,
        shifts = records.len(),
        valid_shifts = detection.valid.len(),
        weeks = reports.len(),
        "Employee timesheet built"
    );

    EmployeeTimesheet { reports, issues }
}

/// Week used for an employee whose shifts were all rejected: the week of the
/// earliest timestamp that parses, else the week containing the Unix epoch.
fn fallback_week(records: &[&ShiftRecord], config: &TimesheetConfig) -> DateTime<FixedOffset> {
    let earliest = records
        .iter()
        .flat_map(|record| [record.parsed_start(), record.parsed_end()])
        .flatten()
        .min()
        .unwrap_or_else(|| DateTime::<Utc>::default().fixed_offset());

    start_of_week(earliest, config.week_starts_on)
}
