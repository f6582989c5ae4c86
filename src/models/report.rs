//! Timesheet report models.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftIssue;

/// Worked hours of one employee in one calendar week.
///
/// `invalid_shift_ids` is employee-scoped: every report of an employee
/// carries the same sorted, de-duplicated list, since a rejected shift may
/// touch more than one week.
///
/// # Example
///
/// ```
/// use weekly_timesheet::models::EmployeeWeekReport;
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let report = EmployeeWeekReport {
///     employee_id: 1,
///     start_of_week: DateTime::parse_from_rfc3339("2021-08-29T00:00:00-05:00").unwrap(),
///     regular_hours: Decimal::new(40, 0),
///     overtime_hours: Decimal::new(5, 0),
///     invalid_shift_ids: vec![],
/// };
/// assert_eq!(report.total_hours(), Decimal::new(45, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWeekReport {
    /// The employee this report covers.
    #[serde(rename = "EmployeeID")]
    pub employee_id: i64,
    /// Midnight at the start of the week, in the offset of its earliest shift segment.
    #[serde(rename = "StartOfWeek")]
    pub start_of_week: DateTime<FixedOffset>,
    /// Hours up to the weekly threshold.
    #[serde(rename = "RegularHours", with = "hours_format")]
    pub regular_hours: Decimal,
    /// Hours beyond the weekly threshold.
    #[serde(rename = "OvertimeHours", with = "hours_format")]
    pub overtime_hours: Decimal,
    /// Shifts of this employee excluded from the totals.
    #[serde(rename = "InvalidShifts")]
    pub invalid_shift_ids: Vec<i64>,
}

/// Whole hours are written as JSON integers, anything else as a float.
mod hours_format {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let normalized = value.normalize();
        match normalized.to_i64() {
            Some(whole) if normalized.scale() == 0 => serializer.serialize_i64(whole),
            _ => rust_decimal::serde::float::serialize(value, serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}

impl EmployeeWeekReport {
    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// Everything produced by one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetBatch {
    /// Reports ordered by employee id, then week.
    pub reports: Vec<EmployeeWeekReport>,
    /// One entry per rejected shift, ordered by employee id, then shift id.
    pub issues: Vec<ShiftIssue>,
}

impl TimesheetBatch {
    /// Reports belonging to one employee.
    pub fn reports_for(&self, employee_id: i64) -> impl Iterator<Item = &EmployeeWeekReport> {
        self.reports
            .iter()
            .filter(move |r| r.employee_id == employee_id)
    }
}
