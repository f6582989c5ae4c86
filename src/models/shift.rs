//! Shift models.
//!
//! [`ShiftRecord`] is the raw record exactly as supplied by the caller, with
//! timestamps still in text form. [`Shift`] is a record whose timestamps have
//! been parsed and whose interval is known to be well formed.

use chrono::{DateTime, FixedOffset, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::issue::{IssueKind, ShiftIssue};

/// A raw shift record as it arrives in a batch.
///
/// Field names follow the batch wire format (`ShiftID`, `EmployeeID`,
/// `StartTime`, `EndTime`).
///
/// # Example
///
/// ```
/// use weekly_timesheet::models::ShiftRecord;
///
/// let json = r#"{
///     "ShiftID": 1,
///     "EmployeeID": 7,
///     "StartTime": "2021-08-30T09:00:00-05:00",
///     "EndTime": "2021-08-30T17:00:00-05:00"
/// }"#;
/// let record: ShiftRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.employee_id, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    #[serde(rename = "ShiftID")]
    pub shift_id: i64,
    /// The employee who worked the shift.
    #[serde(rename = "EmployeeID")]
    pub employee_id: i64,
    /// Start of the shift, RFC 3339 with offset.
    #[serde(rename = "StartTime")]
    pub start_time: String,
    /// End of the shift, RFC 3339 with offset.
    #[serde(rename = "EndTime")]
    pub end_time: String,
}

impl ShiftRecord {
    /// Creates a record from its parts.
    pub fn new(
        shift_id: i64,
        employee_id: i64,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            shift_id,
            employee_id,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// The parsed start timestamp, or `None` when it is not valid RFC 3339.
    pub fn parsed_start(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.start_time).ok()
    }

    /// The parsed end timestamp, or `None` when it is not valid RFC 3339.
    pub fn parsed_end(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.end_time).ok()
    }

    /// Parses both timestamps and checks the interval.
    ///
    /// Zero-length shifts are accepted. A shift that ends before it starts
    /// is rejected, as is any timestamp that is not RFC 3339.
    ///
    /// # Example
    ///
    /// ```
    /// use weekly_timesheet::models::{IssueKind, ShiftRecord};
    ///
    /// let backwards = ShiftRecord::new(
    ///     3,
    ///     1,
    ///     "2021-08-30T17:00:00Z",
    ///     "2021-08-30T09:00:00Z",
    /// );
    /// let issue = backwards.validate().unwrap_err();
    /// assert_eq!(issue.kind, IssueKind::EndBeforeStart);
    /// ```
    pub fn validate(&self) -> Result<Shift, ShiftIssue> {
        let start = self.parsed_start().ok_or_else(|| {
            self.issue(IssueKind::MalformedStart {
                value: self.start_time.clone(),
            })
        })?;
        let end = self.parsed_end().ok_or_else(|| {
            self.issue(IssueKind::MalformedEnd {
                value: self.end_time.clone(),
            })
        })?;

        if end < start {
            return Err(self.issue(IssueKind::EndBeforeStart));
        }

        Ok(Shift {
            shift_id: self.shift_id,
            employee_id: self.employee_id,
            start,
            end,
        })
    }

    fn issue(&self, kind: IssueKind) -> ShiftIssue {
        ShiftIssue {
            shift_id: self.shift_id,
            employee_id: self.employee_id,
            kind,
        }
    }
}

/// A shift with parsed, ordered timestamps.
///
/// Comparisons between shifts use absolute instants, so shifts recorded in
/// different offsets still compare correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub shift_id: i64,
    /// The employee who worked the shift.
    pub employee_id: i64,
    /// The start of the shift.
    pub start: DateTime<FixedOffset>,
    /// The end of the shift (never before `start`).
    pub end: DateTime<FixedOffset>,
}

impl Shift {
    /// Elapsed time between start and end.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Elapsed time in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekly_timesheet::models::ShiftRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftRecord::new(1, 1, "2021-08-30T22:00:00Z", "2021-08-31T06:30:00Z")
    ///     .validate()
    ///     .unwrap();
    /// assert_eq!(shift.worked_hours(), Decimal::new(85, 1)); // 8.5 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        hours_from_delta(self.duration())
    }

    /// Whether two half-open intervals `[start, end)` intersect.
    ///
    /// A zero-length shift never overlaps a shift that starts or ends at the
    /// same instant, but does overlap a shift that strictly contains it.
    pub fn overlaps(&self, other: &Shift) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Converts an elapsed time to hours at second precision.
pub fn hours_from_delta(delta: TimeDelta) -> Decimal {
    Decimal::new(delta.num_seconds(), 0) / Decimal::new(3600, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(shift_id: i64, start: &str, end: &str) -> ShiftRecord {
        ShiftRecord::new(shift_id, 1, start, end)
    }

    fn shift(shift_id: i64, start: &str, end: &str) -> Shift {
        record(shift_id, start, end).validate().unwrap()
    }

    /// SH-001: 8 hour shift
    #[test]
    fn test_8_hour_shift() {
        let shift = shift(1, "2021-08-30T09:00:00-05:00", "2021-08-30T17:00:00-05:00");
        assert_eq!(shift.worked_hours(), Decimal::new(80, 1));
    }

    /// SH-002: nanosecond timestamps parse
    #[test]
    fn test_nanosecond_timestamps_parse() {
        let shift = shift(
            2,
            "2021-08-22T12:30:00.000000000-05:00",
            "2021-08-22T21:00:00.000000000-05:00",
        );
        assert_eq!(shift.worked_hours(), Decimal::new(85, 1));
    }

    /// SH-003: zero duration shift is valid
    #[test]
    fn test_zero_duration_shift_is_valid() {
        let shift = shift(3, "2021-08-30T09:00:00Z", "2021-08-30T09:00:00Z");
        assert_eq!(shift.worked_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_malformed_start_is_rejected() {
        let issue = record(4, "yesterday", "2021-08-30T09:00:00Z")
            .validate()
            .unwrap_err();
        assert_eq!(
            issue.kind,
            IssueKind::MalformedStart {
                value: "yesterday".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_end_is_rejected() {
        let issue = record(5, "2021-08-30T09:00:00Z", "2021-08-30 17:00")
            .validate()
            .unwrap_err();
        assert!(matches!(issue.kind, IssueKind::MalformedEnd { .. }));
        assert_eq!(issue.shift_id, 5);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let issue = record(6, "2021-08-30T17:00:00Z", "2021-08-30T09:00:00Z")
            .validate()
            .unwrap_err();
        assert_eq!(issue.kind, IssueKind::EndBeforeStart);
    }

    #[test]
    fn test_mixed_offsets_compare_as_instants() {
        // 14:00Z and 09:00-05:00 are the same instant
        let a = shift(7, "2021-08-30T06:00:00Z", "2021-08-30T14:00:00Z");
        let b = shift(8, "2021-08-30T09:00:00-05:00", "2021-08-30T12:00:00-05:00");
        assert!(!a.overlaps(&b));
        assert_eq!(a.end, b.start);
    }

    #[test]
    fn test_overlap_cases() {
        let day = shift(1, "2021-08-30T09:00:00Z", "2021-08-30T17:00:00Z");
        let late = shift(2, "2021-08-30T16:00:00Z", "2021-08-30T20:00:00Z");
        let after = shift(3, "2021-08-30T17:00:00Z", "2021-08-30T20:00:00Z");
        let same = shift(4, "2021-08-30T09:00:00Z", "2021-08-30T17:00:00Z");
        let point_inside = shift(5, "2021-08-30T12:00:00Z", "2021-08-30T12:00:00Z");
        let point_at_start = shift(6, "2021-08-30T09:00:00Z", "2021-08-30T09:00:00Z");

        assert!(day.overlaps(&late));
        assert!(late.overlaps(&day));
        assert!(!day.overlaps(&after));
        assert!(day.overlaps(&same));
        assert!(day.overlaps(&point_inside));
        assert!(point_inside.overlaps(&day));
        assert!(!day.overlaps(&point_at_start));
        assert!(!point_at_start.overlaps(&point_at_start));
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"[
            {
                "ShiftID": 2663141019,
                "EmployeeID": 41488322,
                "StartTime": "2021-08-30T12:30:00.000000-05:00",
                "EndTime": "2021-08-30T21:00:00.000000-05:00"
            }
        ]"#;

        let records: Vec<ShiftRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].shift_id, 2663141019);
        assert_eq!(records[0].employee_id, 41488322);
        assert!(records[0].parsed_start().is_some());
    }
}
