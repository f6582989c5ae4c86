//! Week bucketing and week-boundary segmentation.
//!
//! This module maps timestamps to the start of their calendar week and
//! splits shifts that cross a week boundary so that each week is credited
//! only with the time actually worked inside it.

use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::models::{Shift, hours_from_delta};

/// Returns midnight on the most recent `week_start` day at or before `timestamp`.
///
/// The calculation happens in the timestamp's own offset; no time-zone
/// conversion takes place and the offset is carried into the result.
///
/// # Example
///
/// ```
/// use weekly_timesheet::calculation::start_of_week;
/// use chrono::{DateTime, Weekday};
///
/// // 2021-08-28 is a Saturday
/// let saturday = DateTime::parse_from_rfc3339("2021-08-28T22:00:00-05:00").unwrap();
/// let week = start_of_week(saturday, Weekday::Sun);
/// assert_eq!(week.to_rfc3339(), "2021-08-22T00:00:00-05:00");
///
/// // Sunday midnight is its own week start
/// let sunday = DateTime::parse_from_rfc3339("2021-08-29T00:00:00-05:00").unwrap();
/// assert_eq!(start_of_week(sunday, Weekday::Sun), sunday);
/// ```
pub fn start_of_week(timestamp: DateTime<FixedOffset>, week_start: Weekday) -> DateTime<FixedOffset> {
    let days_back = (7 + timestamp.weekday().num_days_from_monday()
        - week_start.num_days_from_monday())
        % 7;
    let time = timestamp.time();
    let since_midnight = TimeDelta::seconds(i64::from(time.num_seconds_from_midnight()))
        + TimeDelta::nanoseconds(i64::from(time.nanosecond()));

    timestamp - TimeDelta::days(i64::from(days_back)) - since_midnight
}

/// The part of a shift that falls inside one calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSegment {
    /// The week this segment belongs to.
    pub start_of_week: DateTime<FixedOffset>,
    /// The start of this segment.
    pub start: DateTime<FixedOffset>,
    /// The end of this segment.
    pub end: DateTime<FixedOffset>,
}

impl WeekSegment {
    /// Elapsed time inside this segment.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Elapsed time in hours.
    pub fn hours(&self) -> Decimal {
        hours_from_delta(self.duration())
    }
}

/// Segments a shift by week boundaries.
///
/// Weeks are anchored in the offset of the shift's start. A shift inside one
/// week yields one segment; a shift crossing one or more boundaries yields one
/// segment per week touched, in chronological order. Segment durations always
/// sum to the shift's duration. A zero-length shift yields a single empty
/// segment so its week is still known.
///
/// # Example
///
/// ```
/// use weekly_timesheet::calculation::segment_by_week;
/// use weekly_timesheet::models::ShiftRecord;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// // Saturday 22:00 to Sunday 02:00
/// let shift = ShiftRecord::new(1, 1, "2021-08-28T22:00:00-05:00", "2021-08-29T02:00:00-05:00")
///     .validate()
///     .unwrap();
///
/// let segments = segment_by_week(&shift, Weekday::Sun);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].start_of_week.to_rfc3339(), "2021-08-22T00:00:00-05:00");
/// assert_eq!(segments[0].hours(), Decimal::new(2, 0));
/// assert_eq!(segments[1].start_of_week.to_rfc3339(), "2021-08-29T00:00:00-05:00");
/// assert_eq!(segments[1].hours(), Decimal::new(2, 0));
/// ```
pub fn segment_by_week(shift: &Shift, week_start: Weekday) -> Vec<WeekSegment> {
    if shift.start >= shift.end {
        return vec![WeekSegment {
            start_of_week: start_of_week(shift.start, week_start),
            start: shift.start,
            end: shift.start,
        }];
    }

    let mut segments = Vec::new();
    let mut current_start = shift.start;

    while current_start < shift.end {
        let week = start_of_week(current_start, week_start);
        let next_week = week + TimeDelta::weeks(1);

        // Segment ends at either the week boundary or shift end, whichever is first
        let segment_end = if next_week <= shift.end {
            next_week
        } else {
            shift.end
        };

        segments.push(WeekSegment {
            start_of_week: week,
            start: current_start,
            end: segment_end,
        });

        current_start = segment_end;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftRecord;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn shift(start: &str, end: &str) -> Shift {
        ShiftRecord::new(1, 1, start, end).validate().unwrap()
    }

    // ==========================================================================
    // WB-001: every weekday maps back to the same Sunday
    // ==========================================================================
    #[test]
    fn test_wb_001_all_days_map_to_sunday() {
        // 2021-08-22 is a Sunday
        for day in 22..=28 {
            let timestamp = ts(&format!("2021-08-{}T13:45:12.123456789-05:00", day));
            assert_eq!(
                start_of_week(timestamp, Weekday::Sun),
                ts("2021-08-22T00:00:00-05:00"),
                "day {}",
                day
            );
        }
    }

    // ==========================================================================
    // WB-002: offset is preserved, not converted
    // ==========================================================================
    #[test]
    fn test_wb_002_offset_preserved() {
        // Sunday 01:00 in +09:00 is still Saturday in UTC
        let week = start_of_week(ts("2021-08-29T01:00:00+09:00"), Weekday::Sun);
        assert_eq!(week.to_rfc3339(), "2021-08-29T00:00:00+09:00");
        assert_eq!(week.offset(), &FixedOffset::east_opt(9 * 3600).unwrap());
    }

    // ==========================================================================
    // WB-003: week boundary crosses a month and a year
    // ==========================================================================
    #[test]
    fn test_wb_003_crosses_year_boundary() {
        // 2022-01-01 is a Saturday
        let week = start_of_week(ts("2022-01-01T10:00:00Z"), Weekday::Sun);
        assert_eq!(week, ts("2021-12-26T00:00:00Z"));
    }

    #[test]
    fn test_wb_004_monday_anchored_weeks() {
        // Sunday belongs to the week that began the previous Monday
        let week = start_of_week(ts("2021-08-29T10:00:00Z"), Weekday::Mon);
        assert_eq!(week, ts("2021-08-23T00:00:00Z"));
    }

    #[test]
    fn test_segment_within_one_week() {
        let segments = segment_by_week(
            &shift("2021-08-30T09:00:00-05:00", "2021-08-30T17:00:00-05:00"),
            Weekday::Sun,
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].hours(), Decimal::new(8, 0));
        assert_eq!(segments[0].start_of_week, ts("2021-08-29T00:00:00-05:00"));
    }

    #[test]
    fn test_segment_ending_exactly_on_boundary_stays_in_one_week() {
        let segments = segment_by_week(
            &shift("2021-08-28T20:00:00Z", "2021-08-29T00:00:00Z"),
            Weekday::Sun,
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_of_week, ts("2021-08-22T00:00:00Z"));
    }

    #[test]
    fn test_segment_spanning_several_weeks() {
        let full = shift("2021-08-28T12:00:00Z", "2021-09-06T12:00:00Z");
        let segments = segment_by_week(&full, Weekday::Sun);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].duration(), TimeDelta::hours(12));
        assert_eq!(segments[1].duration(), TimeDelta::weeks(1));
        assert_eq!(segments[2].duration(), TimeDelta::hours(36));

        let total: TimeDelta = segments.iter().map(WeekSegment::duration).sum();
        assert_eq!(total, full.duration());
    }

    #[test]
    fn test_zero_length_shift_yields_empty_segment() {
        let segments = segment_by_week(
            &shift("2021-08-30T09:00:00Z", "2021-08-30T09:00:00Z"),
            Weekday::Sun,
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].duration(), TimeDelta::zero());
        assert_eq!(segments[0].start_of_week, ts("2021-08-29T00:00:00Z"));
    }
}
