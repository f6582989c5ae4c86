//! Weekly hour accumulation and the regular/overtime split.
//!
//! Worked time is accumulated per week as exact elapsed time. Conversion to
//! hours, rounding and the threshold split happen once per week at the end,
//! so partial contributions from boundary-crossing shifts add up exactly.
//!
//! Weeks are keyed by their local calendar date, so a week whose shifts carry
//! different UTC offsets (a daylight-saving change, for example) is still a
//! single week with a single threshold.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::HoursRounding;
use crate::models::{Shift, hours_from_delta};

use super::week::{WeekSegment, segment_by_week};

/// A week's hours divided at the overtime threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold (zero when under it).
    pub overtime_hours: Decimal,
}

/// Splits a week's total at the overtime threshold.
///
/// # Examples
///
/// ```
/// use weekly_timesheet::calculation::split_weekly_hours;
/// use rust_decimal::Decimal;
///
/// let split = split_weekly_hours(Decimal::new(45, 0), Decimal::new(40, 0));
/// assert_eq!(split.regular_hours, Decimal::new(40, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(5, 0));
///
/// let split = split_weekly_hours(Decimal::new(32, 0), Decimal::new(40, 0));
/// assert_eq!(split.regular_hours, Decimal::new(32, 0));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_weekly_hours(total: Decimal, threshold: Decimal) -> WeeklyHours {
    let total = total.max(Decimal::ZERO);
    let regular_hours = total.min(threshold);
    let overtime_hours = (total - threshold).max(Decimal::ZERO);

    WeeklyHours {
        regular_hours,
        overtime_hours,
    }
}

/// Accumulates one employee's worked time per week.
///
/// # Example
///
/// ```
/// use weekly_timesheet::calculation::HoursAggregator;
/// use weekly_timesheet::config::HoursRounding;
/// use weekly_timesheet::models::ShiftRecord;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let mut aggregator = HoursAggregator::new(Weekday::Sun);
/// for day in 23..=27 {
///     let shift = ShiftRecord::new(
///         day,
///         1,
///         format!("2021-08-{}T08:00:00Z", day),
///         format!("2021-08-{}T17:00:00Z", day),
///     )
///     .validate()
///     .unwrap();
///     aggregator.add_shift(&shift);
/// }
///
/// let weeks = aggregator.finish(Decimal::new(40, 0), HoursRounding::Truncate);
/// assert_eq!(weeks.len(), 1);
/// assert_eq!(weeks[0].1.regular_hours, Decimal::new(40, 0));
/// assert_eq!(weeks[0].1.overtime_hours, Decimal::new(5, 0));
/// ```
#[derive(Debug, Clone)]
pub struct HoursAggregator {
    week_start: Weekday,
    weeks: BTreeMap<NaiveDate, WeekTotal>,
}

/// Running total of one calendar week.
#[derive(Debug, Clone, Copy)]
struct WeekTotal {
    /// Midnight opening the week, in the offset of the earliest segment.
    start_of_week: DateTime<FixedOffset>,
    /// Start of the earliest segment credited so far.
    earliest: DateTime<FixedOffset>,
    worked: TimeDelta,
}

/// Orders segment starts by instant, then by offset, so the anchor offset
/// does not depend on the order segments arrive in.
fn precedes(a: DateTime<FixedOffset>, b: DateTime<FixedOffset>) -> bool {
    (a, a.offset().local_minus_utc()) < (b, b.offset().local_minus_utc())
}

impl HoursAggregator {
    /// Creates an empty aggregator for weeks opening on `week_start`.
    pub fn new(week_start: Weekday) -> Self {
        Self {
            week_start,
            weeks: BTreeMap::new(),
        }
    }

    /// Credits a shift to the week or weeks it falls in.
    pub fn add_shift(&mut self, shift: &Shift) {
        for segment in segment_by_week(shift, self.week_start) {
            self.add_segment(&segment);
        }
    }

    /// Credits one week segment.
    pub fn add_segment(&mut self, segment: &WeekSegment) {
        let week = self
            .weeks
            .entry(segment.start_of_week.date_naive())
            .or_insert(WeekTotal {
                start_of_week: segment.start_of_week,
                earliest: segment.start,
                worked: TimeDelta::zero(),
            });

        if precedes(segment.start, week.earliest) {
            week.start_of_week = segment.start_of_week;
            week.earliest = segment.start;
        }
        week.worked += segment.duration();
    }

    /// Whether no week has been credited yet.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Exact worked time per week, in week order.
    pub fn week_totals(&self) -> impl Iterator<Item = (DateTime<FixedOffset>, TimeDelta)> + '_ {
        self.weeks
            .values()
            .map(|week| (week.start_of_week, week.worked))
    }

    /// Converts each week's total to hours, rounds it and splits it at `threshold`.
    pub fn finish(
        self,
        threshold: Decimal,
        rounding: HoursRounding,
    ) -> Vec<(DateTime<FixedOffset>, WeeklyHours)> {
        self.weeks
            .into_values()
            .map(|week| {
                let hours = rounding.apply(hours_from_delta(week.worked));
                (week.start_of_week, split_weekly_hours(hours, threshold))
            })
            .collect()
    }
}
