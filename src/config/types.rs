//! Configuration types for timesheet aggregation.
//!
//! These structures are deserialized from a YAML configuration file. Every
//! field has a default, so an empty file yields [`TimesheetConfig::default`].

use chrono::Weekday;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default weekly threshold above which hours count as overtime.
pub const DEFAULT_WEEKLY_OVERTIME_THRESHOLD: u32 = 40;

/// Hours in a week; a threshold above this could never be reached.
const HOURS_PER_WEEK: u32 = 168;

/// How a week's total is reduced before the regular/overtime split.
///
/// # Example
///
/// ```
/// use weekly_timesheet::config::HoursRounding;
/// use rust_decimal::Decimal;
///
/// let total = Decimal::new(4275, 2); // 42.75
/// assert_eq!(HoursRounding::Truncate.apply(total), Decimal::new(42, 0));
/// assert_eq!(HoursRounding::Nearest.apply(total), Decimal::new(43, 0));
/// assert_eq!(HoursRounding::Exact.apply(total), total);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursRounding {
    /// Keep fractional hours (to six decimal places).
    Exact,
    /// Drop the fractional part.
    #[default]
    Truncate,
    /// Round to the nearest whole hour, halves away from zero.
    Nearest,
}

impl HoursRounding {
    /// Applies the rounding policy to an hour total.
    pub fn apply(self, hours: Decimal) -> Decimal {
        match self {
            HoursRounding::Exact => hours.round_dp(6).normalize(),
            HoursRounding::Truncate => hours.trunc(),
            HoursRounding::Nearest => {
                hours.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
        }
    }
}

/// Settings for one aggregation pass.
///
/// # Example
///
/// ```
/// use weekly_timesheet::config::{HoursRounding, TimesheetConfig};
/// use chrono::Weekday;
///
/// let config: TimesheetConfig = serde_yaml::from_str("hours_rounding: nearest").unwrap();
/// assert_eq!(config.weekly_overtime_threshold_hours, 40);
/// assert_eq!(config.week_starts_on, Weekday::Sun);
/// assert_eq!(config.hours_rounding, HoursRounding::Nearest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesheetConfig {
    /// Regular-hours cap per week.
    pub weekly_overtime_threshold_hours: u32,
    /// First day of each week bucket.
    pub week_starts_on: Weekday,
    /// Rounding applied to each week's total.
    pub hours_rounding: HoursRounding,
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            weekly_overtime_threshold_hours: DEFAULT_WEEKLY_OVERTIME_THRESHOLD,
            week_starts_on: Weekday::Sun,
            hours_rounding: HoursRounding::default(),
        }
    }
}

impl TimesheetConfig {
    /// The weekly threshold as a decimal hour count.
    pub fn weekly_threshold(&self) -> Decimal {
        Decimal::from(self.weekly_overtime_threshold_hours)
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.weekly_overtime_threshold_hours == 0 {
            return Err(EngineError::InvalidConfig {
                field: "weekly_overtime_threshold_hours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.weekly_overtime_threshold_hours > HOURS_PER_WEEK {
            return Err(EngineError::InvalidConfig {
                field: "weekly_overtime_threshold_hours".to_string(),
                message: format!(
                    "{} exceeds the {} hours in a week",
                    self.weekly_overtime_threshold_hours, HOURS_PER_WEEK
                ),
            });
        }
        Ok(())
    }
}
