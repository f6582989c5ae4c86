//! Shift issue records.
//!
//! Every shift excluded from the hour totals produces one [`ShiftIssue`]
//! explaining why. Issues are data, never errors: the aggregation pass keeps
//! going and the shift id lands in the employee's invalid set.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Why a shift was excluded from the hour totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// The start timestamp is not RFC 3339.
    MalformedStart {
        /// The text that failed to parse.
        value: String,
    },
    /// The end timestamp is not RFC 3339.
    MalformedEnd {
        /// The text that failed to parse.
        value: String,
    },
    /// The shift ends before it starts.
    EndBeforeStart,
    /// The shift intersects another shift of the same employee.
    Overlap {
        /// The shift it collides with.
        other_shift_id: i64,
    },
}

/// A rejected shift and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftIssue {
    /// The rejected shift.
    pub shift_id: i64,
    /// The employee the shift belongs to.
    pub employee_id: i64,
    /// The reason for rejection.
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl ShiftIssue {
    /// Human-readable description of the problem.
    ///
    /// # Example
    ///
    /// ```
    /// use weekly_timesheet::models::{IssueKind, ShiftIssue};
    ///
    /// let issue = ShiftIssue {
    ///     shift_id: 2,
    ///     employee_id: 1,
    ///     kind: IssueKind::Overlap { other_shift_id: 1 },
    /// };
    /// assert_eq!(issue.message(), "overlaps shift 1");
    /// ```
    pub fn message(&self) -> String {
        match &self.kind {
            IssueKind::MalformedStart { value } => {
                format!("start time '{}' is not a valid RFC 3339 timestamp", value)
            }
            IssueKind::MalformedEnd { value } => {
                format!("end time '{}' is not a valid RFC 3339 timestamp", value)
            }
            IssueKind::EndBeforeStart => "end time is before start time".to_string(),
            IssueKind::Overlap { other_shift_id } => format!("overlaps shift {}", other_shift_id),
        }
    }

    /// Whether the shift was rejected for colliding with another shift.
    pub fn is_overlap(&self) -> bool {
        matches!(self.kind, IssueKind::Overlap { .. })
    }
}

impl From<ShiftIssue> for EngineError {
    fn from(issue: ShiftIssue) -> Self {
        EngineError::InvalidShift {
            shift_id: issue.shift_id,
            message: issue.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_converts_to_invalid_shift_error() {
        let issue = ShiftIssue {
            shift_id: 9,
            employee_id: 1,
            kind: IssueKind::EndBeforeStart,
        };
        let error: EngineError = issue.into();
        assert_eq!(
            error.to_string(),
            "Invalid shift '9': end time is before start time"
        );
    }

    #[test]
    fn test_issue_serialization_is_flat() {
        let issue = ShiftIssue {
            shift_id: 4,
            employee_id: 2,
            kind: IssueKind::Overlap { other_shift_id: 3 },
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "overlap");
        assert_eq!(json["other_shift_id"], 3);
        assert_eq!(json["shift_id"], 4);
    }

    #[test]
    fn test_only_overlaps_report_as_overlap() {
        let overlap = ShiftIssue {
            shift_id: 1,
            employee_id: 1,
            kind: IssueKind::Overlap { other_shift_id: 2 },
        };
        let malformed = ShiftIssue {
            shift_id: 1,
            employee_id: 1,
            kind: IssueKind::MalformedStart {
                value: "x".to_string(),
            },
        };
        assert!(overlap.is_overlap());
        assert!(!malformed.is_overlap());
    }
}
