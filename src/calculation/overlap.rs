//! Overlap detection between one employee's shifts.
//!
//! Shifts are scanned in chronological order while keeping the set of shifts
//! still open at the current start time. Every open shift that intersects the
//! incoming one is paired with it, and both sides of each pair are rejected.
//! Comparing against all open shifts rather than only the most recent one
//! means chains of three or more colliding shifts are caught in full.

use std::collections::BTreeMap;

use crate::models::{IssueKind, Shift, ShiftIssue};

/// The outcome of scanning one employee's shifts for collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapDetection {
    /// Shifts that collide with nothing, still in chronological order.
    pub valid: Vec<Shift>,
    /// One issue per rejected shift, ordered by shift id. Each names the
    /// first shift it was found to collide with.
    pub issues: Vec<ShiftIssue>,
}

impl OverlapDetection {
    /// Ids of the rejected shifts, ascending.
    pub fn invalid_ids(&self) -> Vec<i64> {
        self.issues.iter().map(|i| i.shift_id).collect()
    }
}

/// Finds every pair of intersecting shifts.
///
/// `shifts` must be sorted ascending by start. Intervals are half-open, so a
/// shift ending at 17:00 and one starting at 17:00 do not collide, and a
/// zero-length shift only collides with a shift that strictly contains it.
///
/// # Example
///
/// ```
/// use weekly_timesheet::calculation::detect_overlaps;
/// use weekly_timesheet::models::ShiftRecord;
///
/// let shifts: Vec<_> = [
///     ShiftRecord::new(1, 1, "2021-08-30T09:00:00Z", "2021-08-30T17:00:00Z"),
///     ShiftRecord::new(2, 1, "2021-08-30T16:00:00Z", "2021-08-30T20:00:00Z"),
///     ShiftRecord::new(3, 1, "2021-08-31T09:00:00Z", "2021-08-31T17:00:00Z"),
/// ]
/// .iter()
/// .map(|r| r.validate().unwrap())
/// .collect();
///
/// let detection = detect_overlaps(&shifts);
/// assert_eq!(detection.invalid_ids(), vec![1, 2]);
/// assert_eq!(detection.valid.len(), 1);
/// assert_eq!(detection.valid[0].shift_id, 3);
/// ```
pub fn detect_overlaps(shifts: &[Shift]) -> OverlapDetection {
    let mut open: Vec<&Shift> = Vec::new();
    let mut conflicts: BTreeMap<i64, ShiftIssue> = BTreeMap::new();

    for shift in shifts {
        open.retain(|previous| previous.end > shift.start);

        for previous in open.iter().filter(|previous| previous.overlaps(shift)) {
            conflicts
                .entry(shift.shift_id)
                .or_insert_with(|| overlap_issue(shift, previous.shift_id));
            conflicts
                .entry(previous.shift_id)
                .or_insert_with(|| overlap_issue(previous, shift.shift_id));
        }

        open.push(shift);
    }

    let valid = shifts
        .iter()
        .filter(|shift| !conflicts.contains_key(&shift.shift_id))
        .copied()
        .collect();

    OverlapDetection {
        valid,
        issues: conflicts.into_values().collect(),
    }
}

fn overlap_issue(shift: &Shift, other_shift_id: i64) -> ShiftIssue {
    ShiftIssue {
        shift_id: shift.shift_id,
        employee_id: shift.employee_id,
        kind: IssueKind::Overlap { other_shift_id },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftRecord;

    fn shift(shift_id: i64, start: &str, end: &str) -> Shift {
        ShiftRecord::new(
            shift_id,
            1,
            format!("2021-08-30T{}:00Z", start),
            format!("2021-08-30T{}:00Z", end),
        )
        .validate()
        .unwrap()
    }

    fn valid_ids(detection: &OverlapDetection) -> Vec<i64> {
        detection.valid.iter().map(|s| s.shift_id).collect()
    }

    // ==========================================================================
    // OV-001: a single shift is always valid
    // ==========================================================================
    #[test]
    fn test_ov_001_single_shift_is_valid() {
        let detection = detect_overlaps(&[shift(1, "09:00", "17:00")]);
        assert!(detection.issues.is_empty());
        assert_eq!(valid_ids(&detection), vec![1]);
    }

    // ==========================================================================
    // OV-002: back-to-back shifts do not collide
    // ==========================================================================
    #[test]
    fn test_ov_002_back_to_back_shifts_are_valid() {
        let detection = detect_overlaps(&[shift(1, "09:00", "13:00"), shift(2, "13:00", "17:00")]);
        assert!(detection.issues.is_empty());
        assert_eq!(valid_ids(&detection), vec![1, 2]);
    }

    // ==========================================================================
    // OV-003: partial overlap rejects both shifts
    // ==========================================================================
    #[test]
    fn test_ov_003_partial_overlap_rejects_both() {
        let detection = detect_overlaps(&[shift(1, "09:00", "17:00"), shift(2, "16:00", "20:00")]);
        assert_eq!(detection.invalid_ids(), vec![1, 2]);
        assert!(detection.valid.is_empty());
        assert_eq!(
            detection.issues[0].kind,
            IssueKind::Overlap { other_shift_id: 2 }
        );
        assert_eq!(
            detection.issues[1].kind,
            IssueKind::Overlap { other_shift_id: 1 }
        );
    }

    // ==========================================================================
    // OV-004: identical shifts are mutually overlapping
    // ==========================================================================
    #[test]
    fn test_ov_004_identical_shifts_collide() {
        let detection = detect_overlaps(&[shift(1, "09:00", "17:00"), shift(2, "09:00", "17:00")]);
        assert_eq!(detection.invalid_ids(), vec![1, 2]);
    }

    // ==========================================================================
    // OV-005: chain of three is caught in full
    // ==========================================================================
    #[test]
    fn test_ov_005_chain_of_three_all_rejected() {
        // 2 overlaps 1, 3 overlaps 2 but not 1
        let detection = detect_overlaps(&[
            shift(1, "09:00", "17:00"),
            shift(2, "16:00", "20:00"),
            shift(3, "18:00", "22:00"),
        ]);
        assert_eq!(detection.invalid_ids(), vec![1, 2, 3]);
    }

    // ==========================================================================
    // OV-006: long shift containing several short ones
    // ==========================================================================
    #[test]
    fn test_ov_006_containing_shift_rejects_all_contained() {
        let detection = detect_overlaps(&[
            shift(1, "06:00", "22:00"),
            shift(2, "08:00", "09:00"),
            shift(3, "12:00", "13:00"),
            shift(4, "22:00", "23:00"),
        ]);
        assert_eq!(detection.invalid_ids(), vec![1, 2, 3]);
        assert_eq!(valid_ids(&detection), vec![4]);
    }

    // ==========================================================================
    // OV-007: zero-length shifts
    // ==========================================================================
    #[test]
    fn test_ov_007_zero_length_shift_at_boundary_is_valid() {
        let detection = detect_overlaps(&[
            shift(1, "09:00", "09:00"),
            shift(2, "09:00", "17:00"),
            shift(3, "17:00", "17:00"),
        ]);
        assert!(detection.issues.is_empty());
    }

    #[test]
    fn test_ov_008_zero_length_shift_inside_another_collides() {
        let detection = detect_overlaps(&[shift(1, "09:00", "17:00"), shift(2, "12:00", "12:00")]);
        assert_eq!(detection.invalid_ids(), vec![1, 2]);
    }

    // ==========================================================================
    // OV-009: a rejected pair does not taint a later clean shift
    // ==========================================================================
    #[test]
    fn test_ov_009_later_clean_shift_stays_valid() {
        let detection = detect_overlaps(&[
            shift(1, "09:00", "12:00"),
            shift(2, "11:00", "13:00"),
            shift(3, "13:00", "15:00"),
        ]);
        assert_eq!(detection.invalid_ids(), vec![1, 2]);
        assert_eq!(valid_ids(&detection), vec![3]);
    }

    #[test]
    fn test_empty_input() {
        let detection = detect_overlaps(&[]);
        assert!(detection.valid.is_empty());
        assert!(detection.issues.is_empty());
    }
}
