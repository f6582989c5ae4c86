//! Chronological ordering of one employee's shifts.

use crate::models::ShiftRecord;

/// Sorts records ascending by start instant.
///
/// The sort is stable, so records with equal start times keep their input
/// order. A start time that does not parse sorts before every valid one
/// instead of aborting the batch.
///
/// # Example
///
/// ```
/// use weekly_timesheet::calculation::sort_chronologically;
/// use weekly_timesheet::models::ShiftRecord;
///
/// let late = ShiftRecord::new(1, 1, "2021-08-30T13:00:00Z", "2021-08-30T17:00:00Z");
/// let early = ShiftRecord::new(2, 1, "2021-08-30T09:00:00Z", "2021-08-30T12:00:00Z");
/// let broken = ShiftRecord::new(3, 1, "garbage", "2021-08-30T12:00:00Z");
///
/// let mut shifts = vec![&late, &early, &broken];
/// sort_chronologically(&mut shifts);
///
/// let ids: Vec<i64> = shifts.iter().map(|s| s.shift_id).collect();
/// assert_eq!(ids, vec![3, 2, 1]);
/// ```
pub fn sort_chronologically(records: &mut [&ShiftRecord]) {
    // `None < Some(_)`, which puts unparseable starts first.
    records.sort_by_cached_key(|record| record.parsed_start());
}
