//! Partitioning of a flat batch into per-employee sequences.

use std::collections::BTreeMap;

use crate::models::ShiftRecord;

/// Groups records by employee id.
///
/// Input order is preserved within each group. No validation happens here;
/// malformed records are grouped like any other. Employees come out in
/// ascending id order.
///
/// # Example
///
/// ```
/// use weekly_timesheet::calculation::group_by_employee;
/// use weekly_timesheet::models::ShiftRecord;
///
/// let records = vec![
///     ShiftRecord::new(1, 20, "2021-08-30T09:00:00Z", "2021-08-30T17:00:00Z"),
///     ShiftRecord::new(2, 10, "2021-08-31T09:00:00Z", "2021-08-31T17:00:00Z"),
///     ShiftRecord::new(3, 20, "2021-08-29T09:00:00Z", "2021-08-29T17:00:00Z"),
/// ];
///
/// let groups = group_by_employee(&records);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![10, 20]);
/// assert_eq!(groups[&20][0].shift_id, 1);
/// assert_eq!(groups[&20][1].shift_id, 3);
/// ```
pub fn group_by_employee(records: &[ShiftRecord]) -> BTreeMap<i64, Vec<&ShiftRecord>> {
    let mut groups: BTreeMap<i64, Vec<&ShiftRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.employee_id).or_default().push(record);
    }
    groups
}
