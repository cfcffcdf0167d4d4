//! Shift set filters applied between fetching and aggregation.

use crate::models::ShiftRecord;

/// Keeps the shifts belonging to one department, in their original order.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::ShiftRecord;
/// use punchclock_reconcile::reconciliation::filter_by_department;
///
/// let shift = |shift_id: i64, department_id: i64| ShiftRecord {
///     shift_id,
///     employee_id: 1,
///     department_id,
///     punch_start: None,
///     punch_end: None,
///     scheduled_start: None,
///     scheduled_end: None,
///     is_approved: true,
/// };
///
/// let kitchen = filter_by_department(&[shift(1, 10), shift(2, 20), shift(3, 10)], 10);
/// assert_eq!(kitchen.iter().map(|s| s.shift_id).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn filter_by_department(shifts: &[ShiftRecord], department_id: i64) -> Vec<ShiftRecord> {
    shifts
        .iter()
        .filter(|shift| shift.department_id == department_id)
        .cloned()
        .collect()
}

/// Keeps the shifts a manager has approved, in their original order.
pub fn filter_approved(shifts: &[ShiftRecord]) -> Vec<ShiftRecord> {
    shifts
        .iter()
        .filter(|shift| shift.is_approved)
        .cloned()
        .collect()
}
