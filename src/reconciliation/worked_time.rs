//! Worked time accumulation.

use tracing::debug;

use crate::models::{ShiftRecord, SkipDiagnostic, WorkedTime, WorkedTimeSummary};

use super::time_resolver::resolve_interval;

/// Sums the resolved duration of every shift.
///
/// Shifts that cannot be resolved are left out of the total and listed in
/// [`WorkedTimeSummary::skipped`].
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::ShiftRecord;
/// use punchclock_reconcile::reconciliation::total_worked_time;
///
/// let shift = ShiftRecord {
///     shift_id: 1,
///     employee_id: 7,
///     department_id: 3,
///     punch_start: Some("2024-01-01T09:00".to_string()),
///     punch_end: Some("2024-01-01T17:30".to_string()),
///     scheduled_start: None,
///     scheduled_end: None,
///     is_approved: true,
/// };
///
/// let summary = total_worked_time(&[shift]);
/// assert_eq!(summary.total.seconds(), 30_600);
/// assert_eq!(summary.formatted, "08:30:00");
/// ```
pub fn total_worked_time(shifts: &[ShiftRecord]) -> WorkedTimeSummary {
    let mut total = WorkedTime::default();
    let mut resolved_shifts = 0;
    let mut skipped = Vec::new();

    for shift in shifts {
        match resolve_interval(shift) {
            Ok(interval) => {
                debug!(
                    shift_id = shift.shift_id,
                    employee_id = shift.employee_id,
                    is_approved = shift.is_approved,
                    duration_seconds = interval.duration_seconds,
                    "Adding shift to worked time"
                );
                total += interval.worked_time();
                resolved_shifts += 1;
            }
            Err(reason) => skipped.push(SkipDiagnostic::new(shift.shift_id, reason)),
        }
    }

    debug!(
        total_seconds = total.seconds(),
        resolved_shifts,
        skipped = skipped.len(),
        "Worked time accumulated"
    );

    WorkedTimeSummary::new(total, resolved_shifts, skipped)
}
