//! Missed clock-out detection.
//!
//! Groups every shift without a clock-out by employee. The employee record is
//! fetched once per employee, on their first offending shift.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::ReconcileResult;
use crate::models::{
    MissedPunchoutRecord, MissedPunchoutReport, ShiftRecord, SkipDiagnostic, SkipReason,
};
use crate::source::EmployeeLookup;

/// Aggregates missed clock-outs per employee.
///
/// A shift counts as a missed clock-out whenever it has no clock-out punch,
/// even if a scheduled end exists. For each such shift the employee's count is
/// incremented and the shift's start (clock-in, falling back to the scheduled
/// start) is appended to their list. Records are returned in the order their
/// employee was first seen.
///
/// A missing-end shift without any usable start is not counted; it is reported
/// in [`MissedPunchoutReport::skipped`] and triggers no lookup. An employee
/// unknown to `lookup` is still counted, with `employee` left as `None`.
///
/// # Errors
///
/// A failing lookup aborts the aggregation and its error is returned as-is.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::ShiftRecord;
/// use punchclock_reconcile::reconciliation::aggregate_missed_punchouts;
/// use punchclock_reconcile::source::EmployeeDirectory;
///
/// let shift = |shift_id: i64, start: &str| ShiftRecord {
///     shift_id,
///     employee_id: 7,
///     department_id: 3,
///     punch_start: Some(start.to_string()),
///     punch_end: None,
///     scheduled_start: None,
///     scheduled_end: None,
///     is_approved: false,
/// };
/// let shifts = vec![shift(1, "2024-01-01T09:00"), shift(2, "2024-01-02T09:00")];
///
/// let report = aggregate_missed_punchouts(&shifts, &EmployeeDirectory::default())?;
/// let record = report.get(7).unwrap();
/// assert_eq!(record.count, 2);
/// assert_eq!(record.start_times, vec!["2024-01-01T09:00", "2024-01-02T09:00"]);
/// # Ok::<(), punchclock_reconcile::error::ReconcileError>(())
/// ```
pub fn aggregate_missed_punchouts<L>(
    shifts: &[ShiftRecord],
    lookup: &L,
) -> ReconcileResult<MissedPunchoutReport>
where
    L: EmployeeLookup + ?Sized,
{
    let mut records: Vec<MissedPunchoutRecord> = Vec::new();
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut skipped = Vec::new();

    for shift in shifts.iter().filter(|s| s.is_missing_punch_out()) {
        let Some(start) = shift.start_value() else {
            debug!(shift_id = shift.shift_id, "Missed punch-out without a usable start");
            skipped.push(SkipDiagnostic::new(shift.shift_id, SkipReason::NoUsableStart));
            continue;
        };

        let position = match positions.get(&shift.employee_id) {
            Some(&position) => position,
            None => {
                let employee = lookup.get_by_id(shift.employee_id)?;
                if employee.is_none() {
                    warn!(
                        employee_id = shift.employee_id,
                        "Employee not found, recording missed punch-out without details"
                    );
                }
                debug!(
                    employee_id = shift.employee_id,
                    "First missed punch-out for employee"
                );
                records.push(MissedPunchoutRecord::new(shift.employee_id, employee));
                positions.insert(shift.employee_id, records.len() - 1);
                records.len() - 1
            }
        };

        records[position].record(start);
    }

    debug!(
        employees = records.len(),
        skipped = skipped.len(),
        "Missed punch-outs aggregated"
    );

    Ok(MissedPunchoutReport { records, skipped })
}
