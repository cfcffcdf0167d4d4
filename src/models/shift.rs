//! Punch-clock shift record.
//!
//! This module defines the [`ShiftRecord`] struct, the raw clock-in/clock-out
//! record as delivered by the workforce-management API.

use serde::{Deserialize, Serialize};

/// A single punch-clock shift as fetched from the record source.
///
/// The four timestamp fields are kept as the raw `yyyy-MM-ddTHH:mm` strings
/// the source delivered. Resolving them into a usable interval is the job of
/// [`resolve_interval`](crate::reconciliation::resolve_interval).
///
/// Deserialization accepts both snake_case names and the vendor's camelCase
/// names, so records can be fed straight from the API payload.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::ShiftRecord;
///
/// let json = r#"{
///     "shiftId": 11,
///     "employeeId": 7,
///     "departmentId": 3,
///     "startDateTime": "2024-01-01T09:00",
///     "endDateTime": null,
///     "shiftStartDateTime": "2024-01-01T09:00",
///     "shiftEndDateTime": "2024-01-01T17:00",
///     "isApproved": false
/// }"#;
///
/// let shift: ShiftRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(shift.employee_id, 7);
/// assert!(shift.is_missing_punch_out());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Identifier of the punch-clock shift.
    #[serde(alias = "shiftId")]
    pub shift_id: i64,
    /// Identifier of the employee who punched.
    #[serde(alias = "employeeId")]
    pub employee_id: i64,
    /// Identifier of the department the shift belongs to.
    #[serde(alias = "departmentId")]
    pub department_id: i64,
    /// Actual clock-in time.
    #[serde(default, alias = "startDateTime")]
    pub punch_start: Option<String>,
    /// Actual clock-out time; absent when the employee never clocked out.
    #[serde(default, alias = "endDateTime")]
    pub punch_end: Option<String>,
    /// Planned start of the scheduled shift.
    #[serde(default, alias = "shiftStartDateTime")]
    pub scheduled_start: Option<String>,
    /// Planned end of the scheduled shift.
    #[serde(default, alias = "shiftEndDateTime")]
    pub scheduled_end: Option<String>,
    /// Whether a manager approved the punches.
    #[serde(default, alias = "isApproved")]
    pub is_approved: bool,
}

impl ShiftRecord {
    /// Returns true when the shift has no clock-out punch.
    ///
    /// Only the punch matters here: a scheduled end does not make up for a
    /// missing clock-out.
    pub fn is_missing_punch_out(&self) -> bool {
        self.punch_end.is_none()
    }

    /// Returns the raw start value using the clock-in first, scheduled start
    /// second fallback order.
    ///
    /// An empty clock-in is treated as absent. The scheduled start is used
    /// whenever it is present.
    pub fn start_value(&self) -> Option<&str> {
        match self.punch_start.as_deref() {
            Some(punch) if !punch.is_empty() => Some(punch),
            _ => self.scheduled_start.as_deref(),
        }
    }

    /// Returns the raw end value using the clock-out first, scheduled end
    /// second fallback order.
    ///
    /// A present clock-out is always used. The scheduled end is used only when
    /// it is non-empty.
    pub fn end_value(&self) -> Option<&str> {
        match self.punch_end.as_deref() {
            Some(punch) => Some(punch),
            None => self
                .scheduled_end
                .as_deref()
                .filter(|scheduled| !scheduled.is_empty()),
        }
    }
}
