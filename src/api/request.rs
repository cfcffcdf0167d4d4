//! Request types for the reconciliation API.
//!
//! This module defines the JSON request structure for the `/reconcile` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{Employee, ShiftRecord};

/// Request body for the `/reconcile` endpoint.
///
/// Carries shift records already pulled from the workforce-management API and
/// the employees they refer to.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::api::ReconciliationRequest;
///
/// let request: ReconciliationRequest = serde_json::from_str(r#"{
///     "shifts": [{
///         "shiftId": 1,
///         "employeeId": 7,
///         "departmentId": 3,
///         "startDateTime": "2024-01-01T09:00",
///         "endDateTime": "2024-01-01T17:30"
///     }]
/// }"#).unwrap();
///
/// assert_eq!(request.shifts.len(), 1);
/// assert!(request.employees.is_empty());
/// assert!(request.department_id.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationRequest {
    /// The shift records to reconcile, in source order.
    pub shifts: Vec<ShiftRecord>,
    /// Employees used to enrich missed punch-out records.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Restrict the reconciliation to one department.
    #[serde(default)]
    pub department_id: Option<i64>,
}
