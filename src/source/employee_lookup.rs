//! Employee lookup collaborator.

use std::collections::HashMap;

use crate::error::ReconcileResult;
use crate::models::Employee;

/// Resolves employee ids to employee records.
///
/// `Ok(None)` means the source does not know the id. Transport failures are
/// reported as [`ReconcileError::Transport`](crate::error::ReconcileError::Transport).
pub trait EmployeeLookup {
    /// Looks up a single employee by id.
    fn get_by_id(&self, employee_id: i64) -> ReconcileResult<Option<Employee>>;
}

/// An in-memory [`EmployeeLookup`] backed by a map.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::Employee;
/// use punchclock_reconcile::source::{EmployeeDirectory, EmployeeLookup};
///
/// let directory = EmployeeDirectory::from_employees(vec![Employee {
///     id: 7,
///     first_name: "Kari".to_string(),
///     last_name: "Nordmann".to_string(),
///     email: None,
/// }]);
///
/// assert!(directory.get_by_id(7)?.is_some());
/// assert!(directory.get_by_id(8)?.is_none());
/// # Ok::<(), punchclock_reconcile::error::ReconcileError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    employees: HashMap<i64, Employee>,
}

impl EmployeeDirectory {
    /// Builds a directory from a list of employees. Later duplicates win.
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            employees: employees.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    /// Number of employees in the directory.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeLookup for EmployeeDirectory {
    fn get_by_id(&self, employee_id: i64) -> ReconcileResult<Option<Employee>> {
        Ok(self.employees.get(&employee_id).cloned())
    }
}
