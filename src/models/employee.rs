//! Employee model.
//!
//! This module defines the Employee struct returned by the
//! [`EmployeeLookup`](crate::source::EmployeeLookup) collaborator.

use serde::{Deserialize, Serialize};

/// Represents an employee referenced by punch-clock shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i64,
    /// The employee's first name.
    #[serde(alias = "firstName")]
    pub first_name: String,
    /// The employee's last name.
    #[serde(alias = "lastName")]
    pub last_name: String,
    /// Contact email, when the source exposes it.
    #[serde(default)]
    pub email: Option<String>,
}

impl Employee {
    /// Returns the employee's first and last name joined by a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use punchclock_reconcile::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: 7,
    ///     first_name: "Kari".to_string(),
    ///     last_name: "Nordmann".to_string(),
    ///     email: None,
    /// };
    /// assert_eq!(employee.full_name(), "Kari Nordmann");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
