//! Missed punch-out records.

use serde::{Deserialize, Serialize};

use super::{Employee, SkipDiagnostic};

/// Missed clock-outs of a single employee.
///
/// Created on the employee's first missed clock-out and updated for every
/// further one, so `count` always equals `start_times.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedPunchoutRecord {
    /// The employee the record belongs to.
    pub employee_id: i64,
    /// The employee as returned by the lookup; `None` if the lookup did not
    /// know the id.
    pub employee: Option<Employee>,
    /// Number of shifts without a clock-out.
    pub count: u32,
    /// Start time of each offending shift, in shift order.
    pub start_times: Vec<String>,
}

impl MissedPunchoutRecord {
    /// Creates an empty record for an employee.
    pub fn new(employee_id: i64, employee: Option<Employee>) -> Self {
        Self {
            employee_id,
            employee,
            count: 0,
            start_times: Vec::new(),
        }
    }

    /// Records one more missed clock-out starting at `start_time`.
    pub fn record(&mut self, start_time: impl Into<String>) {
        self.count += 1;
        self.start_times.push(start_time.into());
    }
}

/// Missed clock-outs grouped by employee.
///
/// Records are kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedPunchoutReport {
    /// One record per employee, first-seen employee first.
    pub records: Vec<MissedPunchoutRecord>,
    /// Missing-end shifts that could not be attributed.
    pub skipped: Vec<SkipDiagnostic>,
}

impl MissedPunchoutReport {
    /// Returns the record for an employee, if they missed any clock-out.
    pub fn get(&self, employee_id: i64) -> Option<&MissedPunchoutRecord> {
        self.records.iter().find(|r| r.employee_id == employee_id)
    }

    /// Number of employees with at least one missed clock-out.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nobody missed a clock-out.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total missed clock-outs across all employees.
    pub fn total_missed(&self) -> u32 {
        self.records.iter().map(|r| r.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_count_and_keeps_order() {
        let mut record = MissedPunchoutRecord::new(7, None);
        record.record("2024-01-01T09:00");
        record.record("2024-01-02T09:00");

        assert_eq!(record.count, 2);
        assert_eq!(
            record.start_times,
            vec!["2024-01-01T09:00", "2024-01-02T09:00"]
        );
    }

    #[test]
    fn test_report_lookup_and_totals() {
        let mut first = MissedPunchoutRecord::new(7, None);
        first.record("2024-01-01T09:00");
        let mut second = MissedPunchoutRecord::new(3, None);
        second.record("2024-01-01T10:00");
        second.record("2024-01-03T10:00");

        let report = MissedPunchoutReport {
            records: vec![first, second],
            skipped: vec![],
        };

        assert_eq!(report.len(), 2);
        assert_eq!(report.total_missed(), 3);
        assert_eq!(report.get(3).map(|r| r.count), Some(2));
        assert!(report.get(99).is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = MissedPunchoutReport::default();
        assert!(report.is_empty());
        assert_eq!(report.total_missed(), 0);
    }
}
