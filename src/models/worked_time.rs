//! Worked time totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SkipDiagnostic;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// An accumulated amount of worked time, in whole seconds.
///
/// Displays as `HH:MM:SS`. Hours do not wrap at 24, so a week of shifts
/// renders as e.g. `37:30:00`.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::WorkedTime;
///
/// let total = WorkedTime::from_seconds(30_600);
/// assert_eq!(total.to_string(), "08:30:00");
///
/// let long = WorkedTime::from_seconds(100 * 3600 + 61);
/// assert_eq!(long.to_string(), "100:01:01");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorkedTime {
    seconds: u64,
}

impl WorkedTime {
    /// Creates a worked time from a number of seconds.
    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Returns the total number of seconds.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Returns the worked time as decimal hours, rounded to two places.
    ///
    /// ```
    /// use punchclock_reconcile::models::WorkedTime;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(WorkedTime::from_seconds(30_600).hours(), Decimal::new(850, 2));
    /// ```
    pub fn hours(&self) -> Decimal {
        (Decimal::from(self.seconds) / Decimal::from(SECONDS_PER_HOUR)).round_dp(2)
    }
}

impl std::ops::Add for WorkedTime {
    type Output = WorkedTime;

    fn add(self, rhs: WorkedTime) -> WorkedTime {
        WorkedTime::from_seconds(self.seconds + rhs.seconds)
    }
}

impl std::ops::AddAssign for WorkedTime {
    fn add_assign(&mut self, rhs: WorkedTime) {
        self.seconds += rhs.seconds;
    }
}

impl std::iter::Sum for WorkedTime {
    fn sum<I: Iterator<Item = WorkedTime>>(iter: I) -> Self {
        iter.fold(WorkedTime::default(), |acc, t| acc + t)
    }
}

impl std::fmt::Display for WorkedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.seconds / SECONDS_PER_HOUR;
        let remainder = self.seconds % SECONDS_PER_HOUR;
        let minutes = remainder / SECONDS_PER_MINUTE;
        let seconds = remainder % SECONDS_PER_MINUTE;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Result of summing worked time over a shift set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedTimeSummary {
    /// Total worked time over all resolved shifts.
    pub total: WorkedTime,
    /// The total formatted as `HH:MM:SS`.
    pub formatted: String,
    /// The total as decimal hours.
    pub hours: Decimal,
    /// Number of shifts that contributed to the total.
    pub resolved_shifts: usize,
    /// Shifts left out of the total.
    pub skipped: Vec<SkipDiagnostic>,
}

impl WorkedTimeSummary {
    /// Builds a summary from a total and its diagnostics.
    pub fn new(total: WorkedTime, resolved_shifts: usize, skipped: Vec<SkipDiagnostic>) -> Self {
        Self {
            total,
            formatted: total.to_string(),
            hours: total.hours(),
            resolved_shifts,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_formats_as_zeroes() {
        assert_eq!(WorkedTime::default().to_string(), "00:00:00");
    }

    #[test]
    fn test_hours_do_not_wrap_at_24() {
        let total = WorkedTime::from_seconds(26 * 3600 + 15 * 60 + 9);
        assert_eq!(total.to_string(), "26:15:09");
    }

    #[test]
    fn test_sum_of_worked_times() {
        let total: WorkedTime = [3600, 1800, 30]
            .into_iter()
            .map(WorkedTime::from_seconds)
            .sum();
        assert_eq!(total.seconds(), 5430);
        assert_eq!(total.to_string(), "01:30:30");
    }

    #[test]
    fn test_decimal_hours_rounded() {
        // 20 minutes = 0.333.. hours
        assert_eq!(WorkedTime::from_seconds(1200).hours(), Decimal::new(33, 2));
    }

    #[test]
    fn test_summary_carries_formatted_total() {
        let summary = WorkedTimeSummary::new(WorkedTime::from_seconds(30_600), 1, vec![]);
        assert_eq!(summary.formatted, "08:30:00");
        assert_eq!(summary.hours, Decimal::new(850, 2));
    }

    #[test]
    fn test_worked_time_serializes_as_seconds() {
        let json = serde_json::to_string(&WorkedTime::from_seconds(90)).unwrap();
        assert_eq!(json, "90");
    }
}
