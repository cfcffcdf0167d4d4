//! Hour-of-day work distribution.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SkipDiagnostic;

/// Minutes worked per hour of day (0-23), summed over every processed shift
/// regardless of calendar date.
///
/// Hours nobody worked have no entry.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::HourlyBucketMap;
///
/// let buckets = HourlyBucketMap::default();
/// assert_eq!(buckets.minutes(9), 0);
/// assert!(buckets.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourlyBucketMap {
    minutes: BTreeMap<u32, u32>,
}

impl HourlyBucketMap {
    /// Adds minutes to an hour bucket. Zero minutes leave the map untouched.
    pub fn add(&mut self, hour: u32, minutes: u32) {
        debug_assert!(hour < 24, "hour of day out of range: {hour}");
        if minutes > 0 {
            *self.minutes.entry(hour).or_insert(0) += minutes;
        }
    }

    /// Returns the minutes accumulated for an hour.
    pub fn minutes(&self, hour: u32) -> u32 {
        self.minutes.get(&hour).copied().unwrap_or(0)
    }

    /// Returns the accumulated time for an hour as decimal hours.
    pub fn hours(&self, hour: u32) -> Decimal {
        (Decimal::from(self.minutes(hour)) / Decimal::from(60)).round_dp(2)
    }

    /// Total minutes across all buckets.
    pub fn total_minutes(&self) -> u32 {
        self.minutes.values().sum()
    }

    /// Iterates over `(hour, minutes)` pairs in hour order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.minutes.iter().map(|(hour, minutes)| (*hour, *minutes))
    }

    /// Number of hours with worked time.
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    /// Returns true if no time was distributed.
    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

/// Result of distributing a shift set over hour-of-day buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyDistribution {
    /// Minutes per hour of day.
    pub buckets: HourlyBucketMap,
    /// Number of shifts that were distributed.
    pub distributed_shifts: usize,
    /// Shifts left out of the distribution.
    pub skipped: Vec<SkipDiagnostic>,
}
