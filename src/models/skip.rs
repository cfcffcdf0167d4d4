//! Skip diagnostics for shifts that cannot be used.
//!
//! A skipped shift is a recovered outcome, not a failure: batch operations
//! carry on and report every skip next to their result.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which end of a shift a timestamp belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampField {
    /// The resolved start (clock-in or scheduled start).
    Start,
    /// The resolved end (clock-out or scheduled end).
    End,
}

impl std::fmt::Display for TimestampField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampField::Start => write!(f, "start"),
            TimestampField::End => write!(f, "end"),
        }
    }
}

/// Broad classification of a skip, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipCategory {
    /// The record is missing data or carries data that cannot be parsed.
    MalformedRecord,
    /// The record parses but describes an impossible or excluded interval.
    DataAnomaly,
}

/// Why a shift was left out of an aggregation.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::{SkipCategory, SkipReason};
///
/// assert_eq!(SkipReason::NoUsableEnd.category(), SkipCategory::MalformedRecord);
/// assert_eq!(SkipReason::NoUsableEnd.to_string(), "no usable end time");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Neither a clock-in nor a scheduled start is available.
    #[error("no usable start time")]
    NoUsableStart,

    /// Neither a clock-out nor a non-empty scheduled end is available.
    #[error("no usable end time")]
    NoUsableEnd,

    /// A timestamp did not match the `yyyy-MM-ddTHH:mm` pattern.
    #[error("malformed {field} timestamp '{value}'")]
    MalformedTimestamp {
        /// Which end failed to parse.
        field: TimestampField,
        /// The raw value as received.
        value: String,
    },

    /// The resolved end lies before the resolved start.
    #[error("inverted interval: end {end} is before start {start}")]
    InvertedInterval {
        /// The resolved start.
        start: NaiveDateTime,
        /// The resolved end.
        end: NaiveDateTime,
    },

    /// The interval crosses midnight and the active policy excludes it.
    #[error("interval {start} to {end} crosses midnight")]
    CrossesMidnight {
        /// The resolved start.
        start: NaiveDateTime,
        /// The resolved end.
        end: NaiveDateTime,
    },
}

impl SkipReason {
    /// Returns the category of this skip.
    pub fn category(&self) -> SkipCategory {
        match self {
            SkipReason::NoUsableStart
            | SkipReason::NoUsableEnd
            | SkipReason::MalformedTimestamp { .. } => SkipCategory::MalformedRecord,
            SkipReason::InvertedInterval { .. } | SkipReason::CrossesMidnight { .. } => {
                SkipCategory::DataAnomaly
            }
        }
    }
}

/// A skipped shift together with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipDiagnostic {
    /// The shift that was skipped.
    pub shift_id: i64,
    /// Why it was skipped.
    pub reason: SkipReason,
}

impl SkipDiagnostic {
    /// Creates a diagnostic for the given shift.
    pub fn new(shift_id: i64, reason: SkipReason) -> Self {
        Self { shift_id, reason }
    }

    /// Returns the category of the underlying reason.
    pub fn category(&self) -> SkipCategory {
        self.reason.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_missing_and_malformed_are_malformed_records() {
        assert_eq!(
            SkipReason::NoUsableStart.category(),
            SkipCategory::MalformedRecord
        );
        let malformed = SkipReason::MalformedTimestamp {
            field: TimestampField::Start,
            value: "yesterday".to_string(),
        };
        assert_eq!(malformed.category(), SkipCategory::MalformedRecord);
    }

    #[test]
    fn test_inverted_interval_is_data_anomaly() {
        let reason = SkipReason::InvertedInterval {
            start: make_datetime("2024-01-01T17:00"),
            end: make_datetime("2024-01-01T09:00"),
        };
        assert_eq!(reason.category(), SkipCategory::DataAnomaly);
    }

    #[test]
    fn test_malformed_timestamp_display() {
        let reason = SkipReason::MalformedTimestamp {
            field: TimestampField::End,
            value: "2024-13-01T25:00".to_string(),
        };
        assert_eq!(
            reason.to_string(),
            "malformed end timestamp '2024-13-01T25:00'"
        );
    }

    #[test]
    fn test_skip_reason_serialization() {
        let diagnostic = SkipDiagnostic::new(42, SkipReason::NoUsableEnd);
        let json = serde_json::to_string(&diagnostic).unwrap();
        assert!(json.contains("\"shift_id\":42"));
        assert!(json.contains("\"kind\":\"no_usable_end\""));

        let deserialized: SkipDiagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, diagnostic);
    }
}
