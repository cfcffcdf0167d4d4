//! Effective start/end resolution for a single shift.
//!
//! A punch-clock record may lack its clock-in or clock-out. This module falls
//! back to the scheduled shift times where allowed, parses the result and
//! rejects intervals that cannot be used for duration-based aggregation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{ShiftRecord, SkipReason, TimestampField, WorkedTime};

/// The `yyyy-MM-ddTHH:mm` pattern every timestamp must follow.
///
/// Timestamps carry no zone and are read as the organisation's local
/// wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A shift's usable interval.
///
/// Only constructed by [`resolve_interval`], so `effective_end` is never
/// before `effective_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInterval {
    /// The shift this interval was resolved from.
    pub shift_id: i64,
    /// Clock-in, or the scheduled start if the clock-in was missing.
    pub effective_start: NaiveDateTime,
    /// Clock-out, or the scheduled end if the clock-out was missing.
    pub effective_end: NaiveDateTime,
    /// Length of the interval in seconds.
    pub duration_seconds: u64,
}

impl ResolvedInterval {
    /// Returns the interval length as worked time.
    pub fn worked_time(&self) -> WorkedTime {
        WorkedTime::from_seconds(self.duration_seconds)
    }

    /// Returns true if the interval runs past the midnight following its start.
    ///
    /// An interval ending exactly at that midnight does not cross it.
    pub fn crosses_midnight(&self) -> bool {
        self.effective_end > next_midnight(self.effective_start)
    }
}

/// Returns the midnight that ends the calendar day of `datetime`.
pub(crate) fn next_midnight(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime
        .date()
        .succ_opt()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Parses a timestamp in [`TIMESTAMP_FORMAT`].
///
/// ```
/// use punchclock_reconcile::reconciliation::parse_timestamp;
///
/// assert!(parse_timestamp("2024-01-01T09:00").is_some());
/// assert!(parse_timestamp("2024-01-01 09:00").is_none());
/// assert!(parse_timestamp("2024-01-01T09:00:00").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// Resolves the effective interval of a shift.
///
/// # Resolution order
///
/// 1. Start is the clock-in if present and non-empty, else the scheduled start
///    if present, else the shift is skipped with [`SkipReason::NoUsableStart`].
/// 2. End is the clock-out if present, else the scheduled end if present and
///    non-empty, else the shift is skipped with [`SkipReason::NoUsableEnd`].
/// 3. Both values must parse with [`TIMESTAMP_FORMAT`], otherwise
///    [`SkipReason::MalformedTimestamp`].
/// 4. An end before the start is a data anomaly and is skipped with
///    [`SkipReason::InvertedInterval`]; it is not corrected.
/// 5. Zero-length intervals are valid.
///
/// Skips are logged at debug level with the shift id. The
/// [`Reconciler`](super::Reconciler) warns about each returned diagnostic once.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::ShiftRecord;
/// use punchclock_reconcile::reconciliation::resolve_interval;
///
/// let shift = ShiftRecord {
///     shift_id: 1,
///     employee_id: 7,
///     department_id: 3,
///     punch_start: None,
///     punch_end: Some("2024-01-01T16:00".to_string()),
///     scheduled_start: Some("2024-01-01T08:00".to_string()),
///     scheduled_end: None,
///     is_approved: true,
/// };
///
/// let interval = resolve_interval(&shift).unwrap();
/// assert_eq!(interval.duration_seconds, 8 * 3600);
/// ```
pub fn resolve_interval(shift: &ShiftRecord) -> Result<ResolvedInterval, SkipReason> {
    let result = resolve(shift);
    if let Err(reason) = &result {
        debug!(shift_id = shift.shift_id, %reason, "Shift interval not resolved");
    }
    result
}

fn resolve(shift: &ShiftRecord) -> Result<ResolvedInterval, SkipReason> {
    let start_value = shift.start_value().ok_or(SkipReason::NoUsableStart)?;
    let end_value = shift.end_value().ok_or(SkipReason::NoUsableEnd)?;

    let start = parse_field(start_value, TimestampField::Start)?;
    let end = parse_field(end_value, TimestampField::End)?;

    if end < start {
        return Err(SkipReason::InvertedInterval { start, end });
    }

    Ok(ResolvedInterval {
        shift_id: shift.shift_id,
        effective_start: start,
        effective_end: end,
        duration_seconds: (end - start).num_seconds().unsigned_abs(),
    })
}

fn parse_field(value: &str, field: TimestampField) -> Result<NaiveDateTime, SkipReason> {
    parse_timestamp(value).ok_or_else(|| SkipReason::MalformedTimestamp {
        field,
        value: value.to_string(),
    })
}

/// Logs a skipped shift. Missing data is routine; anything else is worth a warning.
///
/// Called once per diagnostic by the reconciler.
pub(crate) fn log_skip(shift_id: i64, reason: &SkipReason) {
    match reason {
        SkipReason::NoUsableStart | SkipReason::NoUsableEnd => {
            debug!(shift_id, category = ?reason.category(), %reason, "Skipping shift");
        }
        _ => {
            warn!(shift_id, category = ?reason.category(), %reason, "Skipping shift");
        }
    }
}
