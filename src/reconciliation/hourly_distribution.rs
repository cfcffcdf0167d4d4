//! Hour-of-day distribution of worked time.
//!
//! Each shift is resolved like everywhere else, cut into same-day pieces and
//! spread over the hours it overlaps. Buckets are keyed by hour of day only,
//! so time worked at 09:00 on different dates lands in the same bucket.

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::config::MidnightPolicy;
use crate::models::{HourlyBucketMap, HourlyDistribution, ShiftRecord, SkipDiagnostic, SkipReason};

use super::time_resolver::{next_midnight, resolve_interval};

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Distributes the worked time of every shift over hour-of-day buckets.
///
/// For a shift within one day, the first hour receives the minutes from the
/// start to the end of that hour, the last hour receives the minutes past the
/// full hour at the end, and every hour in between receives 60. A shift that
/// starts and ends within the same hour receives its actual length, so a
/// zero-length shift leaves the buckets untouched.
///
/// Shifts that run past midnight follow `policy`: [`MidnightPolicy::Split`]
/// distributes the part before and after each midnight separately,
/// [`MidnightPolicy::Exclude`] skips the shift with
/// [`SkipReason::CrossesMidnight`].
///
/// # Example
///
/// ```
/// use punchclock_reconcile::config::MidnightPolicy;
/// use punchclock_reconcile::models::ShiftRecord;
/// use punchclock_reconcile::reconciliation::distribute_by_hour;
///
/// let shift = ShiftRecord {
///     shift_id: 1,
///     employee_id: 7,
///     department_id: 3,
///     punch_start: Some("2024-01-01T09:15".to_string()),
///     punch_end: Some("2024-01-01T11:45".to_string()),
///     scheduled_start: None,
///     scheduled_end: None,
///     is_approved: true,
/// };
///
/// let distribution = distribute_by_hour(&[shift], MidnightPolicy::Split);
/// assert_eq!(distribution.buckets.minutes(9), 45);
/// assert_eq!(distribution.buckets.minutes(10), 60);
/// assert_eq!(distribution.buckets.minutes(11), 45);
/// ```
pub fn distribute_by_hour(shifts: &[ShiftRecord], policy: MidnightPolicy) -> HourlyDistribution {
    let mut buckets = HourlyBucketMap::default();
    let mut distributed_shifts = 0;
    let mut skipped = Vec::new();

    for shift in shifts {
        let interval = match resolve_interval(shift) {
            Ok(interval) => interval,
            Err(reason) => {
                skipped.push(SkipDiagnostic::new(shift.shift_id, reason));
                continue;
            }
        };

        if policy == MidnightPolicy::Exclude && interval.crosses_midnight() {
            let reason = SkipReason::CrossesMidnight {
                start: interval.effective_start,
                end: interval.effective_end,
            };
            debug!(shift_id = shift.shift_id, %reason, "Excluding shift from hourly distribution");
            skipped.push(SkipDiagnostic::new(shift.shift_id, reason));
            continue;
        }

        for (start, end) in split_at_midnight(interval.effective_start, interval.effective_end) {
            distribute_piece(&mut buckets, start, end);
        }
        distributed_shifts += 1;
    }

    debug!(
        distributed_shifts,
        skipped = skipped.len(),
        total_minutes = buckets.total_minutes(),
        %policy,
        "Hourly distribution complete"
    );

    HourlyDistribution {
        buckets,
        distributed_shifts,
        skipped,
    }
}

/// Cuts an interval into pieces that each stay within one calendar day.
///
/// A piece may end exactly at the following midnight. A zero-length interval
/// yields no pieces.
fn split_at_midnight(start: NaiveDateTime, end: NaiveDateTime) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut pieces = Vec::new();
    let mut current = start;

    while current < end {
        let piece_end = next_midnight(current).min(end);
        pieces.push((current, piece_end));
        current = piece_end;
    }

    pieces
}

/// Adds one same-day piece to the buckets, giving each hour the minutes the
/// piece overlaps it.
fn distribute_piece(buckets: &mut HourlyBucketMap, start: NaiveDateTime, end: NaiveDateTime) {
    let start_minute = minute_of_day(start);
    let end_minute = if end.date() > start.date() {
        MINUTES_PER_DAY
    } else {
        minute_of_day(end)
    };

    for hour in start.hour()..24 {
        let hour_start = hour * MINUTES_PER_HOUR;
        if hour_start >= end_minute {
            break;
        }
        let hour_end = hour_start + MINUTES_PER_HOUR;
        let overlap = end_minute.min(hour_end) - start_minute.max(hour_start);
        buckets.add(hour, overlap);
    }
}

fn minute_of_day(datetime: NaiveDateTime) -> u32 {
    datetime.hour() * MINUTES_PER_HOUR + datetime.minute()
}
