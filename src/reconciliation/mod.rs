//! Reconciliation logic for punch-clock records.
//!
//! This module turns merged shift records into payroll-usable facts: interval
//! resolution with scheduled-time fallback, total worked time, missed
//! clock-outs per employee and the hour-of-day distribution of work. The
//! aggregations are independent of each other and share no state between
//! calls.

mod filters;
mod hourly_distribution;
mod missed_punchouts;
mod reconciler;
mod time_resolver;
mod worked_time;

pub use filters::{filter_approved, filter_by_department};
pub use hourly_distribution::distribute_by_hour;
pub use missed_punchouts::aggregate_missed_punchouts;
pub use reconciler::Reconciler;
pub use time_resolver::{ResolvedInterval, TIMESTAMP_FORMAT, parse_timestamp, resolve_interval};
pub use worked_time::total_worked_time;
