//! Core data models for the reconciliation engine.
//!
//! This module contains the shift and employee records consumed by the engine
//! and the result types it produces.

mod employee;
mod hourly;
mod missed_punchout;
mod report;
mod shift;
mod skip;
mod worked_time;

pub use employee::Employee;
pub use hourly::{HourlyBucketMap, HourlyDistribution};
pub use missed_punchout::{MissedPunchoutRecord, MissedPunchoutReport};
pub use report::ReconciliationReport;
pub use shift::ShiftRecord;
pub use skip::{SkipCategory, SkipDiagnostic, SkipReason, TimestampField};
pub use worked_time::{WorkedTime, WorkedTimeSummary};
