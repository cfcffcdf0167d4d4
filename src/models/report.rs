//! Reconciliation report.
//!
//! The [`ReconciliationReport`] bundles the three aggregations produced for a
//! single fetched shift set, together with identifying metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HourlyDistribution, MissedPunchoutReport, WorkedTimeSummary};

/// The complete result of reconciling a shift set.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::models::{
///     HourlyDistribution, MissedPunchoutReport, ReconciliationReport, WorkedTime,
///     WorkedTimeSummary,
/// };
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = ReconciliationReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     department_id: None,
///     shift_count: 0,
///     worked_time: WorkedTimeSummary::new(WorkedTime::default(), 0, vec![]),
///     missed_punchouts: MissedPunchoutReport::default(),
///     hourly: HourlyDistribution::default(),
/// };
/// assert_eq!(report.worked_time.formatted, "00:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// Department the shifts were restricted to, if any.
    pub department_id: Option<i64>,
    /// Number of shifts that went into the aggregations (after filtering).
    pub shift_count: usize,
    /// Total worked time.
    pub worked_time: WorkedTimeSummary,
    /// Missed clock-outs per employee.
    pub missed_punchouts: MissedPunchoutReport,
    /// Hour-of-day distribution.
    pub hourly: HourlyDistribution,
}
