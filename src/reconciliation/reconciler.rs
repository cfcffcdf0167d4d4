//! The full reconciliation pipeline.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::config::ReconcileConfig;
use crate::error::ReconcileResult;
use crate::models::{ReconciliationReport, ShiftRecord, SkipReason};
use crate::source::{EmployeeLookup, PageSource, fetch_all};

use super::filters::{filter_approved, filter_by_department};
use super::hourly_distribution::distribute_by_hour;
use super::missed_punchouts::aggregate_missed_punchouts;
use super::time_resolver::log_skip;
use super::worked_time::total_worked_time;

/// Runs fetch, filtering and all three aggregations over one shift set.
///
/// The reconciler holds only its configuration; every call builds its own
/// state, so one instance can serve any number of independent calls.
///
/// # Example
///
/// ```
/// use punchclock_reconcile::config::ReconcileConfig;
/// use punchclock_reconcile::models::ShiftRecord;
/// use punchclock_reconcile::reconciliation::Reconciler;
/// use punchclock_reconcile::source::{EmployeeDirectory, VecPageSource};
///
/// let shift = ShiftRecord {
///     shift_id: 1,
///     employee_id: 7,
///     department_id: 3,
///     punch_start: Some("2024-01-01T09:00".to_string()),
///     punch_end: Some("2024-01-01T17:30".to_string()),
///     scheduled_start: None,
///     scheduled_end: None,
///     is_approved: true,
/// };
///
/// let reconciler = Reconciler::new(ReconcileConfig::default());
/// let source = VecPageSource::new(vec![shift], 50);
/// let report = reconciler.reconcile(&source, &EmployeeDirectory::default(), None)?;
///
/// assert_eq!(report.worked_time.formatted, "08:30:00");
/// assert!(report.missed_punchouts.is_empty());
/// # Ok::<(), punchclock_reconcile::error::ReconcileError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    /// Creates a reconciler with the given configuration.
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Fetches every shift from `source` and reconciles them.
    ///
    /// # Errors
    ///
    /// Fails if any page fetch or employee lookup fails. No partial report is
    /// produced in that case.
    pub fn reconcile<S, L>(
        &self,
        source: &S,
        lookup: &L,
        department_id: Option<i64>,
    ) -> ReconcileResult<ReconciliationReport>
    where
        S: PageSource<ShiftRecord> + ?Sized,
        L: EmployeeLookup + ?Sized,
    {
        let shifts = fetch_all(source, self.config.page_size)?;
        self.reconcile_shifts(shifts, lookup, department_id)
    }

    /// Reconciles an already merged shift list.
    ///
    /// Applies the department filter (when given) and the approval filter
    /// (when configured), then runs the missed punch-out, worked time and
    /// hourly aggregations over the same remaining shifts.
    pub fn reconcile_shifts<L>(
        &self,
        shifts: Vec<ShiftRecord>,
        lookup: &L,
        department_id: Option<i64>,
    ) -> ReconcileResult<ReconciliationReport>
    where
        L: EmployeeLookup + ?Sized,
    {
        let started = Instant::now();
        let fetched = shifts.len();

        let shifts = match department_id {
            Some(department_id) => filter_by_department(&shifts, department_id),
            None => shifts,
        };
        let shifts = if self.config.approved_only {
            filter_approved(&shifts)
        } else {
            shifts
        };

        // The only fallible step runs first so a failure leaves nothing half-built.
        let missed_punchouts = aggregate_missed_punchouts(&shifts, lookup)?;
        let worked_time = total_worked_time(&shifts);
        let hourly = distribute_by_hour(&shifts, self.config.midnight_policy);

        // Worked time sees every resolution failure; hourly adds only midnight exclusions.
        let excluded = hourly
            .skipped
            .iter()
            .filter(|d| matches!(d.reason, SkipReason::CrossesMidnight { .. }));
        for diagnostic in worked_time.skipped.iter().chain(excluded) {
            log_skip(diagnostic.shift_id, &diagnostic.reason);
        }

        info!(
            fetched,
            reconciled = shifts.len(),
            department_id = ?department_id,
            worked_time = %worked_time.formatted,
            missed_punchouts = missed_punchouts.total_missed(),
            duration_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            "Reconciliation completed"
        );

        Ok(ReconciliationReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            department_id,
            shift_count: shifts.len(),
            worked_time,
            missed_punchouts,
            hourly,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MidnightPolicy;
    use crate::error::ReconcileError;
    use crate::models::Employee;
    use crate::source::{EmployeeDirectory, Page, VecPageSource};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn make_shift(
        shift_id: i64,
        employee_id: i64,
        department_id: i64,
        start: &str,
        end: Option<&str>,
    ) -> ShiftRecord {
        ShiftRecord {
            shift_id,
            employee_id,
            department_id,
            punch_start: Some(start.to_string()),
            punch_end: end.map(str::to_string),
            scheduled_start: None,
            scheduled_end: None,
            is_approved: shift_id % 2 == 1,
        }
    }

    fn directory() -> EmployeeDirectory {
        EmployeeDirectory::from_employees(vec![Employee {
            id: 7,
            first_name: "Kari".to_string(),
            last_name: "Nordmann".to_string(),
            email: None,
        }])
    }

    fn sample_shifts() -> Vec<ShiftRecord> {
        vec![
            make_shift(1, 7, 10, "2024-01-01T09:00", Some("2024-01-01T17:30")),
            make_shift(2, 7, 10, "2024-01-02T09:00", None),
            make_shift(3, 8, 20, "2024-01-02T23:30", Some("2024-01-03T00:15")),
            make_shift(4, 8, 20, "2024-01-03T12:00", Some("2024-01-03T11:00")),
        ]
    }

    /// Counts warn-level events emitted while installed.
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(reconciler: &Reconciler) -> usize {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
        tracing::subscriber::with_default(subscriber, || {
            reconciler
                .reconcile_shifts(sample_shifts(), &directory(), None)
                .unwrap()
        });
        warnings.load(Ordering::SeqCst)
    }

    struct FailingSource;

    impl PageSource<ShiftRecord> for FailingSource {
        fn fetch_page(&self, _offset: usize) -> ReconcileResult<Page<ShiftRecord>> {
            Err(ReconcileError::transport("fetch_page", "401 Unauthorized"))
        }
    }

    #[test]
    fn test_full_pipeline() {
        let reconciler = Reconciler::default();
        let report = reconciler
            .reconcile_shifts(sample_shifts(), &directory(), None)
            .unwrap();

        assert_eq!(report.shift_count, 4);
        // 8h30 + 45m; the missing-end and inverted shifts are skipped.
        assert_eq!(report.worked_time.formatted, "09:15:00");
        assert_eq!(report.worked_time.skipped.len(), 2);
        assert_eq!(report.missed_punchouts.get(7).map(|r| r.count), Some(1));
        assert_eq!(report.hourly.buckets.minutes(23), 30);
        assert_eq!(report.hourly.buckets.minutes(0), 15);
        assert_eq!(report.hourly.buckets.minutes(9), 60);
    }

    #[test]
    fn test_department_filter_applies_to_every_aggregation() {
        let reconciler = Reconciler::default();
        let report = reconciler
            .reconcile_shifts(sample_shifts(), &directory(), Some(20))
            .unwrap();

        assert_eq!(report.department_id, Some(20));
        assert_eq!(report.shift_count, 2);
        assert_eq!(report.worked_time.formatted, "00:45:00");
        assert!(report.missed_punchouts.is_empty());
        assert_eq!(report.hourly.buckets.minutes(9), 0);
    }

    #[test]
    fn test_approved_only() {
        let reconciler = Reconciler::new(ReconcileConfig {
            approved_only: true,
            ..ReconcileConfig::default()
        });
        let report = reconciler
            .reconcile_shifts(sample_shifts(), &directory(), None)
            .unwrap();

        // Only odd shift ids are approved in the sample.
        assert_eq!(report.shift_count, 2);
        assert!(report.missed_punchouts.is_empty());
    }

    #[test]
    fn test_exclude_policy_is_honoured() {
        let reconciler = Reconciler::new(ReconcileConfig {
            midnight_policy: MidnightPolicy::Exclude,
            ..ReconcileConfig::default()
        });
        let report = reconciler
            .reconcile_shifts(sample_shifts(), &directory(), None)
            .unwrap();

        assert_eq!(report.hourly.buckets.minutes(23), 0);
        // Worked time is unaffected by the hourly policy.
        assert_eq!(report.worked_time.formatted, "09:15:00");
    }

    #[test]
    fn test_reconcile_fetches_through_pages() {
        let reconciler = Reconciler::new(ReconcileConfig {
            page_size: 2,
            ..ReconcileConfig::default()
        });
        let source = VecPageSource::new(sample_shifts(), 2);

        let report = reconciler.reconcile(&source, &directory(), None).unwrap();
        assert_eq!(report.shift_count, 4);
        assert_eq!(source.requests(), 3);
    }

    #[test]
    fn test_transport_failure_propagates() {
        let reconciler = Reconciler::default();
        let result = reconciler.reconcile(&FailingSource, &directory(), None);
        assert!(matches!(result, Err(ReconcileError::Transport { .. })));
    }

    #[test]
    fn test_anomaly_warned_once_per_reconciliation() {
        // Shift 4 is inverted and resolved by both worked time and hourly.
        assert_eq!(count_warnings(&Reconciler::default()), 1);
    }

    #[test]
    fn test_midnight_exclusion_warned_once() {
        let reconciler = Reconciler::new(ReconcileConfig {
            midnight_policy: MidnightPolicy::Exclude,
            ..ReconcileConfig::default()
        });
        // The inverted shift plus the excluded overnight shift.
        assert_eq!(count_warnings(&reconciler), 2);
    }

    #[test]
    fn test_reports_get_distinct_ids() {
        let reconciler = Reconciler::default();
        let first = reconciler
            .reconcile_shifts(sample_shifts(), &directory(), None)
            .unwrap();
        let second = reconciler
            .reconcile_shifts(sample_shifts(), &directory(), None)
            .unwrap();

        assert_ne!(first.report_id, second.report_id);
        assert_eq!(first.worked_time, second.worked_time);
        assert_eq!(first.hourly, second.hourly);
    }
}
