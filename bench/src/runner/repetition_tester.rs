use super::config::RunConfiguration;
use super::workload::{Workload, WorkloadRecord};
use crate::error::RepTestError;
use crate::measurement::scope::MeasurementScope;
use crate::utils::clock::{Clock, TrialDuration};
use crate::utils::stopping_criterion::StoppingCriterion;
use reptest_report::workload_summary::WorkloadSummary;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tracing::{info, warn};

const PROGRESS_INTERVAL: TrialDuration = TrialDuration::from_nanos(1_000_000_000);

/// Runs every registered workload through repeated trials and compares them.
///
/// Workloads run strictly one after another on the calling thread, and the
/// trials of a workload run strictly sequentially.
#[derive(Debug, Default)]
pub struct RepetitionTester {
    config: RunConfiguration,
    workloads: Vec<WorkloadRecord>,
}

impl RepetitionTester {
    /// Validates the configuration and checks the clock, so both kinds of
    /// setup error surface before any workload is registered.
    pub fn new(config: RunConfiguration) -> Result<Self, RepTestError> {
        Self::with_clock_check(config, Clock::verify)
    }

    fn with_clock_check(
        config: RunConfiguration,
        verify_clock: impl FnOnce() -> Result<(), RepTestError>,
    ) -> Result<Self, RepTestError> {
        config.validate()?;
        verify_clock()?;
        Ok(Self {
            config,
            workloads: Vec::new(),
        })
    }

    pub fn configuration(&self) -> &RunConfiguration {
        &self.config
    }

    pub fn configure(&mut self, config: RunConfiguration) -> Result<(), RepTestError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Registers a workload under a unique name. Registration order is kept
    /// for reporting ties but does not influence measurement.
    pub fn register_workload<W>(
        &mut self,
        name: impl Into<String>,
        workload: W,
    ) -> Result<(), RepTestError>
    where
        W: Workload + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RepTestError::InvalidWorkloadName);
        }
        if self.workloads.iter().any(|w| w.name() == name) {
            warn!("Workload: {name} is already registered, rejecting the duplicate.");
            return Err(RepTestError::DuplicateWorkload(name));
        }

        self.workloads.push(WorkloadRecord::new(name, Box::new(workload)));
        Ok(())
    }

    pub fn workload(&self, name: &str) -> Option<&WorkloadRecord> {
        self.workloads.iter().find(|w| w.name() == name)
    }

    pub fn workloads(&self) -> &[WorkloadRecord] {
        &self.workloads
    }

    pub fn workload_names(&self) -> Vec<&str> {
        self.workloads.iter().map(|w| w.name()).collect()
    }

    /// Measures every workload in registration order and returns the
    /// comparison ranked by the configured metric.
    ///
    /// The clock is checked again here, since a tester built through
    /// `Default` skips the check in [`RepetitionTester::new`].
    ///
    /// Blocks for at least the sum of all per-workload time budgets.
    pub fn run_all(&mut self) -> Result<Vec<WorkloadSummary>, RepTestError> {
        Clock::verify()?;

        if self.workloads.is_empty() {
            warn!("No workloads registered, nothing to measure.");
            return Ok(Vec::new());
        }

        info!(
            "Running {} registered workloads, duration budget: {} per workload, minimum iterations: {}",
            self.workloads.len(),
            self.config.duration_budget,
            self.config.min_iterations
        );

        for record in self.workloads.iter_mut() {
            run_workload(record, &self.config);
        }

        Ok(self.comparison())
    }

    /// Summaries of the last run, ranked best first.
    pub fn comparison(&self) -> Vec<WorkloadSummary> {
        let mut summaries: Vec<WorkloadSummary> = self
            .workloads
            .iter()
            .map(|w| w.statistics().summary(w.failure_count()))
            .collect();
        self.config.metric.sort(&mut summaries);
        summaries
    }
}

fn run_workload(record: &mut WorkloadRecord, config: &RunConfiguration) {
    let criterion = StoppingCriterion::new(config.duration_budget, config.min_iterations);
    record.reset();

    if config.show_progress {
        info!("Running {}...", record.name());
    }

    let run_start = Clock::now();
    let mut iterations: u64 = 0;
    let mut next_progress = PROGRESS_INTERVAL;

    loop {
        let elapsed = Clock::now() - run_start;
        if criterion.is_satisfied(elapsed, iterations) {
            break;
        }

        if config.show_progress && elapsed >= next_progress {
            info!("{} → {}", record.name(), criterion.status(elapsed, iterations));
            next_progress = elapsed.saturating_add(PROGRESS_INTERVAL);
        }

        let (duration, bytes_processed, succeeded) = run_trial(record.workload_mut());
        if !succeeded && record.failure_count() == 0 {
            warn!("{} → trial #{} reported failure.", record.name(), iterations + 1);
        }
        record.record_trial(duration, bytes_processed, succeeded);
        iterations += 1;
    }

    let elapsed = Clock::now() - run_start;
    if config.show_progress {
        info!(
            "Finished {} in {:.2?}: {} trials, {} failed.",
            record.name(),
            Duration::from(elapsed),
            iterations,
            record.failure_count()
        );
        record.statistics().print_report();
    }
}

/// Runs one timed trial. A panicking trial counts as failed; its duration is
/// still recorded because the scope is closed while unwinding.
fn run_trial(workload: &mut dyn Workload) -> (TrialDuration, u64, bool) {
    let mut duration = TrialDuration::ZERO;
    let mut bytes_processed = 0;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let _scope = MeasurementScope::new(&mut duration);
        workload.run_trial(&mut bytes_processed)
    }));
    (duration, bytes_processed, outcome.unwrap_or(false))
}
