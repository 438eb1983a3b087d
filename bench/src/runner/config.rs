use crate::args::common::RepTestArgs;
use crate::args::defaults::{DEFAULT_DURATION_BUDGET, DEFAULT_MIN_ITERATIONS, DEFAULT_SHOW_PROGRESS};
use crate::error::RepTestError;
use crate::utils::duration::BenchDuration;
use derive_new::new;
use reptest_report::comparison_metric::ComparisonMetric;
use std::str::FromStr;
use std::time::Duration;

/// Settings applied to every workload of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RunConfiguration {
    /// Minimum wall-clock time each workload keeps running trials for.
    pub duration_budget: BenchDuration,
    /// Minimum number of trials each workload runs.
    pub min_iterations: u64,
    pub show_progress: bool,
    pub metric: ComparisonMetric,
}

impl RunConfiguration {
    pub fn validate(&self) -> Result<(), RepTestError> {
        if self.min_iterations == 0 && self.duration_budget.is_zero() {
            return Err(RepTestError::InvalidConfiguration(
                "either the duration budget or the minimum iterations must be greater than zero"
                    .to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            duration_budget: BenchDuration::from_str(DEFAULT_DURATION_BUDGET)
                .unwrap_or_else(|_| BenchDuration::new(Duration::from_secs(10))),
            min_iterations: DEFAULT_MIN_ITERATIONS,
            show_progress: DEFAULT_SHOW_PROGRESS,
            metric: ComparisonMetric::default(),
        }
    }
}

impl From<&RepTestArgs> for RunConfiguration {
    fn from(args: &RepTestArgs) -> Self {
        Self {
            duration_budget: args.duration,
            min_iterations: args.min_iterations,
            show_progress: args.show_progress,
            metric: args.metric,
        }
    }
}
