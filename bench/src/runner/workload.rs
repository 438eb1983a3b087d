use crate::statistics::workload_statistics::WorkloadStatistics;
use crate::utils::clock::TrialDuration;
use std::fmt::{Debug, Formatter};

/// A unit of work performing one trial per call.
///
/// Implementations write the number of bytes they processed into
/// `bytes_processed` (leave it at `0` when not byte oriented) and return
/// whether the trial succeeded. Trials must be repeatable without state
/// leaking from one trial into the next.
pub trait Workload {
    fn run_trial(&mut self, bytes_processed: &mut u64) -> bool;
}

impl<F> Workload for F
where
    F: FnMut(&mut u64) -> bool,
{
    fn run_trial(&mut self, bytes_processed: &mut u64) -> bool {
        self(bytes_processed)
    }
}

/// A registered workload together with everything measured for it.
pub struct WorkloadRecord {
    name: String,
    workload: Box<dyn Workload>,
    statistics: WorkloadStatistics,
    failure_count: u64,
}

impl WorkloadRecord {
    pub(crate) fn new(name: String, workload: Box<dyn Workload>) -> Self {
        Self {
            statistics: WorkloadStatistics::new(name.clone()),
            name,
            workload,
            failure_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statistics(&self) -> &WorkloadStatistics {
        &self.statistics
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count
    }

    pub(crate) fn workload_mut(&mut self) -> &mut dyn Workload {
        self.workload.as_mut()
    }

    pub(crate) fn reset(&mut self) {
        self.statistics.reset();
        self.failure_count = 0;
    }

    pub(crate) fn record_trial(
        &mut self,
        duration: TrialDuration,
        bytes_processed: u64,
        succeeded: bool,
    ) {
        self.statistics.add_measurement(duration, bytes_processed);
        if !succeeded {
            self.failure_count += 1;
        }
    }
}

impl Debug for WorkloadRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkloadRecord")
            .field("name", &self.name)
            .field("test_count", &self.statistics.test_count())
            .field("failure_count", &self.failure_count)
            .finish()
    }
}
