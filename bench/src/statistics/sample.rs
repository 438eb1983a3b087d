use crate::utils::clock::TrialDuration;
use derive_new::new;

/// Result of exactly one trial of one workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Sample {
    duration: TrialDuration,
    bytes_processed: u64,
}

impl Sample {
    pub fn duration(&self) -> TrialDuration {
        self.duration
    }

    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }
}
