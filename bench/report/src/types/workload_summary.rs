use crate::utils::round_float;
use serde::{Deserialize, Serialize};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Aggregated measurements of a single workload after a run.
///
/// Durations are kept in nanoseconds; millisecond accessors are provided for
/// presentation. A summary with `count == 0` carries sentinel zeros and must
/// not be read as real data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WorkloadSummary {
    pub name: String,
    pub count: u64,
    pub min_ns: u64,
    pub max_ns: u64,
    #[serde(serialize_with = "round_float")]
    pub mean_ns: f64,
    #[serde(serialize_with = "round_float")]
    pub median_ns: f64,
    #[serde(serialize_with = "round_float")]
    pub p90_ns: f64,
    #[serde(serialize_with = "round_float")]
    pub p99_ns: f64,
    #[serde(serialize_with = "round_float")]
    pub std_dev_ns: f64,
    #[serde(serialize_with = "round_float")]
    pub throughput_gbps: f64,
    pub tracked_bytes: u64,
    pub failure_count: u64,
}

impl WorkloadSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn success_count(&self) -> u64 {
        self.count.saturating_sub(self.failure_count)
    }

    pub fn min_ms(&self) -> f64 {
        self.min_ns as f64 / NANOS_PER_MILLI
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ns as f64 / NANOS_PER_MILLI
    }

    pub fn mean_ms(&self) -> f64 {
        self.mean_ns / NANOS_PER_MILLI
    }

    pub fn median_ms(&self) -> f64 {
        self.median_ns / NANOS_PER_MILLI
    }

    pub fn p99_ms(&self) -> f64 {
        self.p99_ns / NANOS_PER_MILLI
    }

    /// How many times slower this workload's mean is compared to `baseline`.
    pub fn mean_ratio_to(&self, baseline: &WorkloadSummary) -> Option<f64> {
        if self.is_empty() || baseline.is_empty() || baseline.mean_ns <= 0.0 {
            return None;
        }
        Some(self.mean_ns / baseline.mean_ns)
    }
}
