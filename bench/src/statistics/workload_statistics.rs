use super::sample::Sample;
use crate::utils::clock::{Clock, TrialDuration};
use colored::{ColoredString, Colorize};
use reptest_report::workload_summary::WorkloadSummary;
use tracing::info;

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Samples collected for one named workload since the last reset.
///
/// Every getter returns `0` (or `0.0`) while no sample has been recorded.
/// These are sentinels, so check [`WorkloadStatistics::test_count`] before
/// trusting them as measurements.
///
/// Only the most recently reported byte count is tracked, not a running sum.
/// Throughput is therefore only meaningful when every trial of the workload
/// processes the same amount of data.
#[derive(Debug, Clone, Default)]
pub struct WorkloadStatistics {
    name: String,
    samples: Vec<Sample>,
    tracked_bytes: u64,
}

impl WorkloadStatistics {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Vec::new(),
            tracked_bytes: 0,
        }
    }

    pub fn add_measurement(&mut self, duration: TrialDuration, bytes_processed: u64) {
        self.samples.push(Sample::new(duration, bytes_processed));
        self.tracked_bytes = bytes_processed;
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.tracked_bytes = 0;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn tracked_bytes(&self) -> u64 {
        self.tracked_bytes
    }

    pub fn test_count(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn min(&self) -> TrialDuration {
        self.durations().min().unwrap_or(TrialDuration::ZERO)
    }

    pub fn max(&self) -> TrialDuration {
        self.durations().max().unwrap_or(TrialDuration::ZERO)
    }

    /// Arithmetic mean in nanoseconds.
    ///
    /// A `u128` sum of `u64` nanoseconds cannot overflow for any sample count
    /// a `Vec` can hold.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: u128 = self.durations().map(|d| d.as_nanos() as u128).sum();
        total as f64 / self.samples.len() as f64
    }

    /// GiB per second, derived from the mean duration and the tracked byte count.
    pub fn throughput_gbps(&self) -> f64 {
        if self.samples.is_empty() || self.tracked_bytes == 0 {
            return 0.0;
        }
        let seconds = Clock::nanos_to_seconds(self.mean());
        if seconds <= 0.0 {
            return 0.0;
        }
        (self.tracked_bytes as f64 / BYTES_PER_GIB) / seconds
    }

    /// Percentile in nanoseconds, `percentile` in `[0, 100]`. Out of range
    /// values are clamped and NaN is treated as `0`.
    pub fn percentile(&self, percentile: f64) -> f64 {
        calculate_percentile(&self.sorted_nanos(), percentile)
    }

    pub fn median(&self) -> f64 {
        self.percentile(50.0)
    }

    /// Population standard deviation in nanoseconds.
    pub fn std_dev(&self) -> f64 {
        if self.samples.len() < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .durations()
            .map(|d| {
                let diff = d.as_nanos() as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.samples.len() as f64;
        variance.sqrt()
    }

    pub fn summary(&self, failure_count: u64) -> WorkloadSummary {
        let sorted = self.sorted_nanos();
        WorkloadSummary {
            name: self.name.clone(),
            count: self.samples.len() as u64,
            min_ns: self.min().as_nanos(),
            max_ns: self.max().as_nanos(),
            mean_ns: self.mean(),
            median_ns: calculate_percentile(&sorted, 50.0),
            p90_ns: calculate_percentile(&sorted, 90.0),
            p99_ns: calculate_percentile(&sorted, 99.0),
            std_dev_ns: self.std_dev(),
            throughput_gbps: self.throughput_gbps(),
            tracked_bytes: self.tracked_bytes,
            failure_count,
        }
    }

    pub fn formatted_string(&self) -> ColoredString {
        if self.samples.is_empty() {
            return format!("{}: 0 runs, no measurements recorded", self.name).yellow();
        }

        let mut line = format!(
            "{}: {} runs, min: {:.3} ms, max: {:.3} ms, mean: {:.3} ms",
            self.name,
            self.samples.len(),
            Clock::to_milliseconds(self.min()),
            Clock::to_milliseconds(self.max()),
            Clock::nanos_to_milliseconds(self.mean()),
        );
        if self.tracked_bytes > 0 {
            line.push_str(&format!(", throughput: {:.3} GB/s", self.throughput_gbps()));
        }
        line.green()
    }

    pub fn print_report(&self) {
        info!("{}", self.formatted_string());
    }

    fn durations(&self) -> impl Iterator<Item = TrialDuration> + '_ {
        self.samples.iter().map(|s| s.duration())
    }

    fn sorted_nanos(&self) -> Vec<f64> {
        let mut nanos: Vec<u64> = self.durations().map(|d| d.as_nanos()).collect();
        nanos.sort_unstable();
        nanos.into_iter().map(|n| n as f64).collect()
    }
}

fn calculate_percentile(sorted_data: &[f64], percentile: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let percentile = if percentile.is_nan() {
        0.0
    } else {
        percentile.clamp(0.0, 100.0)
    };
    let rank = percentile / 100.0 * (sorted_data.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if upper >= sorted_data.len() {
        return sorted_data[sorted_data.len() - 1];
    }

    let weight = rank - lower as f64;
    sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
}
