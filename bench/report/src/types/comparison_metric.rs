use crate::workload_summary::WorkloadSummary;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Metric used to rank workloads in a comparison report, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default)]
pub enum ComparisonMetric {
    #[default]
    #[display("lowest_mean")]
    #[serde(rename = "lowest_mean")]
    LowestMean,
    #[display("lowest_min")]
    #[serde(rename = "lowest_min")]
    LowestMin,
    #[display("lowest_median")]
    #[serde(rename = "lowest_median")]
    LowestMedian,
    #[display("highest_throughput")]
    #[serde(rename = "highest_throughput")]
    HighestThroughput,
}

impl ComparisonMetric {
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMetric::LowestMean => "Lowest Mean Latency",
            ComparisonMetric::LowestMin => "Lowest Min Latency",
            ComparisonMetric::LowestMedian => "Lowest Median Latency",
            ComparisonMetric::HighestThroughput => "Highest Throughput",
        }
    }

    /// Stable sort, best first. Summaries without samples always go last.
    pub fn sort(&self, summaries: &mut [WorkloadSummary]) {
        summaries.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &WorkloadSummary, b: &WorkloadSummary) -> Ordering {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        match self {
            ComparisonMetric::LowestMean => a.mean_ns.total_cmp(&b.mean_ns),
            ComparisonMetric::LowestMin => a.min_ns.cmp(&b.min_ns),
            ComparisonMetric::LowestMedian => a.median_ns.total_cmp(&b.median_ns),
            ComparisonMetric::HighestThroughput => b.throughput_gbps.total_cmp(&a.throughput_gbps),
        }
    }
}

impl FromStr for ComparisonMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lowest_mean" | "mean" => Ok(ComparisonMetric::LowestMean),
            "lowest_min" | "min" => Ok(ComparisonMetric::LowestMin),
            "lowest_median" | "median" => Ok(ComparisonMetric::LowestMedian),
            "highest_throughput" | "throughput" => Ok(ComparisonMetric::HighestThroughput),
            _ => Err(format!(
                "Unknown comparison metric '{s}', expected one of: lowest_mean, lowest_min, lowest_median, highest_throughput"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, count: u64, min_ns: u64, mean_ns: f64, gbps: f64) -> WorkloadSummary {
        WorkloadSummary {
            name: name.to_owned(),
            count,
            min_ns,
            mean_ns,
            median_ns: mean_ns,
            throughput_gbps: gbps,
            ..Default::default()
        }
    }

    fn names(summaries: &[WorkloadSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn should_rank_by_lowest_mean() {
        let mut summaries = vec![
            summary("slow", 10, 5, 300.0, 1.0),
            summary("fast", 10, 50, 100.0, 3.0),
            summary("medium", 10, 1, 200.0, 2.0),
        ];
        ComparisonMetric::LowestMean.sort(&mut summaries);
        assert_eq!(names(&summaries), vec!["fast", "medium", "slow"]);
    }

    #[test]
    fn should_rank_by_lowest_min() {
        let mut summaries = vec![
            summary("slow", 10, 5, 300.0, 1.0),
            summary("fast", 10, 50, 100.0, 3.0),
            summary("medium", 10, 1, 200.0, 2.0),
        ];
        ComparisonMetric::LowestMin.sort(&mut summaries);
        assert_eq!(names(&summaries), vec!["medium", "slow", "fast"]);
    }

    #[test]
    fn should_rank_by_highest_throughput() {
        let mut summaries = vec![
            summary("slow", 10, 5, 300.0, 1.0),
            summary("fast", 10, 50, 100.0, 3.0),
            summary("medium", 10, 1, 200.0, 2.0),
        ];
        ComparisonMetric::HighestThroughput.sort(&mut summaries);
        assert_eq!(names(&summaries), vec!["fast", "medium", "slow"]);
    }

    #[test]
    fn should_put_empty_summaries_last() {
        let mut summaries = vec![
            summary("empty", 0, 0, 0.0, 0.0),
            summary("slow", 10, 5, 300.0, 1.0),
        ];
        ComparisonMetric::LowestMean.sort(&mut summaries);
        assert_eq!(names(&summaries), vec!["slow", "empty"]);
    }

    #[test]
    fn should_keep_registration_order_on_ties() {
        let mut summaries = vec![
            summary("first", 10, 5, 100.0, 1.0),
            summary("second", 10, 5, 100.0, 1.0),
        ];
        ComparisonMetric::LowestMedian.sort(&mut summaries);
        assert_eq!(names(&summaries), vec!["first", "second"]);
    }

    #[test]
    fn should_parse_metric_names() {
        assert_eq!(
            "highest-throughput".parse::<ComparisonMetric>(),
            Ok(ComparisonMetric::HighestThroughput)
        );
        assert_eq!("mean".parse::<ComparisonMetric>(), Ok(ComparisonMetric::LowestMean));
        assert!("fastest".parse::<ComparisonMetric>().is_err());
    }

    #[test]
    fn should_display_as_parsable_name() {
        let metric = ComparisonMetric::LowestMedian;
        assert_eq!(metric.to_string().parse::<ComparisonMetric>(), Ok(metric));
    }
}
