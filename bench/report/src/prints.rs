use colored::{Color, ColoredString, Colorize};
use human_repr::HumanCount;
use tracing::info;

use crate::{report::ComparisonReport, workload_summary::WorkloadSummary};

impl ComparisonReport {
    pub fn print_summary(&self) {
        let params = &self.params;
        println!();
        let params_print = format!(
            "Comparison of {} workloads, duration budget: {} per workload, minimum iterations: {}, ranked by: {}\n",
            self.summaries.len(),
            params.duration_budget,
            params.min_iterations,
            params.metric.label(),
        )
        .blue();

        info!("{}", params_print);

        let fastest = self.fastest();
        self.summaries.iter().enumerate().for_each(|(index, summary)| {
            info!("{}", summary.formatted_string(index + 1, fastest));
        });

        let failures = self.total_failures();
        if failures > 0 {
            info!(
                "{}",
                format!("{failures} trials reported failure across all workloads").red()
            );
        }
    }
}

impl WorkloadSummary {
    pub fn formatted_string(&self, rank: usize, baseline: Option<&WorkloadSummary>) -> ColoredString {
        if self.is_empty() {
            return format!("#{rank} {}: no measurements recorded", self.name).yellow();
        }

        let color = if self.failure_count > 0 {
            Color::Red
        } else if rank == 1 {
            Color::Green
        } else {
            Color::White
        };

        let mut line = format!(
            "#{rank} {}: {} runs, min: {:.6} ms, max: {:.6} ms, mean: {:.6} ms, \
            median: {:.6} ms, p99: {:.6} ms",
            self.name,
            self.count,
            self.min_ms(),
            self.max_ms(),
            self.mean_ms(),
            self.median_ms(),
            self.p99_ms(),
        );

        if self.tracked_bytes > 0 {
            line.push_str(&format!(
                ", throughput: {:.3} GB/s ({} per trial)",
                self.throughput_gbps,
                self.tracked_bytes.human_count_bytes()
            ));
        }

        if let Some(ratio) = baseline
            .filter(|b| b.name != self.name)
            .and_then(|b| self.mean_ratio_to(b))
        {
            line.push_str(&format!(", {ratio:.2}x slower than fastest"));
        }

        if self.failure_count > 0 {
            line.push_str(&format!(", failures: {}", self.failure_count));
        }

        line.color(color)
    }
}
