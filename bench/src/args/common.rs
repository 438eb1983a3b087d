use super::defaults::*;
use crate::utils::duration::BenchDuration;
use byte_unit::Byte;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use reptest_report::comparison_metric::ComparisonMetric;
use reptest_report::params::RunParams;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct RepTestArgs {
    /// Minimum wall-clock time each workload keeps running trials for, e.g. 10s or 500ms
    #[arg(long, short = 'd', default_value_t = BenchDuration::from_str(DEFAULT_DURATION_BUDGET).unwrap(), value_parser = BenchDuration::from_str)]
    pub duration: BenchDuration,

    /// Minimum number of trials each workload runs, regardless of the duration budget
    #[arg(long, short = 'n', default_value_t = DEFAULT_MIN_ITERATIONS)]
    pub min_iterations: u64,

    /// Log progress while workloads are running
    #[arg(long, default_value_t = DEFAULT_SHOW_PROGRESS, action = ArgAction::Set)]
    pub show_progress: bool,

    /// Metric used to rank the workloads: lowest_mean, lowest_min, lowest_median or highest_throughput
    #[arg(long, short = 'm', default_value_t = ComparisonMetric::default(), value_parser = ComparisonMetric::from_str)]
    pub metric: ComparisonMetric,

    /// Size of the buffer processed by every trial of the built-in workloads, e.g. 1KiB or 4MiB
    #[arg(long, short = 'b', default_value = DEFAULT_BUFFER_SIZE, value_parser = parse_buffer_size)]
    pub buffer_size: u64,

    /// Comma separated names of the built-in workloads to run, all of them if not provided
    #[arg(long, short = 'w', value_delimiter = ',')]
    pub workloads: Vec<String>,

    /// Output directory path for storing the comparison report
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,

    /// Identifier for the run (defaults to hostname if not provided)
    #[arg(long, default_value_t = default_identifier())]
    pub identifier: String,

    /// Additional remark stored in the report (e.g. no-turbo)
    #[arg(long)]
    pub remark: Option<String>,
}

fn parse_buffer_size(v: &str) -> Result<u64, String> {
    Byte::parse_str(v, true)
        .map(|size| size.as_u64())
        .map_err(|e| format!("Invalid buffer size '{v}': {e}"))
}

fn default_identifier() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|_| String::from("unknown"))
}

impl RepTestArgs {
    pub fn validate(&self) {
        if self.output_dir.is_none() && self.remark.is_some() {
            RepTestArgs::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    "--remark can only be used with --output-dir",
                )
                .exit();
        }

        if self.buffer_size == 0 {
            RepTestArgs::command()
                .error(
                    ErrorKind::InvalidValue,
                    "--buffer-size must be greater than zero",
                )
                .exit();
        }

        if self.min_iterations == 0 && self.duration.is_zero() {
            RepTestArgs::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    "--duration and --min-iterations cannot both be zero",
                )
                .exit();
        }
    }

    pub fn bench_command(&self) -> String {
        std::env::args().collect::<Vec<_>>().join(" ")
    }
}

impl From<&RepTestArgs> for RunParams {
    fn from(args: &RepTestArgs) -> Self {
        RunParams {
            duration_budget: args.duration.to_string(),
            duration_budget_secs: args.duration.as_secs_f64(),
            min_iterations: args.min_iterations,
            show_progress: args.show_progress,
            metric: args.metric,
            remark: args.remark.clone(),
            bench_command: args.bench_command(),
        }
    }
}
