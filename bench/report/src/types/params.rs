use super::comparison_metric::ComparisonMetric;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Run configuration as recorded in the report.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, new)]
pub struct RunParams {
    pub duration_budget: String,
    pub duration_budget_secs: f64,
    pub min_iterations: u64,
    pub show_progress: bool,
    pub metric: ComparisonMetric,
    pub remark: Option<String>,
    pub bench_command: String,
}
