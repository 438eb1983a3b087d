use chrono::Utc;
use reptest_report::{
    hardware::HostHardware, params::RunParams, report::ComparisonReport,
    workload_summary::WorkloadSummary,
};

pub struct ComparisonReportBuilder;

impl ComparisonReportBuilder {
    /// Wraps ranked summaries with the metadata of the run they came from.
    /// The summaries are re-ranked by `params.metric`.
    pub fn build(
        hardware: HostHardware,
        params: RunParams,
        mut summaries: Vec<WorkloadSummary>,
    ) -> ComparisonReport {
        let uuid = uuid::Uuid::new_v4();
        let timestamp = Utc::now().to_rfc3339();

        params.metric.sort(&mut summaries);

        ComparisonReport {
            uuid,
            timestamp,
            hardware,
            params,
            summaries,
        }
    }
}
