use crate::hardware::HostHardware;
use crate::params::RunParams;
use crate::workload_summary::WorkloadSummary;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const REPORT_FILE_NAME: &str = "report.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ComparisonReport {
    /// Run unique identifier
    pub uuid: Uuid,

    /// Timestamp when the run was finished
    pub timestamp: String,

    /// Machine the run was measured on
    pub hardware: HostHardware,

    /// Run parameters
    pub params: RunParams,

    /// Per-workload summaries, ordered best first by `params.metric`
    pub summaries: Vec<WorkloadSummary>,
}

impl ComparisonReport {
    /// Best ranked workload, if it recorded any samples.
    pub fn fastest(&self) -> Option<&WorkloadSummary> {
        self.summaries.first().filter(|s| !s.is_empty())
    }

    pub fn summary(&self, name: &str) -> Option<&WorkloadSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }

    pub fn total_failures(&self) -> u64 {
        self.summaries.iter().map(|s| s.failure_count).sum()
    }

    pub fn dump_to_json(&self, output_dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(REPORT_FILE_NAME);
        let report_json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }
}
