pub mod args;
pub mod error;
pub mod measurement;
pub mod runner;
pub mod statistics;
pub mod utils;
pub mod workloads;

pub use error::RepTestError;
pub use measurement::scope::{measure, MeasurementScope};
pub use runner::config::RunConfiguration;
pub use runner::repetition_tester::RepetitionTester;
pub use runner::workload::{Workload, WorkloadRecord};
pub use statistics::workload_statistics::WorkloadStatistics;
pub use utils::clock::{Clock, Timestamp, TrialDuration};
