use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepTestError {
    #[error("Workload with name: {0} is already registered")]
    DuplicateWorkload(String),
    #[error("Workload name cannot be empty")]
    InvalidWorkloadName,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Monotonic clock is unavailable, refusing to measure")]
    ClockUnavailable,
    #[error("Unknown workload: {0}")]
    UnknownWorkload(String),
    #[error("Cannot write report")]
    CannotWriteReport(#[source] io::Error),
}
