pub mod sample;
pub mod workload_statistics;
