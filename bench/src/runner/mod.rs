pub mod config;
pub mod repetition_tester;
pub mod report_builder;
pub mod workload;
