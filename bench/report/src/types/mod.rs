pub mod comparison_metric;
pub mod hardware;
pub mod params;
pub mod report;
pub mod workload_summary;
