pub const DEFAULT_DURATION_BUDGET: &str = "10s";
pub const DEFAULT_MIN_ITERATIONS: u64 = 100;
pub const DEFAULT_SHOW_PROGRESS: bool = true;
pub const DEFAULT_BUFFER_SIZE: &str = "1KiB";
