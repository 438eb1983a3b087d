use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Machine the comparison was measured on.
#[derive(Debug, Serialize, Deserialize, Clone, derive_new::new, PartialEq, Default)]
pub struct HostHardware {
    pub identifier: Option<String>,
    pub cpu_name: String,
    pub cpu_frequency_mhz: u64,
    pub cpu_cores: usize,
    pub total_memory_mb: u64,
    pub os_name: String,
    pub os_version: String,
}

impl HostHardware {
    pub fn detect(identifier: Option<String>) -> Self {
        let mut sys = System::new();
        sys.refresh_all();

        let (cpu_name, cpu_frequency_mhz) = sys
            .cpus()
            .first()
            .map(|cpu| (cpu.brand().to_string(), cpu.frequency()))
            .unwrap_or_else(|| (String::from("unknown"), 0));

        Self {
            identifier,
            cpu_name,
            cpu_frequency_mhz,
            cpu_cores: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            os_name: System::name().unwrap_or_else(|| String::from("unknown")),
            os_version: System::kernel_version().unwrap_or_else(|| String::from("unknown")),
        }
    }
}
