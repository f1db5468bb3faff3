//! Pre-built mock scenarios for testing.
//!
//! These scenarios provide realistic `/proc` and syscall states
//! for testing various system conditions.

use super::filesystem::MockFs;
use super::query::MockQuery;
use crate::collector::system::MemoryStats;

/// `/proc/stat` of a 4-CPU host.
const TYPICAL_STAT: &str = "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
cpu2 2500 125 750 20000 250 50 25 0 0 0
cpu3 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
softirq 20000 0 5000 0 1000 0 0 3000 0 0 11000
";

impl MockFs {
    /// Creates a typical Linux host with `/proc/stat` and a couple of processes.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/stat", TYPICAL_STAT);
        fs.add_file("/proc/uptime", "12345.67 98765.43\n");
        fs.add_file(
            "/proc/meminfo",
            "MemTotal:       16384000 kB\nMemFree:         8192000 kB\n",
        );
        fs.add_file("/proc/1/comm", "systemd\n");
        fs.add_file("/proc/1234/comm", "bash\n");

        fs
    }

    /// A host whose kernel omits the `ctxt` and `processes` lines.
    pub fn missing_counters() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 10000 500 3000 80000 1000 200 100 0 0 0
processes_blocked 1
btime 1700000000
",
        );
        fs
    }

    /// A host whose aggregate CPU line is truncated.
    pub fn truncated_cpu_line() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/stat", "cpu  10000 500 3000\nctxt 500000\nprocesses 10000\n");
        fs
    }
}

impl MockQuery {
    /// 16 GiB of RAM and 4 GiB of swap, reported in 4 KiB units.
    pub fn typical_system() -> Self {
        Self::new()
            .with_release("6.8.0-45-generic")
            .with_memory(MemoryStats {
                total_ram: 4_194_304,
                free_ram: 2_097_152,
                total_swap: 1_048_576,
                free_swap: 786_432,
                mem_unit: 4096,
            })
    }
}
