//! Human-readable telemetry report.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::collector::{CollectError, CpuTimes, MemoryStats, VersionInfo};
use crate::fmt::{format_bytes, format_ticks};

const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Result of one inspection run. Each item succeeds or fails on its own.
#[derive(Debug)]
pub struct Report {
    pub collected_at: DateTime<Utc>,
    pub version: Result<VersionInfo, CollectError>,
    pub cpu: Result<CpuTimes, CollectError>,
    pub context_switches: Result<u64, CollectError>,
    pub processes_created: Result<u64, CollectError>,
    pub memory: Result<MemoryStats, CollectError>,
    /// Present only when the listing was requested.
    pub proc_entries: Option<Result<Vec<String>, CollectError>>,
    pub include_swap: bool,
    pub verbose: bool,
    pub color: bool,
}

impl Report {
    /// Returns `true` if every requested item was collected.
    pub fn is_complete(&self) -> bool {
        self.version.is_ok()
            && self.cpu.is_ok()
            && self.context_switches.is_ok()
            && self.processes_created.is_ok()
            && self.memory.is_ok()
            && self.proc_entries.as_ref().is_none_or(|r| r.is_ok())
    }

    fn write_version(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match &self.version {
            Ok(v) => format!("Linux Version: {}", v),
            Err(e) => format!("Linux Version: unavailable ({})", e),
        };
        if self.color {
            writeln!(f, "{CYAN}{text}{RESET}")
        } else {
            writeln!(f, "{text}")
        }
    }

    fn write_cpu(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = match &self.cpu {
            Ok(cpu) => cpu,
            Err(e) => return writeln!(f, "CPU Times: unavailable ({})", e),
        };

        writeln!(f, "CPU Times ================")?;
        let mut rows = vec![("User", cpu.user), ("Kernel", cpu.system), ("Idle", cpu.idle)];
        if self.verbose {
            rows.extend([
                ("Nice", cpu.nice),
                ("IOWait", cpu.iowait),
                ("IRQ", cpu.irq),
                ("SoftIRQ", cpu.softirq),
            ]);
        }
        for (label, ticks) in rows {
            if self.verbose {
                writeln!(f, "\t{}:\t{} ({})", label, ticks, format_ticks(ticks))?;
            } else {
                writeln!(f, "\t{}:\t{}", label, ticks)?;
            }
        }
        Ok(())
    }

    fn write_counter(
        f: &mut fmt::Formatter<'_>,
        label: &str,
        value: &Result<u64, CollectError>,
    ) -> fmt::Result {
        match value {
            Ok(v) => writeln!(f, "{}: {}", label, v),
            Err(e) => writeln!(f, "{}: unavailable ({})", label, e),
        }
    }

    fn write_memory(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mem = match &self.memory {
            Ok(mem) => mem,
            Err(e) => return writeln!(f, "Memory used: unavailable ({})", e),
        };

        let used = mem.used_memory(self.include_swap);
        let total = mem.total_memory_bytes(self.include_swap);
        let suffix = if self.include_swap {
            " (including swap space)"
        } else {
            ""
        };
        writeln!(f, "Memory used: {} bytes out of {}{}", used, total, suffix)?;

        if self.verbose {
            writeln!(f, "\tMem Unit:\t{}", mem.mem_unit)?;
            writeln!(
                f,
                "\tHuman:\t\t{} of {}",
                format_bytes(used),
                format_bytes(total)
            )?;
        }
        Ok(())
    }

    fn write_proc_entries(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.proc_entries {
            None => Ok(()),
            Some(Err(e)) => writeln!(f, "Proc Entries: unavailable ({})", e),
            Some(Ok(entries)) => {
                writeln!(f, "Proc Entries ({}) ================", entries.len())?;
                for name in entries {
                    writeln!(f, "\t{}", name)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_version(f)?;
        self.write_cpu(f)?;
        Self::write_counter(f, "Context Switches", &self.context_switches)?;
        Self::write_counter(f, "Processes Since Boot", &self.processes_created)?;
        self.write_memory(f)?;
        if self.verbose {
            writeln!(f, "Collected At: {}", self.collected_at.to_rfc3339())?;
        }
        self.write_proc_entries(f)
    }
}
