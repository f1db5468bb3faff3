//! Collector that runs every reader once and assembles a `Report`.

use chrono::Utc;
use tracing::{debug, warn};

use crate::collector::error::CollectError;
use crate::collector::procfs::ProcfsReader;
use crate::collector::system::{read_memory_stats, read_version};
use crate::collector::traits::{FileSystem, SystemQuery};
use crate::config::InspectConfig;
use crate::report::Report;

/// Runs the version, kernel-stat and memory readers.
///
/// The readers share no state; each one acquires and releases its own
/// resource, and a failure in one never prevents the others from running.
pub struct Collector<F: FileSystem, Q: SystemQuery> {
    procfs: ProcfsReader<F>,
    query: Q,
    config: InspectConfig,
}

impl<F: FileSystem, Q: SystemQuery> Collector<F, Q> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `query` - System call implementation (real or mock)
    /// * `config` - Run configuration; `proc_path` selects the proc root
    pub fn new(fs: F, query: Q, config: InspectConfig) -> Self {
        Self {
            procfs: ProcfsReader::new(fs, config.proc_path.clone()),
            query,
            config,
        }
    }

    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Collects every telemetry item into a report.
    pub fn collect_report(&self) -> Report {
        let collected_at = Utc::now();

        let version = logged("kernel release", read_version(&self.query));
        let cpu = logged("cpu times", self.procfs.read_cpu_times());
        let context_switches = logged("context switches", self.procfs.read_context_switches());
        let processes_created =
            logged("processes created", self.procfs.read_processes_created());
        let memory = logged("memory stats", read_memory_stats(&self.query));

        let proc_entries = if self.config.list_proc {
            Some(logged("proc listing", self.procfs.list_entries()))
        } else {
            None
        };

        let report = Report {
            collected_at,
            version,
            cpu,
            context_switches,
            processes_created,
            memory,
            proc_entries,
            include_swap: self.config.include_swap,
            verbose: self.config.verbose,
            color: self.config.color,
        };
        debug!(complete = report.is_complete(), "report assembled");
        report
    }
}

fn logged<T>(item: &str, result: Result<T, CollectError>) -> Result<T, CollectError> {
    if let Err(e) = &result {
        warn!(item, kind = e.kind(), "{}", e);
    }
    result
}
