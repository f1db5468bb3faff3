//! Reader for `/proc/stat` counters and the `/proc` directory listing.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::collector::error::CollectError;
use crate::collector::procfs::parser::{
    CTXT_LABEL, CpuTimes, KernelCounters, KernelStat, PROCESSES_LABEL, ParseError, find_counter,
    parse_cpu_times, parse_kernel_stat,
};
use crate::collector::traits::FileSystem;

/// Reads cumulative kernel counters from `<proc_path>/stat`.
///
/// Every operation opens, reads and releases the source on its own, so calls
/// are independent of each other.
pub struct ProcfsReader<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcfsReader<F> {
    /// Creates a new reader.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Path of the kernel-counter source.
    pub fn stat_path(&self) -> PathBuf {
        Path::new(&self.proc_path).join("stat")
    }

    fn read_stat(&self) -> Result<(PathBuf, String), CollectError> {
        let path = self.stat_path();
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| CollectError::SourceUnavailable {
                path: path.clone(),
                source,
            })?;
        trace!(path = %path.display(), bytes = content.len(), "read kernel stat source");
        Ok((path, content))
    }

    /// Reads the aggregate CPU time line.
    pub fn read_cpu_times(&self) -> Result<CpuTimes, CollectError> {
        let (path, content) = self.read_stat()?;
        let cpu = parse_cpu_times(&content).map_err(|e| malformed(&path, e))?;
        debug!(?cpu, "parsed aggregate cpu times");
        Ok(cpu)
    }

    /// Reads the number of context switches since boot (`ctxt`).
    pub fn read_context_switches(&self) -> Result<u64, CollectError> {
        self.read_counter(CTXT_LABEL)
    }

    /// Reads the number of processes created since boot (`processes`).
    pub fn read_processes_created(&self) -> Result<u64, CollectError> {
        self.read_counter(PROCESSES_LABEL)
    }

    fn read_counter(&self, label: &'static str) -> Result<u64, CollectError> {
        let (path, content) = self.read_stat()?;
        let found = find_counter(&content, label).map_err(|e| malformed(&path, e))?;
        let value = found.ok_or(CollectError::CounterNotFound { label, path })?;
        debug!(label, value, "parsed kernel counter");
        Ok(value)
    }

    /// Reads CPU times and both counters with a single read of the source.
    ///
    /// Produces the same values as the three individual reads.
    pub fn read_kernel_stat(&self) -> Result<KernelStat, CollectError> {
        let (path, content) = self.read_stat()?;
        let (cpu, ctxt, processes) =
            parse_kernel_stat(&content).map_err(|e| malformed(&path, e))?;

        let context_switches = ctxt.ok_or_else(|| CollectError::CounterNotFound {
            label: CTXT_LABEL,
            path: path.clone(),
        })?;
        let processes_created = processes.ok_or(CollectError::CounterNotFound {
            label: PROCESSES_LABEL,
            path,
        })?;

        debug!(?cpu, context_switches, processes_created, "parsed kernel stat");
        Ok(KernelStat {
            cpu,
            counters: KernelCounters {
                context_switches,
                processes_created,
            },
        })
    }

    /// Lists entry names directly under the proc directory, sorted.
    pub fn list_entries(&self) -> Result<Vec<String>, CollectError> {
        let dir = PathBuf::from(&self.proc_path);
        let entries = self
            .fs
            .read_dir(&dir)
            .map_err(|source| CollectError::SourceUnavailable {
                path: dir.clone(),
                source,
            })?;

        let mut names: Vec<String> = entries
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();

        for name in &names {
            trace!(entry = %name, "received proc entry");
        }
        debug!(dir = %dir.display(), count = names.len(), "listed proc directory");
        Ok(names)
    }
}

fn malformed(path: &Path, err: ParseError) -> CollectError {
    CollectError::MalformedRecord {
        path: path.to_path_buf(),
        reason: err.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    fn reader_with_stat(stat: &str) -> ProcfsReader<MockFs> {
        let mut fs = MockFs::new();
        fs.add_file("/proc/stat", stat);
        ProcfsReader::new(fs, "/proc")
    }

    #[test]
    fn test_read_cpu_times() {
        let reader = reader_with_stat("cpu  10 20 30 40 50 60 70\nctxt 1\nprocesses 2\n");
        let cpu = reader.read_cpu_times().unwrap();
        assert_eq!(cpu.user, 10);
        assert_eq!(cpu.nice, 20);
        assert_eq!(cpu.system, 30);
        assert_eq!(cpu.idle, 40);
        assert_eq!(cpu.iowait, 50);
        assert_eq!(cpu.irq, 60);
        assert_eq!(cpu.softirq, 70);
    }

    #[test]
    fn test_read_cpu_times_malformed() {
        let reader = reader_with_stat("cpu  10 20 30\n");
        let err = reader.read_cpu_times().unwrap_err();
        match err {
            CollectError::MalformedRecord { path, reason } => {
                assert_eq!(path, PathBuf::from("/proc/stat"));
                assert!(reason.contains("got 3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_counters() {
        let reader = reader_with_stat("cpu  1 2 3 4 5 6 7\nctxt 123456\nprocesses 42\n");
        assert_eq!(reader.read_context_switches().unwrap(), 123456);
        assert_eq!(reader.read_processes_created().unwrap(), 42);
    }

    #[test]
    fn test_read_counter_not_found() {
        let reader = reader_with_stat("cpu  1 2 3 4 5 6 7\nprocesses_extra 99\n");
        assert!(matches!(
            reader.read_processes_created(),
            Err(CollectError::CounterNotFound { label: "processes", .. })
        ));
        assert!(matches!(
            reader.read_context_switches(),
            Err(CollectError::CounterNotFound { label: "ctxt", .. })
        ));
    }

    #[test]
    fn test_read_counter_genuine_zero() {
        let reader = reader_with_stat("cpu  1 2 3 4 5 6 7\nctxt 0\nprocesses 0\n");
        assert_eq!(reader.read_context_switches().unwrap(), 0);
        assert_eq!(reader.read_processes_created().unwrap(), 0);
    }

    #[test]
    fn test_missing_source_fails_every_read() {
        let reader = ProcfsReader::new(MockFs::new(), "/proc");
        assert!(matches!(
            reader.read_cpu_times(),
            Err(CollectError::SourceUnavailable { .. })
        ));
        assert!(matches!(
            reader.read_context_switches(),
            Err(CollectError::SourceUnavailable { .. })
        ));
        assert!(matches!(
            reader.read_processes_created(),
            Err(CollectError::SourceUnavailable { .. })
        ));
        assert!(matches!(
            reader.read_kernel_stat(),
            Err(CollectError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_read_counter_malformed_value() {
        let reader = reader_with_stat("cpu  1 2 3 4 5 6 7\nctxt\nprocesses x\n");
        assert!(matches!(
            reader.read_context_switches(),
            Err(CollectError::MalformedRecord { .. })
        ));
        assert!(matches!(
            reader.read_processes_created(),
            Err(CollectError::MalformedRecord { .. })
        ));
        assert!(matches!(
            reader.read_kernel_stat(),
            Err(CollectError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_each_read_reopens_source() {
        let mut reader = reader_with_stat("cpu  1 2 3 4 5 6 7\nctxt 10\nprocesses 20\n");
        assert_eq!(reader.read_context_switches().unwrap(), 10);

        reader.fs.add_file("/proc/stat", "cpu  1 2 3 4 5 6 7\nctxt 11\nprocesses 21\n");
        assert_eq!(reader.read_context_switches().unwrap(), 11);
        assert_eq!(reader.read_processes_created().unwrap(), 21);

        reader.fs.remove_file("/proc/stat");
        assert!(matches!(
            reader.read_cpu_times(),
            Err(CollectError::SourceUnavailable { .. })
        ));
        assert!(matches!(
            reader.read_processes_created(),
            Err(CollectError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_read_kernel_stat_matches_individual_reads() {
        let reader = ProcfsReader::new(MockFs::typical_system(), "/proc");
        let stat = reader.read_kernel_stat().unwrap();
        assert_eq!(stat.cpu, reader.read_cpu_times().unwrap());
        assert_eq!(
            stat.counters.context_switches,
            reader.read_context_switches().unwrap()
        );
        assert_eq!(
            stat.counters.processes_created,
            reader.read_processes_created().unwrap()
        );
    }

    #[test]
    fn test_read_kernel_stat_missing_counter() {
        let reader = reader_with_stat("cpu  1 2 3 4 5 6 7\nprocesses 5\n");
        assert!(matches!(
            reader.read_kernel_stat(),
            Err(CollectError::CounterNotFound { label: "ctxt", .. })
        ));
    }

    #[test]
    fn test_custom_proc_path() {
        let mut fs = MockFs::new();
        fs.add_file("/tmp/fakeproc/stat", "cpu  1 2 3 4 5 6 7\nctxt 77\n");
        let reader = ProcfsReader::new(fs, "/tmp/fakeproc");
        assert_eq!(reader.stat_path(), PathBuf::from("/tmp/fakeproc/stat"));
        assert_eq!(reader.read_context_switches().unwrap(), 77);
    }

    #[test]
    fn test_list_entries_sorted() {
        let reader = ProcfsReader::new(MockFs::typical_system(), "/proc");
        let entries = reader.list_entries().unwrap();
        assert_eq!(entries, vec!["1", "1234", "meminfo", "stat", "uptime"]);
    }

    #[test]
    fn test_list_entries_missing_dir() {
        let reader = ProcfsReader::new(MockFs::new(), "/proc");
        assert!(matches!(
            reader.list_entries(),
            Err(CollectError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_real_fs_reader() {
        use crate::collector::traits::RealFs;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stat"),
            "cpu  10 20 30 40 50 60 70 0 0 0\nctxt 5\nprocesses 6\n",
        )
        .unwrap();

        let reader = ProcfsReader::new(RealFs::new(), dir.path().to_string_lossy());
        let stat = reader.read_kernel_stat().unwrap();
        assert_eq!(stat.cpu.iowait, 50);
        assert_eq!(stat.counters.context_switches, 5);
        assert_eq!(stat.counters.processes_created, 6);
        assert_eq!(reader.list_entries().unwrap(), vec!["stat"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_live_proc_stat() {
        use crate::collector::traits::RealFs;

        let reader = ProcfsReader::new(RealFs::new(), "/proc");
        let stat = reader.read_kernel_stat().unwrap();
        assert!(stat.cpu.total() > 0);
        assert!(stat.counters.processes_created > 0);
    }
}
