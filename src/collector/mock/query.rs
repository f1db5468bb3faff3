//! In-memory `SystemQuery` for tests.

use std::io;

use crate::collector::system::MemoryStats;
use crate::collector::traits::SystemQuery;

/// Canned answers for `sysinfo(2)` and `uname(2)`.
///
/// Calls without a configured answer fail with `ErrorKind::Unsupported`,
/// which is how a missing syscall is simulated.
#[derive(Debug, Clone, Default)]
pub struct MockQuery {
    memory: Option<MemoryStats>,
    release: Option<String>,
}

impl MockQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memory(mut self, stats: MemoryStats) -> Self {
        self.memory = Some(stats);
        self
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }
}

fn unsupported(call: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{} not configured in mock", call),
    )
}

impl SystemQuery for MockQuery {
    fn memory_stats(&self) -> io::Result<MemoryStats> {
        self.memory.ok_or_else(|| unsupported("sysinfo"))
    }

    fn kernel_release(&self) -> io::Result<String> {
        self.release.clone().ok_or_else(|| unsupported("uname"))
    }
}
