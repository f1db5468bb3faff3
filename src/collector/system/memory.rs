//! Memory statistics from `sysinfo(2)`.

use tracing::debug;

use crate::collector::error::CollectError;
use crate::collector::traits::SystemQuery;

/// Fixed-layout memory record reported by `sysinfo(2)`.
///
/// RAM and swap figures are in units of `mem_unit` bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    pub total_ram: u64,
    pub free_ram: u64,
    pub total_swap: u64,
    pub free_swap: u64,
    /// Bytes per reported unit.
    pub mem_unit: u64,
}

impl MemoryStats {
    /// Used memory in bytes, optionally including used swap.
    pub fn used_memory(&self, include_swap: bool) -> u64 {
        let mut used = self.total_ram.saturating_sub(self.free_ram);
        if include_swap {
            used = used.saturating_add(self.total_swap.saturating_sub(self.free_swap));
        }
        used.saturating_mul(self.mem_unit)
    }

    /// Total memory in native units (not multiplied by `mem_unit`).
    ///
    /// Matches the figure printed by earlier versions of the tool. Use
    /// [`MemoryStats::total_memory_bytes`] when comparing against
    /// [`MemoryStats::used_memory`].
    pub fn total_memory(&self, include_swap: bool) -> u64 {
        if include_swap {
            self.total_ram.saturating_add(self.total_swap)
        } else {
            self.total_ram
        }
    }

    /// Total memory in bytes, optionally including swap.
    pub fn total_memory_bytes(&self, include_swap: bool) -> u64 {
        self.total_memory(include_swap).saturating_mul(self.mem_unit)
    }
}

/// Reads memory statistics with a single `sysinfo(2)` call.
pub fn read_memory_stats<Q: SystemQuery>(query: &Q) -> Result<MemoryStats, CollectError> {
    let stats = query
        .memory_stats()
        .map_err(|source| CollectError::QueryFailed {
            call: "sysinfo",
            source,
        })?;
    debug!(
        total_ram = stats.total_ram,
        free_ram = stats.free_ram,
        total_swap = stats.total_swap,
        free_swap = stats.free_swap,
        mem_unit = stats.mem_unit,
        "read memory stats"
    );
    Ok(stats)
}
