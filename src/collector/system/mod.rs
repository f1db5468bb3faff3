//! Readers backed by system calls rather than `/proc` files.

pub mod memory;
pub mod version;

pub use memory::{MemoryStats, read_memory_stats};
pub use version::{VersionInfo, read_version};
