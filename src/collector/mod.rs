//! Telemetry collector for Linux.
//!
//! This module reads the kernel's cumulative counters from `/proc/stat` and
//! queries `sysinfo(2)` and `uname(2)`, with support for mocking both so tests
//! run anywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Collector                          │
//! │  ┌─────────────────────┐   ┌───────────────────────────┐  │
//! │  │    ProcfsReader     │   │  read_memory_stats        │  │
//! │  │  - /proc/stat       │   │  read_version             │  │
//! │  │  - /proc listing    │   │                           │  │
//! │  └──────────┬──────────┘   └─────────────┬─────────────┘  │
//! │      ┌──────▼──────┐              ┌──────▼──────┐         │
//! │      │  FileSystem │ (trait)      │ SystemQuery │ (trait) │
//! │      └──────┬──────┘              └──────┬──────┘         │
//! └─────────────┼────────────────────────────┼────────────────┘
//!        ┌──────┴──────┐              ┌──────┴──────┐
//!        │ RealFs      │              │ LibcQuery   │
//!        │ MockFs      │              │ MockQuery   │
//!        └─────────────┘              └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use lininspect::collector::{Collector, LibcQuery, RealFs};
//! use lininspect::config::InspectConfig;
//!
//! let collector = Collector::new(RealFs::new(), LibcQuery::new(), InspectConfig::default());
//! println!("{}", collector.collect_report());
//! ```
//!
//! ## Testing (with mocks)
//!
//! ```
//! use lininspect::collector::{Collector, MockFs, MockQuery};
//! use lininspect::config::InspectConfig;
//!
//! let collector = Collector::new(
//!     MockFs::typical_system(),
//!     MockQuery::typical_system(),
//!     InspectConfig::default(),
//! );
//! let report = collector.collect_report();
//! assert!(report.is_complete());
//! ```

#[allow(clippy::module_inception)]
mod collector;
mod error;
pub mod mock;
pub mod procfs;
pub mod system;
pub mod traits;

pub use collector::Collector;
pub use error::CollectError;
pub use mock::{MockFs, MockQuery};
pub use procfs::{CpuTimes, KernelCounters, KernelStat, ProcfsReader};
pub use system::{MemoryStats, VersionInfo, read_memory_stats, read_version};
pub use traits::{FileSystem, LibcQuery, RealFs, SystemQuery};
