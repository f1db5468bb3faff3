//! Kernel-stat parser and reader for the Linux `/proc` filesystem.
//!
//! `parser` holds pure functions over `/proc/stat` content; `reader` wires them
//! to a `FileSystem` and turns failures into `CollectError`.

pub mod parser;
pub mod reader;

pub use parser::{CpuTimes, KernelCounters, KernelStat, ParseError};
pub use reader::ProcfsReader;
