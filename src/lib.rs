//! lininspect - point-in-time Linux telemetry library.
//!
//! Provides:
//! - `collector`: readers for `/proc/stat`, `sysinfo(2)` and `uname(2)`
//! - `config`: explicit run configuration
//! - `report`: human-readable report assembled from collector results
//! - `fmt`: formatting helpers (bytes, ticks)

pub mod collector;
pub mod config;
pub mod fmt;
pub mod report;
