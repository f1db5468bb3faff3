//! Mock filesystem and syscall implementations for testing.
//!
//! This module provides `MockFs`, `MockQuery` and pre-built scenarios for
//! testing readers without requiring actual Linux `/proc` access.

mod filesystem;
mod query;
mod scenarios;

pub use filesystem::MockFs;
pub use query::MockQuery;
