//! Run configuration.

/// Default base path of the proc filesystem.
pub const DEFAULT_PROC_PATH: &str = "/proc";

/// Options for a single inspection run, passed explicitly to the collector
/// and the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    /// Print intermediate values (extra CPU fields, scaling unit, sizes).
    pub verbose: bool,
    /// Add swap to both used and total memory.
    pub include_swap: bool,
    /// Color the version line with ANSI escapes.
    pub color: bool,
    /// Also list the entries of the proc directory.
    pub list_proc: bool,
    /// Base path to proc filesystem.
    pub proc_path: String,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            include_swap: false,
            color: true,
            list_proc: false,
            proc_path: DEFAULT_PROC_PATH.to_string(),
        }
    }
}
