//! Kernel release from `uname(2)`.

use std::fmt;
use std::io;

use tracing::debug;

use crate::collector::error::CollectError;
use crate::collector::traits::SystemQuery;

/// Kernel release identifier, e.g. `6.8.0-45-generic`. Treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo(String);

impl VersionInfo {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads the kernel release with a single `uname(2)` call.
pub fn read_version<Q: SystemQuery>(query: &Q) -> Result<VersionInfo, CollectError> {
    let release = query
        .kernel_release()
        .map_err(|source| CollectError::QueryFailed {
            call: "uname",
            source,
        })?;

    if release.is_empty() {
        return Err(CollectError::QueryFailed {
            call: "uname",
            source: io::Error::new(io::ErrorKind::InvalidData, "empty release string"),
        });
    }

    debug!(release = %release, "read kernel release");
    Ok(VersionInfo(release))
}
