//! Abstractions for filesystem and system-call access to enable testing and mocking.
//!
//! The `FileSystem` trait lets the kernel-stat reader work with both the real
//! `/proc` filesystem and in-memory fixtures. The `SystemQuery` trait does the
//! same for `sysinfo(2)` and `uname(2)`.

use std::io;
use std::path::{Path, PathBuf};

use crate::collector::system::MemoryStats;

/// Abstraction for filesystem operations.
pub trait FileSystem {
    /// Reads the entire contents of a file as a string.
    ///
    /// The file is opened and closed within the call.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Lists entries in a directory.
    ///
    /// # Returns
    /// A vector of paths to entries in the directory, or an I/O error.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }
}

/// Abstraction for the system calls the collector needs.
pub trait SystemQuery {
    /// Returns the memory record reported by `sysinfo(2)`.
    fn memory_stats(&self) -> io::Result<MemoryStats>;

    /// Returns the `release` field reported by `uname(2)`.
    fn kernel_release(&self) -> io::Result<String>;
}

/// `SystemQuery` backed by libc.
///
/// On anything other than Linux both calls fail with `ErrorKind::Unsupported`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibcQuery;

impl LibcQuery {
    /// Creates a new `LibcQuery` instance.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "linux")]
impl SystemQuery for LibcQuery {
    // Field widths follow c_ulong, so `from` is a no-op on 64-bit targets.
    #[allow(clippy::useless_conversion)]
    fn memory_stats(&self) -> io::Result<MemoryStats> {
        // SAFETY: sysinfo is plain old data and the kernel fills every field.
        let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
        // SAFETY: `info` is a valid, writable sysinfo struct for the duration of the call.
        if unsafe { libc::sysinfo(&mut info) } < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(MemoryStats {
            total_ram: u64::from(info.totalram),
            free_ram: u64::from(info.freeram),
            total_swap: u64::from(info.totalswap),
            free_swap: u64::from(info.freeswap),
            mem_unit: u64::from(info.mem_unit),
        })
    }

    fn kernel_release(&self) -> io::Result<String> {
        // SAFETY: utsname is a set of fixed-size char arrays.
        let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
        // SAFETY: `uts` is a valid, writable utsname struct for the duration of the call.
        if unsafe { libc::uname(&mut uts) } < 0 {
            return Err(io::Error::last_os_error());
        }

        // SAFETY: the kernel NUL-terminates every utsname field.
        let release = unsafe { std::ffi::CStr::from_ptr(uts.release.as_ptr()) };
        Ok(release.to_string_lossy().into_owned())
    }
}

#[cfg(not(target_os = "linux"))]
impl SystemQuery for LibcQuery {
    fn memory_stats(&self) -> io::Result<MemoryStats> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "sysinfo is only available on Linux",
        ))
    }

    fn kernel_release(&self) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "kernel release is only read on Linux",
        ))
    }
}
