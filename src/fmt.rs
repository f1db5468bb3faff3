//! Formatting helpers for the verbose report.

use std::sync::OnceLock;

/// Clock ticks per second (USER_HZ) used when the host cannot report it.
pub const DEFAULT_CLK_TCK: u64 = 100;

/// Clock ticks per second of the running host, from `sysconf(_SC_CLK_TCK)`.
pub fn clock_ticks_per_sec() -> u64 {
    static CLK_TCK: OnceLock<u64> = OnceLock::new();
    *CLK_TCK.get_or_init(query_clk_tck)
}

#[cfg(target_os = "linux")]
fn query_clk_tck() -> u64 {
    // SAFETY: sysconf only reads a configuration value.
    let hz = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if hz > 0 { hz as u64 } else { DEFAULT_CLK_TCK }
}

#[cfg(not(target_os = "linux"))]
fn query_clk_tck() -> u64 {
    DEFAULT_CLK_TCK
}

/// Format byte count as human-readable size: `"1.5 GiB"`, `"100.3 MiB"`, `"512 B"`.
pub fn format_bytes(bytes: u64) -> String {
    let f = bytes as f64;
    if bytes >= 1024 * 1024 * 1024 * 1024 {
        format!("{:.1} TiB", f / (1024.0 * 1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 * 1024 {
        format!("{:.1} GiB", f / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", f / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", f / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Format CPU ticks to human-readable time at the host's tick rate.
pub fn format_ticks(ticks: u64) -> String {
    format_ticks_at(ticks, clock_ticks_per_sec())
}

/// Format CPU ticks to human-readable time at `hz` ticks per second.
pub fn format_ticks_at(ticks: u64, hz: u64) -> String {
    if ticks == 0 {
        return "0".to_string();
    }
    let hz = hz.max(1);
    let secs = ticks / hz;
    let ms = (ticks % hz) * 1000 / hz;
    if secs >= 86400 {
        format!("{}d{}h", secs / 86400, (secs % 86400) / 3600)
    } else if secs >= 3600 {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{}s", secs, ms / 100)
    } else {
        format!("{}ms", ms)
    }
}
