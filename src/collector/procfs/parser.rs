//! Parsers for `/proc/stat`.
//!
//! These are pure functions that parse the content of `/proc/stat` into
//! structured data. They are designed to be easily testable with string inputs.

/// Label of the aggregate CPU line.
pub const CPU_LABEL: &str = "cpu";
/// Label of the context-switch counter line.
pub const CTXT_LABEL: &str = "ctxt";
/// Label of the process-creation counter line.
pub const PROCESSES_LABEL: &str = "processes";

/// Number of CPU time fields read from the aggregate line.
const CPU_FIELDS: usize = 7;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Aggregate CPU time since boot, in clock ticks (USER_HZ).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
}

impl CpuTimes {
    /// Sum of all seven fields.
    pub fn total(&self) -> u64 {
        [
            self.user,
            self.nice,
            self.system,
            self.idle,
            self.iowait,
            self.irq,
            self.softirq,
        ]
        .iter()
        .fold(0u64, |acc, v| acc.saturating_add(*v))
    }
}

/// Cumulative kernel counters since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KernelCounters {
    pub context_switches: u64,
    pub processes_created: u64,
}

/// Everything read from `/proc/stat` in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KernelStat {
    pub cpu: CpuTimes,
    pub counters: KernelCounters,
}

/// Parses the aggregate CPU line, which is always the first line of `/proc/stat`.
///
/// Format: `cpu  user nice system idle iowait irq softirq [steal guest guest_nice]`.
/// Per-CPU lines that follow are never looked at.
pub fn parse_cpu_times(content: &str) -> Result<CpuTimes, ParseError> {
    let line = content
        .lines()
        .next()
        .ok_or_else(|| ParseError::new("empty stat content"))?;

    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(CPU_LABEL) => {}
        Some(other) => {
            return Err(ParseError::new(format!(
                "first line is '{}', expected aggregate '{}' line",
                other, CPU_LABEL
            )));
        }
        None => return Err(ParseError::new("first line is blank")),
    }

    let mut values = [0u64; CPU_FIELDS];
    for (idx, slot) in values.iter_mut().enumerate() {
        let token = parts.next().ok_or_else(|| {
            ParseError::new(format!(
                "not enough fields in cpu line: expected {}, got {}",
                CPU_FIELDS, idx
            ))
        })?;
        *slot = token
            .parse()
            .map_err(|_| ParseError::new(format!("invalid cpu field {}: '{}'", idx + 1, token)))?;
    }

    let [user, nice, system, idle, iowait, irq, softirq] = values;
    Ok(CpuTimes {
        user,
        nice,
        system,
        idle,
        iowait,
        irq,
        softirq,
    })
}

/// Parses the value of a labeled single-value line (`label value`).
fn parse_counter_line<'a>(
    mut parts: impl Iterator<Item = &'a str>,
    label: &str,
) -> Result<u64, ParseError> {
    let token = parts
        .next()
        .ok_or_else(|| ParseError::new(format!("missing value for '{}'", label)))?;
    token
        .parse()
        .map_err(|_| ParseError::new(format!("invalid value for '{}': '{}'", label, token)))
}

/// Finds the first line whose label token is exactly `label` and parses its value.
///
/// Returns `Ok(None)` when no line carries the label. Lines whose label merely
/// starts with `label` (e.g. `processes_blocked`) do not match.
pub fn find_counter(content: &str, label: &str) -> Result<Option<u64>, ParseError> {
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        if parts.next() == Some(label) {
            return parse_counter_line(parts, label).map(Some);
        }
    }
    Ok(None)
}

/// Parses CPU times and both counters from `/proc/stat` in one pass.
///
/// Missing counters are reported as `Ok` with `None` so the caller can tell
/// absence apart from malformed content.
pub fn parse_kernel_stat(
    content: &str,
) -> Result<(CpuTimes, Option<u64>, Option<u64>), ParseError> {
    let cpu = parse_cpu_times(content)?;
    let mut ctxt = None;
    let mut processes = None;

    for line in content.lines().skip(1) {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some(CTXT_LABEL) if ctxt.is_none() => {
                ctxt = Some(parse_counter_line(parts, CTXT_LABEL)?);
            }
            Some(PROCESSES_LABEL) if processes.is_none() => {
                processes = Some(parse_counter_line(parts, PROCESSES_LABEL)?);
            }
            _ => {}
        }
        if ctxt.is_some() && processes.is_some() {
            break;
        }
    }

    Ok((cpu, ctxt, processes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT: &str = "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 2500 125 750 20000 250 50 25 0 0 0
cpu1 2500 125 750 20000 250 50 25 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
";

    #[test]
    fn test_parse_cpu_times() {
        let cpu = parse_cpu_times("cpu  10 20 30 40 50 60 70\n").unwrap();
        assert_eq!(
            cpu,
            CpuTimes {
                user: 10,
                nice: 20,
                system: 30,
                idle: 40,
                iowait: 50,
                irq: 60,
                softirq: 70,
            }
        );
        assert_eq!(cpu.total(), 280);
    }

    #[test]
    fn test_parse_cpu_times_ignores_extra_fields_and_cpu_lines() {
        let cpu = parse_cpu_times(STAT).unwrap();
        assert_eq!(cpu.user, 10000);
        assert_eq!(cpu.system, 3000);
        assert_eq!(cpu.idle, 80000);
        assert_eq!(cpu.softirq, 100);
    }

    #[test]
    fn test_parse_cpu_times_too_few_fields() {
        let err = parse_cpu_times("cpu  10 20 30 40 50 60\n").unwrap_err();
        assert!(err.message.contains("expected 7, got 6"), "{}", err);
    }

    #[test]
    fn test_parse_cpu_times_non_numeric_field() {
        let err = parse_cpu_times("cpu  10 20 x 40 50 60 70\n").unwrap_err();
        assert!(err.message.contains("invalid cpu field 3"), "{}", err);
    }

    #[test]
    fn test_parse_cpu_times_first_line_must_be_aggregate() {
        assert!(parse_cpu_times("cpu0 1 2 3 4 5 6 7\n").is_err());
        assert!(parse_cpu_times("ctxt 5\ncpu  1 2 3 4 5 6 7\n").is_err());
        assert!(parse_cpu_times("").is_err());
        assert!(parse_cpu_times("\ncpu  1 2 3 4 5 6 7\n").is_err());
    }

    #[test]
    fn test_find_counter() {
        assert_eq!(find_counter(STAT, CTXT_LABEL).unwrap(), Some(500000));
        assert_eq!(find_counter(STAT, PROCESSES_LABEL).unwrap(), Some(10000));
        assert_eq!(find_counter("ctxt 123456\n", CTXT_LABEL).unwrap(), Some(123456));
    }

    #[test]
    fn test_find_counter_exact_token_only() {
        let content = "cpu  1 2 3 4 5 6 7\nprocesses_extra 99\nprocs_blocked 3\n";
        assert_eq!(find_counter(content, PROCESSES_LABEL).unwrap(), None);

        let content = "cpu  1 2 3 4 5 6 7\nprocesses_extra 99\nprocesses 42\n";
        assert_eq!(find_counter(content, PROCESSES_LABEL).unwrap(), Some(42));
    }

    #[test]
    fn test_find_counter_missing_vs_zero() {
        assert_eq!(find_counter("cpu  1 2 3 4 5 6 7\n", CTXT_LABEL).unwrap(), None);
        assert_eq!(find_counter("ctxt 0\n", CTXT_LABEL).unwrap(), Some(0));
    }

    #[test]
    fn test_find_counter_bad_value() {
        assert!(find_counter("ctxt\n", CTXT_LABEL).is_err());
        assert!(find_counter("ctxt many\n", CTXT_LABEL).is_err());
    }

    #[test]
    fn test_parse_kernel_stat_single_pass() {
        let (cpu, ctxt, processes) = parse_kernel_stat(STAT).unwrap();
        assert_eq!(cpu, parse_cpu_times(STAT).unwrap());
        assert_eq!(ctxt, Some(500000));
        assert_eq!(processes, Some(10000));
    }

    #[test]
    fn test_parse_kernel_stat_missing_counter() {
        let (_, ctxt, processes) = parse_kernel_stat("cpu  1 2 3 4 5 6 7\nctxt 9\n").unwrap();
        assert_eq!(ctxt, Some(9));
        assert_eq!(processes, None);
    }
}
