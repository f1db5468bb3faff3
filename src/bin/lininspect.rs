//! lininspect - point-in-time Linux telemetry.
//!
//! Prints the kernel release, aggregate CPU times, context switches and
//! processes created since boot, and memory usage.
//!
//! Usage:
//!   lininspect               # report
//!   lininspect -s            # include swap in memory figures
//!   lininspect -v            # verbose report, debug logging
//!   lininspect --list-proc   # also list /proc entries

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use lininspect::collector::{Collector, LibcQuery, RealFs};
use lininspect::config::{DEFAULT_PROC_PATH, InspectConfig};

/// Point-in-time Linux telemetry.
#[derive(Parser, Debug)]
#[command(name = "lininspect", about = "Point-in-time Linux telemetry", version)]
struct Args {
    /// Print intermediate values. -v also enables debug logging, -vv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,

    /// Include swap space in the memory figures.
    #[arg(short, long)]
    swap: bool,

    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = DEFAULT_PROC_PATH)]
    proc_path: String,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Also list the entries of the proc directory.
    #[arg(long)]
    list_proc: bool,
}

impl Args {
    fn to_config(&self) -> InspectConfig {
        InspectConfig {
            verbose: self.verbose > 0,
            include_swap: self.swap,
            color: !self.no_color,
            list_proc: self.list_proc,
            proc_path: self.proc_path.clone(),
        }
    }
}

/// Initializes the tracing subscriber on stderr.
/// Default level is WARN so the report stays the only thing on a clean run.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    match format!("lininspect={}", level).parse::<Directive>() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("invalid log directive: {e}"),
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if !cfg!(target_os = "linux") {
        error!("platform not supported, lininspect requires a Linux kernel");
        eprintln!("Platform not supported. Please use a Linux based OS to run this.");
        return ExitCode::FAILURE;
    }

    let config = args.to_config();
    debug!("lininspect {} starting", env!("CARGO_PKG_VERSION"));
    debug!(
        "Config: proc={}, swap={}, verbose={}",
        config.proc_path, config.include_swap, config.verbose
    );

    let collector = Collector::new(RealFs::new(), LibcQuery::new(), config);
    let report = collector.collect_report();
    print!("{report}");

    if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        error!("one or more telemetry items could not be collected");
        ExitCode::FAILURE
    }
}
