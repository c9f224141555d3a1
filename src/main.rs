use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use tracing::{debug, warn};

use parstat::{append_result, profiler, run_benchmark, Dataset, Strategy};

/// Micro-benchmark comparing parallel statistical reduction strategies
#[derive(Parser)]
#[command(name = "parstat")]
#[command(about = "Compare divide-and-conquer and thread-pool reduction strategies", long_about = None)]
#[command(group = ArgGroup::new("strategy").required(true).multiple(false))]
struct Cli {
    /// Divide-and-conquer split exponent (2^EXP partitions, 0..=5)
    #[arg(short = 'd', long = "divide", value_name = "EXP", group = "strategy")]
    divide: Option<u32>,

    /// Thread-pool worker count (1..=32)
    #[arg(short = 'p', long = "pool", value_name = "WORKERS", group = "strategy")]
    pool: Option<usize>,

    /// Results log the run appends to
    #[arg(long, value_name = "PATH", default_value = "results.csv")]
    results: PathBuf,

    /// Write a Chrome-trace profile here (requires the `profiling` feature)
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(trace) = &cli.trace {
        profiler::init(trace);
    }

    let strategy = Strategy::from_flags(cli.divide, cli.pool)?;
    let data = Dataset::default_data();
    debug!(
        strategy = strategy.name(),
        threads = strategy.worker_count(),
        elements = data.len(),
        "starting benchmark"
    );

    let result = run_benchmark(&data, strategy)?;

    println!("Strategy: {}", result.strategy);
    println!("Threads: {}", result.threads);
    println!("Mode: {}", result.metrics.mode);
    println!("Std deviation: {}", result.metrics.stddev);
    println!("Sum: {}", result.metrics.sum);
    println!("Minimum time: {} microseconds", result.min_duration.as_micros());

    // The sink is best-effort; a broken results file never voids the run.
    if let Err(e) = append_result(&cli.results, &result) {
        warn!("could not append to {}: {e}", cli.results.display());
    }

    if cli.trace.is_some() {
        profiler::shutdown();
    }

    Ok(())
}
