use std::error::Error;
use std::io;

use clap::Parser;
use mc_pi::monte_carlo::participant_rng;
use mc_pi::{run_sequential, run_threads, COORDINATOR_RANK, DEFAULT_TOTAL_BUDGET};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Estimate π by Monte Carlo sampling split across worker threads
#[derive(Parser, Debug)]
#[command(name = "mc_pi")]
struct Args {
    /// Points to sample across all workers
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_BUDGET, value_parser = clap::value_parser!(u64).range(1..))]
    total: u64,

    /// Number of participants, 1 runs sequentially
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    workers: u64,

    /// Master seed for reproducible runs, OS entropy otherwise
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let workers = usize::try_from(args.workers)?;

    let report = if workers == 1 {
        info!(total = args.total, "running sequentially");
        run_sequential(args.total, &mut participant_rng(args.seed, COORDINATOR_RANK))?
    } else {
        info!(total = args.total, workers, "running on worker threads");
        run_threads(args.total, workers, args.seed)?
    };

    report.emit(&mut io::stdout().lock())?;
    Ok(())
}
