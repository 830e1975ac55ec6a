use std::error::Error;
use std::io;

use clap::Parser;
use mc_pi::DEFAULT_TOTAL_BUDGET;
use mc_pi_async::run_tasks;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Estimate π by Monte Carlo sampling split across async tasks
#[derive(Parser, Debug)]
#[command(name = "mc_pi_async")]
struct Args {
    /// Points to sample across all tasks
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_BUDGET, value_parser = clap::value_parser!(u64).range(1..))]
    total: u64,

    /// Number of participating tasks
    #[arg(short = 'n', long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(1..))]
    tasks: u64,

    /// Master seed for reproducible runs, OS entropy otherwise
    #[arg(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let tasks = usize::try_from(args.tasks)?;

    info!(total = args.total, tasks, "running on async tasks");
    let report = run_tasks(args.total, tasks, args.seed).await?;

    report.emit(&mut io::stdout().lock())?;
    Ok(())
}
