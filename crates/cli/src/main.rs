mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::SimulationArgs;
use commands::run;

/// Puncsim: a punctuated-equilibrium simulator
///
/// Evolves a two-trait phenotype in a finite population under
/// regression-to-mean mutation and fitness-weighted selection, optionally
/// with periodic population bottlenecks, and prints the per-generation
/// trait means.
#[derive(Parser, Debug)]
#[command(name = "puncsim")]
#[command(author, version, about = "Simulates punctuated evolution of a two-trait phenotype", long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    simulation: SimulationArgs,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run::run_simulation(&cli.simulation)
}
