//! oxo CLI - exhaustive adversarial search for tic-tac-toe
//!
//! This CLI provides a unified interface for:
//! - Solving a position with minimax or alpha-beta
//! - Comparing the two algorithms' search cost on one position
//! - Benchmarking them across the opening positions
//! - Playing out full games with per-move analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

// Installed here so searches run by this binary report real peak-memory
// figures; the library itself never forces an allocator on its users.
#[global_allocator]
static ALLOCATOR: oxo::TrackingAllocator = oxo::TrackingAllocator;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Exhaustive adversarial search engine for tic-tac-toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the best move for one position
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Run both algorithms on one position and compare their cost
    Compare(oxo::cli::commands::compare::CompareArgs),

    /// Benchmark both algorithms across the opening positions
    Bench(oxo::cli::commands::bench::BenchArgs),

    /// Play out a full game with per-move analysis
    Play(oxo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Compare(args) => oxo::cli::commands::compare::execute(args),
        Commands::Bench(args) => oxo::cli::commands::bench::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
    }
}
