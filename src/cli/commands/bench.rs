//! Benchmark both algorithms across the opening positions

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::board::{Board, Player};
use crate::cli::output;
use crate::engine;
use crate::search::Algorithm;

#[derive(Args)]
pub struct BenchArgs {
    /// Export the results as JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Serialize)]
struct BenchRow {
    label: String,
    board: String,
    player: Player,
    value: i32,
    chosen: Option<usize>,
    minimax_nodes: u64,
    alphabeta_nodes: u64,
    minimax_ms: f64,
    alphabeta_ms: f64,
    minimax_peak_bytes: u64,
    alphabeta_peak_bytes: u64,
}

#[derive(Serialize)]
struct BenchExport {
    description: &'static str,
    rows: Vec<BenchRow>,
}

/// The empty board plus the nine positions after each possible X opening,
/// with the engine answering as O.
fn bench_positions() -> Result<Vec<(String, Board, Player)>> {
    let mut positions = vec![("empty board".to_string(), Board::new(), Player::X)];
    for opening in 0..9 {
        let board = Board::new().place(opening, Player::X)?;
        positions.push((format!("X opens at {opening}"), board, Player::O));
    }
    Ok(positions)
}

pub fn execute(args: BenchArgs) -> Result<()> {
    let positions = bench_positions()?;
    output::print_section("Benchmark: Minimax vs. Alpha-Beta");

    let pb = output::create_bench_progress(positions.len() as u64);
    let mut rows = Vec::with_capacity(positions.len());

    for (label, board, player) in positions {
        pb.set_message(label.clone());
        let (mm_value, mm_move, mm_stats) = engine::run_search(&board, player, Algorithm::Minimax)?;
        let (ab_value, ab_move, ab_stats) =
            engine::run_search(&board, player, Algorithm::AlphaBeta)?;
        anyhow::ensure!(
            mm_value == ab_value && mm_move == ab_move,
            "algorithms disagree on '{label}'"
        );

        rows.push(BenchRow {
            label,
            board: board.cells.iter().map(|c| c.to_char()).collect(),
            player,
            value: mm_value,
            chosen: mm_move,
            minimax_nodes: mm_stats.nodes,
            alphabeta_nodes: ab_stats.nodes,
            minimax_ms: mm_stats.runtime_ms,
            alphabeta_ms: ab_stats.runtime_ms,
            minimax_peak_bytes: mm_stats.peak_bytes,
            alphabeta_peak_bytes: ab_stats.peak_bytes,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "{:<16} {:>6} {:>8} {:>14} {:>16} {:>8}",
        "Position", "Value", "Move", "Minimax nodes", "Alpha-Beta nodes", "Ratio"
    );
    for row in &rows {
        let chosen = row
            .chosen
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-1".to_string());
        println!(
            "{:<16} {:>6} {:>8} {:>14} {:>16} {:>7.1}x",
            row.label,
            row.value,
            chosen,
            output::format_number(row.minimax_nodes),
            output::format_number(row.alphabeta_nodes),
            row.minimax_nodes as f64 / row.alphabeta_nodes as f64,
        );
    }

    if let Some(path) = args.export {
        let export = BenchExport {
            description: "Minimax vs. alpha-beta search cost on tic-tac-toe openings",
            rows,
        };
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\nBenchmark exported to: {}", path.display());
    }

    Ok(())
}
