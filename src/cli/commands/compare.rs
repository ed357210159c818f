//! Run both algorithms on one position and compare their cost

use anyhow::{Result, ensure};
use clap::Args;

use crate::board::{Board, Player};
use crate::cli::output;
use crate::engine;
use crate::search::Algorithm;

#[derive(Args)]
pub struct CompareArgs {
    /// Board as 9 cells, row-major: '.' empty, 'X', 'O'
    #[arg(long, default_value = ".........")]
    board: String,

    /// Side the engine plays
    #[arg(long, value_enum, default_value_t = Player::X)]
    player: Player,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;

    output::print_section(&format!("Minimax vs. Alpha-Beta ({} to move)", args.player));
    println!("{board}");

    let (mm_value, mm_move, mm_stats) =
        engine::run_search(&board, args.player, Algorithm::Minimax)?;
    let (ab_value, ab_move, ab_stats) =
        engine::run_search(&board, args.player, Algorithm::AlphaBeta)?;

    for (algorithm, value, chosen, stats) in [
        (Algorithm::Minimax, mm_value, mm_move, &mm_stats),
        (Algorithm::AlphaBeta, ab_value, ab_move, &ab_stats),
    ] {
        output::print_subsection(algorithm.as_str());
        match chosen {
            Some(m) => output::print_kv("Chosen move", &format!("position {m}")),
            None => output::print_kv("Chosen move", "-1 (position is terminal)"),
        }
        output::print_kv("Root value", &value.to_string());
        output::print_stats(stats);
    }

    // Both searchers share the tie-break, so they must agree exactly
    ensure!(
        mm_value == ab_value && mm_move == ab_move,
        "algorithms disagree: minimax ({mm_value}, {mm_move:?}) vs alpha-beta ({ab_value}, {ab_move:?})"
    );
    ensure!(
        ab_stats.nodes <= mm_stats.nodes,
        "alpha-beta visited more nodes than minimax: {} > {}",
        ab_stats.nodes,
        mm_stats.nodes
    );

    output::print_subsection("Pruning effect");
    let saved = mm_stats.nodes - ab_stats.nodes;
    output::print_kv("Nodes pruned away", &output::format_number(saved));
    if ab_stats.nodes > 0 {
        output::print_kv(
            "Node ratio",
            &format!("{:.1}x", mm_stats.nodes as f64 / ab_stats.nodes as f64),
        );
    }
    Ok(())
}
