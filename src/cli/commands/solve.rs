//! Pick the best move for a single position

use anyhow::Result;
use clap::Args;

use crate::board::{Board, Player};
use crate::cli::output;
use crate::engine;
use crate::search::Algorithm;

#[derive(Args)]
pub struct SolveArgs {
    /// Board as 9 cells, row-major: '.' empty, 'X', 'O' (e.g. "X...O....")
    #[arg(long, default_value = ".........")]
    board: String,

    /// Side the engine plays
    #[arg(long, value_enum, default_value_t = Player::X)]
    player: Player,

    /// Search algorithm
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let (value, chosen, stats) = engine::run_search(&board, args.player, args.algorithm)?;

    output::print_section(&format!("{} analysis ({} to move)", args.algorithm, args.player));
    println!("{board}");

    match chosen {
        Some(m) => println!("\nChosen move: position {m} (row {}, col {})", m / 3, m % 3),
        // -1 is the sentinel the presentation contract expects for a full board
        None => println!("\nChosen move: -1 (position is terminal)"),
    }
    println!("Root value: {value}");

    output::print_subsection("Search cost");
    output::print_stats(&stats);
    Ok(())
}
