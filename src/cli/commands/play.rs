//! Play out a full game with per-move analysis
//!
//! Stand-in for a graphical front end: the engine plays one side, an
//! opponent plays the other, and every engine move prints the same stats
//! panel a UI would render.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::board::{Board, Player};
use crate::cli::output;
use crate::engine;
use crate::search::Algorithm;

/// Who plays the non-engine side
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Uniformly random legal moves
    Random,
    /// The engine itself (self-play)
    Engine,
}

#[derive(Args)]
pub struct PlayArgs {
    /// Search algorithm for the engine
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// Opponent for the non-engine side
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Side the engine plays
    #[arg(long, value_enum, default_value_t = Player::O)]
    engine_side: Player,

    /// Side that moves first
    #[arg(long, value_enum, default_value_t = Player::X)]
    first: Player,

    /// RNG seed for the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut board = Board::new();
    let mut to_move = args.first;

    output::print_section(&format!(
        "{} game: engine plays {} with {}, {} moves first",
        match args.opponent {
            Opponent::Random => "Engine vs. random",
            Opponent::Engine => "Self-play",
        },
        args.engine_side,
        args.algorithm,
        args.first
    ));

    while !board.is_terminal() {
        if to_move == args.engine_side || args.opponent == Opponent::Engine {
            let (chosen, stats) = engine::ai_move_with(&board, to_move, args.algorithm)?;
            let m = chosen.context("non-terminal position must have a move")?;
            board = board.place(m, to_move)?;
            println!("\n{to_move} (engine) plays position {m}");
            output::print_stats(&stats);
        } else {
            let moves = board.available_moves();
            let &m = moves
                .choose(&mut rng)
                .context("non-terminal position must have a move")?;
            board = board.place(m, to_move)?;
            println!("\n{to_move} (random) plays position {m}");
        }
        println!("{board}");
        to_move = to_move.opponent();
    }

    match board.winner() {
        Some(w) => println!("\n{w} wins!"),
        None => println!("\nDraw."),
    }
    Ok(())
}
