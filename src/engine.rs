//! Move selection entry point
//!
//! The only externally callable way into the search core. A presentation
//! layer hands over a board, the symbol the engine plays, and an algorithm
//! label; it gets back the chosen cell and the populated cost statistics,
//! and is responsible for applying the move and rendering the numbers.

use crate::board::{Board, Player};
use crate::profiler::{AllocProfiler, SearchProfiler};
use crate::search::{self, Algorithm, SearchStats};

/// Pick the engine's move on `board`, playing as `ai_symbol`.
///
/// The algorithm label is matched case-sensitively against
/// {"Minimax", "Alpha-Beta"}; any other value silently falls back to
/// alpha-beta. Returns `None` as the move when the position is already
/// terminal (a defined outcome, not a failure); the stats then reflect a
/// single node visit.
///
/// # Errors
///
/// Rejects boards that are unreachable in any game (piece-count skew
/// greater than one, or completed lines for both players).
pub fn ai_move(
    board: &Board,
    ai_symbol: Player,
    algorithm: &str,
) -> crate::Result<(Option<usize>, SearchStats)> {
    ai_move_with(board, ai_symbol, Algorithm::from_label(algorithm))
}

/// Like [`ai_move`], taking the parsed [`Algorithm`] directly.
pub fn ai_move_with(
    board: &Board,
    ai_symbol: Player,
    algorithm: Algorithm,
) -> crate::Result<(Option<usize>, SearchStats)> {
    let (_, chosen, stats) = run_search(board, ai_symbol, algorithm)?;
    Ok((chosen, stats))
}

/// Run one profiled search and return its root value, chosen move and
/// stats. The measured window spans exactly the search call: the profiler
/// starts right before it and stops right after it returns, so validation
/// and result packaging are excluded.
pub fn run_search(
    board: &Board,
    me: Player,
    algorithm: Algorithm,
) -> crate::Result<(i32, Option<usize>, SearchStats)> {
    board.validate()?;

    let mut stats = SearchStats::new();
    let mut profiler = AllocProfiler::new();

    profiler.start();
    let (value, chosen) = search::run(board, me, algorithm, &mut stats);
    let sample = profiler.stop();

    stats.runtime_ms = sample.elapsed.as_secs_f64() * 1000.0;
    stats.peak_bytes = sample.peak_bytes;
    Ok((value, chosen, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_returns_no_move() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let (mv, stats) = ai_move(&board, Player::X, "Alpha-Beta").unwrap();
        assert_eq!(mv, None);
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_unknown_label_falls_back_to_alphabeta() {
        let board = Board::from_string("X...O....").unwrap();
        let (mv_ab, stats_ab) = ai_move(&board, Player::X, "Alpha-Beta").unwrap();
        let (mv_other, stats_other) = ai_move(&board, Player::X, "Monte-Carlo").unwrap();
        assert_eq!(mv_ab, mv_other);
        assert_eq!(stats_ab.nodes, stats_other.nodes);
    }

    #[test]
    fn test_input_board_is_unchanged() {
        let board = Board::from_string("XO.......").unwrap();
        let snapshot = board;
        let (mv, _) = ai_move(&board, Player::X, "Minimax").unwrap();
        assert!(mv.is_some());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_rejects_invalid_board() {
        let board = Board::from_string("XXX......").unwrap();
        let result = ai_move(&board, Player::O, "Minimax");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPieceCounts { .. })
        ));
    }

    #[test]
    fn test_engine_can_play_either_symbol() {
        // O to move, must block X's top-row threat
        let board = Board::from_string("XX.O.....").unwrap();
        let (mv, _) = ai_move(&board, Player::O, "Minimax").unwrap();
        assert_eq!(mv, Some(2));
    }
}
