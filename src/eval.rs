//! Depth-sensitive terminal utility

use crate::board::{Board, Player};
use crate::lines;

/// Base score for a win; utilities always fall in [-100, 100].
pub const WIN_SCORE: i32 = 100;

/// Score a terminal position from `me`'s perspective.
///
/// A win scores `100 - depth` so faster wins rank higher; a loss scores
/// `depth - 100` so slower losses rank higher; a draw scores 0. `depth` is
/// plies from the search root at the point the terminal state was reached,
/// not plies remaining. This depth bias is the engine's only heuristic:
/// among equally terminal outcomes it prefers speed-to-win and
/// delay-of-loss.
///
/// Callers must only evaluate confirmed-terminal positions; the no-winner,
/// not-full branch still returns 0 defensively in release builds.
pub fn utility(board: &Board, me: Player, depth: u32) -> i32 {
    debug_assert!(
        lines::is_terminal(board),
        "utility evaluated on a non-terminal position:\n{board}"
    );

    match lines::winner(board) {
        Some(w) if w == me => WIN_SCORE - depth as i32,
        Some(_) => depth as i32 - WIN_SCORE,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_scores_higher_when_faster() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(utility(&board, Player::X, 5), 95);
        assert_eq!(utility(&board, Player::X, 7), 93);
    }

    #[test]
    fn test_loss_scores_less_negative_when_slower() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(utility(&board, Player::O, 5), -95);
        assert_eq!(utility(&board, Player::O, 7), -93);
    }

    #[test]
    fn test_draw_scores_zero_for_both_sides() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(utility(&board, Player::X, 9), 0);
        assert_eq!(utility(&board, Player::O, 9), 0);
    }
}
