//! Winning line analysis
//!
//! The eight line triples are fixed, immutable, process-wide data shared
//! read-only by every search.

use crate::board::{Board, Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Scan the eight lines for one fully occupied by a single symbol.
///
/// Returns `None` when no line is complete; the board may or may not be
/// terminal in that case.
pub fn winner(board: &Board) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = board.get(line[0]);
        if first != Cell::Empty && line.iter().all(|&idx| board.get(idx) == first) {
            return first.to_player();
        }
    }
    None
}

/// Check if a specific player has completed a line
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.get(idx) == target))
}

/// A position is terminal when a line is complete or no empty cell remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}
