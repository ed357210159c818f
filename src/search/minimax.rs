//! Full-width minimax without pruning
//!
//! Kept as the baseline for cost comparison: it visits every node of the
//! subtree below the root, so its node count bounds alpha-beta's from above.

use super::{INF, SearchStats};
use crate::board::{Board, Player};
use crate::{eval, lines};

/// Recursively evaluate `board` with `to_move` to play at `depth` plies
/// from the root, maximizing for `me`.
///
/// Returns the exact game-theoretic value and the chosen move. The move is
/// `None` at terminal positions; internal callers discard child moves and
/// propagate only values, so the root call's move is the one that reaches
/// the entry point.
pub fn search(
    board: &Board,
    me: Player,
    to_move: Player,
    depth: u32,
    stats: &mut SearchStats,
) -> (i32, Option<usize>) {
    stats.visit(depth);

    if lines::is_terminal(board) {
        return (eval::utility(board, me, depth), None);
    }

    let mut best_move = None;
    if to_move == me {
        let mut best_val = -INF;
        for m in board.available_moves() {
            let mut child = *board;
            child.cells[m] = to_move.to_cell();
            let (val, _) = search(&child, me, to_move.opponent(), depth + 1, stats);
            // Strictly greater only: the first optimal move wins ties
            if val > best_val {
                best_val = val;
                best_move = Some(m);
            }
        }
        (best_val, best_move)
    } else {
        let mut best_val = INF;
        for m in board.available_moves() {
            let mut child = *board;
            child.cells[m] = to_move.to_cell();
            let (val, _) = search(&child, me, to_move.opponent(), depth + 1, stats);
            if val < best_val {
                best_val = val;
                best_move = Some(m);
            }
        }
        (best_val, best_move)
    }
}
