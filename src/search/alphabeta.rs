//! Minimax with alpha-beta pruning
//!
//! Identical recursion shape and tie-break to [`super::minimax`], augmented
//! with an `[alpha, beta]` window. Branches that cannot affect the root
//! decision are cut off and contribute nothing to the node count, which is
//! exactly why this searcher's count is expected to be at most minimax's on
//! the same position while returning the same value and move.

use super::SearchStats;
use crate::board::{Board, Player};
use crate::{eval, lines};

/// Recursively evaluate `board` inside the `[alpha, beta]` window.
///
/// The root is called with the full `[-10000, 10000]` window. A maximizing
/// node raises `alpha` as its running best improves and stops examining
/// moves once `alpha >= beta`; a minimizing node lowers `beta`
/// symmetrically.
pub fn search(
    board: &Board,
    me: Player,
    to_move: Player,
    mut alpha: i32,
    mut beta: i32,
    depth: u32,
    stats: &mut SearchStats,
) -> (i32, Option<usize>) {
    stats.visit(depth);

    if lines::is_terminal(board) {
        return (eval::utility(board, me, depth), None);
    }

    let mut best_move = None;
    if to_move == me {
        let mut v = -super::INF;
        for m in board.available_moves() {
            let mut child = *board;
            child.cells[m] = to_move.to_cell();
            let (val, _) = search(&child, me, to_move.opponent(), alpha, beta, depth + 1, stats);
            // Strictly greater only: the first optimal move wins ties
            if val > v {
                v = val;
                best_move = Some(m);
            }
            alpha = alpha.max(v);
            if alpha >= beta {
                break;
            }
        }
        (v, best_move)
    } else {
        let mut v = super::INF;
        for m in board.available_moves() {
            let mut child = *board;
            child.cells[m] = to_move.to_cell();
            let (val, _) = search(&child, me, to_move.opponent(), alpha, beta, depth + 1, stats);
            if val < v {
                v = val;
                best_move = Some(m);
            }
            beta = beta.min(v);
            if alpha >= beta {
                break;
            }
        }
        (v, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{self, Algorithm, INF};

    fn run_both(board: &Board, me: Player) -> ((i32, Option<usize>), (i32, Option<usize>), u64, u64) {
        let mut mm_stats = SearchStats::new();
        let mm = search::run(board, me, Algorithm::Minimax, &mut mm_stats);
        let mut ab_stats = SearchStats::new();
        let ab = search::run(board, me, Algorithm::AlphaBeta, &mut ab_stats);
        (mm, ab, mm_stats.nodes, ab_stats.nodes)
    }

    #[test]
    fn test_terminal_root_visits_one_node() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut stats = SearchStats::new();
        let (value, mv) = search(&board, Player::X, Player::X, -INF, INF, 0, &mut stats);
        assert_eq!(value, 0);
        assert_eq!(mv, None);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_string("XX.OO....").unwrap();
        let mut stats = SearchStats::new();
        let (value, mv) = search(&board, Player::X, Player::X, -INF, INF, 0, &mut stats);
        assert_eq!(mv, Some(2));
        assert_eq!(value, 99);
    }

    #[test]
    fn test_agrees_with_minimax_on_midgame_positions() {
        let positions = [
            "X........",
            "X...O....",
            "XO.......",
            "X.O.X....",
            "XOX.O....",
            "XOXXO.O..",
        ];
        for s in positions {
            let board = Board::from_string(s).unwrap();
            for me in [Player::X, Player::O] {
                let (mm, ab, mm_nodes, ab_nodes) = run_both(&board, me);
                assert_eq!(mm, ab, "value/move mismatch on '{s}' for {me}");
                assert!(
                    ab_nodes <= mm_nodes,
                    "alpha-beta visited more nodes on '{s}' for {me}: {ab_nodes} > {mm_nodes}"
                );
            }
        }
    }

    #[test]
    fn test_prunes_strictly_on_opening() {
        let board = Board::new();
        let (mm, ab, mm_nodes, ab_nodes) = run_both(&board, Player::X);
        assert_eq!(mm, ab);
        assert!(
            ab_nodes < mm_nodes,
            "alpha-beta must prune from the empty board: {ab_nodes} vs {mm_nodes}"
        );
    }
}
