//! Exhaustive game-tree searchers
//!
//! Both searchers explore the full tree from a root position and return the
//! game-theoretic value together with the chosen move. They share the same
//! recursion shape and the same tie-break (ascending move index, first
//! strictly-better value wins), so on any position they must agree on both
//! value and move; only their node counts differ.

pub mod alphabeta;
pub mod minimax;
pub mod stats;

use std::fmt;

use clap::ValueEnum;

use crate::board::{Board, Player};

pub use stats::SearchStats;

/// Initial alpha-beta window bound, comfortably outside the utility
/// range of [-100, 100].
pub(crate) const INF: i32 = 10_000;

/// Which searcher to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    /// Resolve a free-form label from the presentation layer.
    ///
    /// Matched case-sensitively; anything other than `"Minimax"` falls back
    /// to alpha-beta silently, mirroring the display labels
    /// {"Minimax", "Alpha-Beta"}.
    pub fn from_label(label: &str) -> Algorithm {
        match label {
            "Minimax" => Algorithm::Minimax,
            _ => Algorithm::AlphaBeta,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run `algorithm` from the root of `board` with `me` to move.
///
/// Returns the root value and the chosen move (`None` when the position is
/// already terminal). `stats` accumulates node and depth counters; runtime
/// and memory are the caller's concern (see [`crate::engine`]).
pub fn run(
    board: &Board,
    me: Player,
    algorithm: Algorithm,
    stats: &mut SearchStats,
) -> (i32, Option<usize>) {
    match algorithm {
        Algorithm::Minimax => minimax::search(board, me, me, 0, stats),
        Algorithm::AlphaBeta => alphabeta::search(board, me, me, -INF, INF, 0, stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_resolution() {
        assert_eq!(Algorithm::from_label("Minimax"), Algorithm::Minimax);
        assert_eq!(Algorithm::from_label("Alpha-Beta"), Algorithm::AlphaBeta);
        // Case-sensitive: no match means alpha-beta
        assert_eq!(Algorithm::from_label("minimax"), Algorithm::AlphaBeta);
        assert_eq!(Algorithm::from_label(""), Algorithm::AlphaBeta);
        assert_eq!(Algorithm::from_label("MCTS"), Algorithm::AlphaBeta);
    }

    #[test]
    fn test_display_matches_presentation_labels() {
        assert_eq!(Algorithm::Minimax.to_string(), "Minimax");
        assert_eq!(Algorithm::AlphaBeta.to_string(), "Alpha-Beta");
    }
}
