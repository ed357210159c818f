//! Exhaustive adversarial search engine for tic-tac-toe
//!
//! This crate provides:
//! - Complete board model with validation
//! - Two full-tree searchers: plain minimax and alpha-beta pruning
//! - Per-search cost instrumentation (nodes, depth, runtime, peak memory)
//! - A CLI for solving positions and comparing the two algorithms
//!
//! The search core is deliberately exhaustive: tic-tac-toe's tree is small
//! enough (at most 9 plies, branching factor 9) that both algorithms walk it
//! completely, which makes their node counts exactly comparable.

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval;
pub mod lines;
pub mod profiler;
pub mod search;

pub use board::{Board, Cell, Player};
pub use engine::{ai_move, ai_move_with, run_search};
pub use error::{Error, Result};
pub use eval::utility;
pub use lines::{WINNING_LINES, is_terminal, winner};
pub use profiler::{AllocProfiler, NoopProfiler, ProfileSample, SearchProfiler, TrackingAllocator};
pub use search::{Algorithm, SearchStats};
