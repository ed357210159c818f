//! CLI infrastructure for the search engine
//!
//! This module provides the command-line interface for solving positions,
//! comparing the two search algorithms, benchmarking them across openings,
//! and playing out full games with per-move analysis.

pub mod commands;
pub mod output;
