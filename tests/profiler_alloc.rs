//! Peak-memory sampling with the tracking allocator installed
//!
//! Kept in its own test binary so the single test below owns the global
//! allocator counters without interference from parallel tests.

use oxo::search::Algorithm;
use oxo::{Board, Player, TrackingAllocator, run_search};

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator;

#[test]
fn search_window_reports_runtime_and_peak_memory() {
    let (value, chosen, stats) = run_search(&Board::new(), Player::X, Algorithm::Minimax).unwrap();
    assert_eq!(value, 0);
    assert_eq!(chosen, Some(0));

    // ~550k nodes of work: the wall clock must have advanced and the move
    // vectors allocated during the recursion must have raised the peak
    // above the pre-search baseline
    assert!(stats.runtime_ms > 0.0, "runtime not measured");
    assert!(stats.peak_bytes > 0, "peak memory not measured");

    // A second, tiny search gets its own fresh window; its peak must not
    // inherit the first search's high-water mark
    let one_left = Board::from_string("XOXXOO.XO").unwrap();
    let (_, _, small_stats) = run_search(&one_left, Player::X, Algorithm::AlphaBeta).unwrap();
    assert!(
        small_stats.peak_bytes <= stats.peak_bytes,
        "per-search windows must not accumulate: {} > {}",
        small_stats.peak_bytes,
        stats.peak_bytes
    );
}
