//! Per-invocation search cost accumulator

use serde::Serialize;

/// Cost counters for a single search invocation.
///
/// Created fresh by [`crate::engine::ai_move`], mutated by the searcher
/// while it runs, read once by the caller after the call returns, then
/// discarded. Never shared across searches.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Nodes visited, including the root and every terminal leaf.
    pub nodes: u64,
    /// Deepest ply reached, measured from the root.
    pub max_depth: u32,
    /// Wall-clock runtime of the search call in milliseconds, set once
    /// after the search returns.
    pub runtime_ms: f64,
    /// Peak bytes allocated during the search window, set once after the
    /// search returns. Best-effort; see [`crate::profiler`].
    pub peak_bytes: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one node visit at `depth`.
    pub(crate) fn visit(&mut self, depth: u32) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Peak memory in whole kilobytes, clamped to a minimum of 1 for
    /// display. The underlying `peak_bytes` value is never clamped.
    pub fn peak_kb_display(&self) -> u64 {
        (self.peak_bytes / 1024).max(1)
    }
}
