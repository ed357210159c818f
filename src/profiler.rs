//! Search-scoped runtime and peak-memory instrumentation
//!
//! Peak-memory sampling has no portable standard-library facility, so it is
//! abstracted behind the [`SearchProfiler`] capability trait. The provided
//! backend pairs a monotonic wall clock with [`TrackingAllocator`], a
//! delegating global allocator that maintains atomic live/peak byte
//! counters. Readings are best-effort and platform-dependent by nature:
//! when the tracking allocator is not installed in the running binary the
//! peak reads zero, and concurrent allocations from other threads are
//! attributed to whichever window is open. The library never forces the
//! allocator on its users; the `oxo` binary and the profiler integration
//! tests install it.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant},
};

/// One measurement window's results
#[derive(Debug, Clone, Copy)]
pub struct ProfileSample {
    pub elapsed: Duration,
    pub peak_bytes: u64,
}

/// Capability interface for measuring one search call.
///
/// `start` is called immediately before the search and `stop` immediately
/// after it returns, so the measured window spans exactly the search call;
/// result packaging and rendering are excluded.
pub trait SearchProfiler {
    fn start(&mut self);
    fn stop(&mut self) -> ProfileSample;
}

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

/// Delegating allocator that tracks live and peak heap bytes.
///
/// Install it in a binary with:
///
/// ```ignore
/// #[global_allocator]
/// static ALLOCATOR: oxo::TrackingAllocator = oxo::TrackingAllocator;
/// ```
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            let live = ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            PEAK.fetch_max(live, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
    }
}

/// Profiler backed by [`Instant`] and the [`TrackingAllocator`] counters.
///
/// `start` captures the current live-byte count as a baseline and resets
/// the peak to it; `stop` reports the peak observed above that baseline.
#[derive(Debug, Default)]
pub struct AllocProfiler {
    started_at: Option<Instant>,
    baseline: usize,
}

impl AllocProfiler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchProfiler for AllocProfiler {
    fn start(&mut self) {
        self.baseline = ALLOCATED.load(Ordering::Relaxed);
        PEAK.store(self.baseline, Ordering::Relaxed);
        self.started_at = Some(Instant::now());
    }

    fn stop(&mut self) -> ProfileSample {
        let elapsed = self
            .started_at
            .take()
            .map(|t| t.elapsed())
            .unwrap_or_default();
        let peak = PEAK.load(Ordering::Relaxed);
        ProfileSample {
            elapsed,
            peak_bytes: peak.saturating_sub(self.baseline) as u64,
        }
    }
}

/// Profiler that measures nothing, for callers that only want the move
#[derive(Debug, Default)]
pub struct NoopProfiler;

impl SearchProfiler for NoopProfiler {
    fn start(&mut self) {}

    fn stop(&mut self) -> ProfileSample {
        ProfileSample {
            elapsed: Duration::ZERO,
            peak_bytes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_profiler_window() {
        // The tracking allocator is not installed in unit tests, so only
        // the window mechanics are observable here
        let mut profiler = AllocProfiler::new();
        profiler.start();
        let sample = profiler.stop();
        assert_eq!(sample.peak_bytes, 0);
    }

    #[test]
    fn test_stop_without_start_is_zeroed() {
        let mut profiler = AllocProfiler::new();
        let sample = profiler.stop();
        assert_eq!(sample.elapsed, Duration::ZERO);
        assert_eq!(sample.peak_bytes, 0);
    }

    #[test]
    fn test_noop_profiler() {
        let mut profiler = NoopProfiler;
        profiler.start();
        let sample = profiler.stop();
        assert_eq!(sample.elapsed, Duration::ZERO);
        assert_eq!(sample.peak_bytes, 0);
    }
}
