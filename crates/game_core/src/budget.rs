//! Node-count and wall-clock budget for one move decision.
//!
//! The search core polls the budget cooperatively: it asks `is_exhausted()`
//! before generating each node and calls `record_visit()` for every node it
//! takes. Nothing ever interrupts the search from outside; once the budget
//! runs out, in-flight recursion unwinds normally with its best-so-far
//! result.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Tracks positions visited and elapsed time against two independent
/// ceilings.
///
/// Created once per move decision and shared by reference across the whole
/// iterative-deepening run. The counter and the exhaustion flag are atomic,
/// so querying and incrementing cannot tear even if a caller shares the
/// budget across threads.
#[derive(Debug)]
pub struct Budget {
    /// Nodes visited so far.
    visited: AtomicU64,
    /// Hard ceiling on nodes visited.
    max_nodes: u64,
    /// When the clock started, i.e. when the budget was created.
    start: Instant,
    /// Hard ceiling on elapsed wall-clock time.
    max_time: Duration,
    /// Latched once either ceiling is hit; exhaustion never un-happens.
    exhausted: AtomicBool,
}

impl Budget {
    /// Create a budget with both ceilings. The clock starts immediately.
    pub fn new(max_nodes: u64, max_time: Duration) -> Self {
        Self {
            visited: AtomicU64::new(0),
            max_nodes,
            start: Instant::now(),
            max_time,
            exhausted: AtomicBool::new(false),
        }
    }

    /// Count one visited node.
    #[inline]
    pub fn record_visit(&self) {
        self.visited.fetch_add(1, Ordering::Relaxed);
    }

    /// Nodes visited so far.
    #[inline]
    pub fn visited(&self) -> u64 {
        self.visited.load(Ordering::Relaxed)
    }

    /// True once either ceiling has been reached. Latches: after the first
    /// `true`, every later call is `true` as well.
    pub fn is_exhausted(&self) -> bool {
        if self.exhausted.load(Ordering::Relaxed) {
            return true;
        }
        if self.visited() >= self.max_nodes || self.start.elapsed() >= self.max_time {
            self.exhausted.store(true, Ordering::Relaxed);
            return true;
        }
        false
    }

    /// Time since the budget was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Nodes left before the count ceiling, zero once exhausted.
    pub fn remaining_nodes(&self) -> u64 {
        self.max_nodes.saturating_sub(self.visited())
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod budget_tests;
