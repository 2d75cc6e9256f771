//! Iterative deepening driver
//!
//! Re-searches the root at increasing depth limits and keeps the result of
//! the last iteration that finished inside the budget. An iteration the
//! budget interrupted may have explored an unrepresentative slice of the
//! tree, so its root value is not trusted; only completed depths count.

use log::debug;

use game_core::{Budget, GameState, Role, SearchLimits, SearchResult};

use crate::search::{find_max, find_min};

/// Search `root` with iteratively deepening depth limits under `budget`.
///
/// Depth limits run from `limits.start_depth` in steps of
/// `limits.depth_step` (whole turn-pairs by default) up to the ceiling for
/// the root's piece count. Returns `None` only when not even the first
/// iteration completed within the budget.
pub fn search<S: GameState>(
    root: &S,
    limits: &SearchLimits,
    budget: &Budget,
) -> Option<SearchResult<S>> {
    let ceiling = limits.depth_ceiling(root.piece_count());
    let mut best_result = None;

    let mut depth_limit = limits.start_depth;
    while depth_limit <= ceiling && !budget.is_exhausted() {
        let result = match root.side_to_move() {
            Role::Maximizer => {
                find_max(root, 0, depth_limit, f64::NEG_INFINITY, f64::INFINITY, budget)
            }
            Role::Minimizer => {
                find_min(root, 0, depth_limit, f64::NEG_INFINITY, f64::INFINITY, budget)
            }
        };
        if budget.is_exhausted() {
            debug!(
                "budget exhausted during depth {depth_limit}; discarding partial iteration \
                 ({} nodes, {:?})",
                budget.visited(),
                budget.elapsed()
            );
            break;
        }
        debug!(
            "depth {depth_limit} complete: value {:.2}, {} nodes visited",
            result.value,
            budget.visited()
        );
        best_result = Some(result);
        depth_limit += limits.depth_step.max(1);
    }

    best_result
}

#[cfg(test)]
#[path = "deepening_tests.rs"]
mod deepening_tests;
