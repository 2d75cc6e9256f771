//! Bounded-depth minimax with alpha-beta pruning
//!
//! Two mutually recursive procedures, one per side. Each returns the
//! `SearchResult` of the best line it found: the leaf or terminal state at
//! the far end of that line and its evaluation, not the immediate child.
//! Strict comparisons mean the first-seen child wins ties, so with
//! capture-first ordering a tie goes to a capture.

use game_core::{Budget, GameState, SearchResult};

use crate::eval::evaluate;
use crate::ordering::expand_ordered;

/// Maximize the minimum guaranteed score for the maximizer by looking ahead
/// to `depth_limit` plies.
pub fn find_max<S: GameState>(
    state: &S,
    depth: u8,
    depth_limit: u8,
    mut alpha: f64,
    beta: f64,
    budget: &Budget,
) -> SearchResult<S> {
    // This state's own evaluation doubles as the horizon value and as the
    // fallback when the budget cuts expansion short.
    let mut best_result = SearchResult::new(state.clone(), evaluate(state));
    if depth >= depth_limit || state.outcome().is_some() {
        return best_result;
    }

    let mut best = f64::NEG_INFINITY;
    for child in expand_ordered(state, budget) {
        let child_result = find_min(&child, depth + 1, depth_limit, alpha, beta, budget);
        if child_result.value > best {
            best = child_result.value;
            best_result = child_result;
        }
        if best >= beta {
            return best_result; // beta cutoff, remaining siblings unexplored
        }
        alpha = alpha.max(best);
    }
    best_result
}

/// Mirror of [`find_max`]: minimize the maximum score the maximizer can
/// force, cutting off once `best` can no longer beat `alpha`.
pub fn find_min<S: GameState>(
    state: &S,
    depth: u8,
    depth_limit: u8,
    alpha: f64,
    mut beta: f64,
    budget: &Budget,
) -> SearchResult<S> {
    let mut best_result = SearchResult::new(state.clone(), evaluate(state));
    if depth >= depth_limit || state.outcome().is_some() {
        return best_result;
    }

    let mut best = f64::INFINITY;
    for child in expand_ordered(state, budget) {
        let child_result = find_max(&child, depth + 1, depth_limit, alpha, beta, budget);
        if child_result.value < best {
            best = child_result.value;
            best_result = child_result;
        }
        if best <= alpha {
            return best_result; // alpha cutoff
        }
        beta = beta.min(best);
    }
    best_result
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
