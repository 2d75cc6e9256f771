//! Capture-first successor ordering
//!
//! Captures tend to be either very good or very bad, so examining them
//! first tightens the alpha-beta window sooner and prunes more.

use game_core::{Budget, GameState};

/// Generate a state's successors under the budget and return them with all
/// captures first.
///
/// The budget is consulted before taking each successor and charged once
/// per successor taken; generation stops as soon as the budget reports
/// exhausted, so a partial expansion is expected near the ceilings. A
/// successor counts as a capture when its piece count is strictly below the
/// parent's. Both groups keep their generation order; there is no sorting
/// by value within a group.
pub fn expand_ordered<S: GameState>(state: &S, budget: &Budget) -> Vec<S> {
    let parent_count = state.piece_count();
    let mut captures = Vec::new();
    let mut quiet = Vec::new();

    let mut successors = state.successors().into_iter();
    while !budget.is_exhausted() {
        let Some(child) = successors.next() else {
            break;
        };
        budget.record_visit();
        if child.piece_count() < parent_count {
            captures.push(child);
        } else {
            quiet.push(child);
        }
    }

    captures.append(&mut quiet);
    captures
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
