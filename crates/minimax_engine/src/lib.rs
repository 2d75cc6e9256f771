//! Budgeted adversarial game-tree search.
//!
//! Iterative-deepening minimax with alpha-beta pruning, capture-first move
//! ordering, and a material+mobility evaluator, over any game that
//! implements [`game_core::GameState`]. The search paces itself against a
//! [`game_core::Budget`] of node and wall-clock ceilings, polled
//! cooperatively: it always unwinds with the best fully-searched answer
//! rather than aborting mid-tree.

mod deepening;
mod eval;
mod ordering;
mod search;
mod select;

#[cfg(test)]
pub(crate) mod fixtures;

use thiserror::Error;

use game_core::{GameState, SearchLimits, SearchResult};

pub use deepening::search;
pub use eval::{evaluate, piece_value, MATE_SCORE};
pub use ordering::expand_ordered;
pub use search::{find_max, find_min};
pub use select::step_from_root;

/// Ways choosing a move can fail. Budget exhaustion mid-iteration is not
/// among them: the driver falls back to the previous completed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The position is already terminal; there is no move to choose.
    #[error("game is already over; no move to choose")]
    GameOver,
    /// The budget ran out before even the shallowest iteration finished, so
    /// no move comparison can be trusted. Callers should fall back to any
    /// legal move.
    #[error("search budget exhausted before the first depth iteration completed")]
    NoCompletedIteration,
    /// The best line's parent chain never led back to the searched root:
    /// the game implementation violated the back-reference contract.
    #[error("best line does not lead back to the searched root")]
    DetachedLine,
}

/// The engine: iterative-deepening alpha-beta search configured by
/// [`SearchLimits`].
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    limits: SearchLimits,
}

impl MinimaxEngine {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Choose the move to play from `root`: the immediate successor leading
    /// toward the best outcome guaranteed against an optimal opponent,
    /// within this engine's budget.
    pub fn choose_move<S: GameState>(&self, root: &S) -> Result<S, SearchError> {
        if root.outcome().is_some() {
            return Err(SearchError::GameOver);
        }
        let budget = self.limits.budget();
        let best_result = deepening::search(root, &self.limits, &budget)
            .ok_or(SearchError::NoCompletedIteration)?;
        select::step_from_root(root, best_result.state)
    }

    /// Run the deepening search and return the full result: the far end of
    /// the principal line and its value. `None` if no iteration completed.
    pub fn search<S: GameState>(&self, root: &S) -> Option<SearchResult<S>> {
        let budget = self.limits.budget();
        deepening::search(root, &self.limits, &budget)
    }
}
