//! Extracting the immediate move from a finished search

use game_core::GameState;

use crate::SearchError;

/// Walk `line_end`'s parent links upward until reaching the direct child of
/// `root`, and return that child.
///
/// The searcher reports the far end of the principal line, possibly many
/// plies below the root; the move to actually play is the first step along
/// that line. A chain that runs out of parents without meeting `root` means
/// the game implementation broke the back-reference contract, which is
/// reported loudly rather than played through.
pub fn step_from_root<S: GameState>(root: &S, line_end: S) -> Result<S, SearchError> {
    let mut state = line_end;
    loop {
        match state.previous() {
            Some(prev) if prev == *root => return Ok(state),
            Some(prev) => state = prev,
            None => return Err(SearchError::DetachedLine),
        }
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
