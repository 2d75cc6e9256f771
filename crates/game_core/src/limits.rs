//! Search limits: budget ceilings and depth schedule for one move decision.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::budget::Budget;

/// Limits that control how much work one move decision may do.
///
/// The defaults match the engine's intended operating point: half a million
/// positions and five minutes per move, searching whole turn-pairs from
/// depth 2 up to 6 plies, widened to 12 plies once the board is down to ten
/// pieces or fewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum positions examined per move decision.
    pub max_nodes: u64,
    /// Maximum wall-clock time per move decision, in milliseconds.
    pub move_time_ms: u64,
    /// Depth limit of the first deepening iteration, in plies.
    pub start_depth: u8,
    /// Plies added per deepening iteration. Two keeps every horizon on a
    /// whole number of turns rather than half-turns.
    pub depth_step: u8,
    /// Absolute depth ceiling in the middlegame.
    pub max_depth: u8,
    /// Absolute depth ceiling once the board is sparse.
    pub endgame_max_depth: u8,
    /// Total piece count at or below which the endgame ceiling applies.
    pub endgame_piece_limit: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: 500_000,
            move_time_ms: 300_000,
            start_depth: 2,
            depth_step: 2,
            max_depth: 6,
            endgame_max_depth: 12,
            endgame_piece_limit: 10,
        }
    }
}

impl SearchLimits {
    /// Limits with only the node ceiling changed.
    pub fn nodes(max_nodes: u64) -> Self {
        Self {
            max_nodes,
            ..Self::default()
        }
    }

    /// Limits with both budget ceilings changed.
    pub fn nodes_and_time(max_nodes: u64, move_time: Duration) -> Self {
        Self {
            max_nodes,
            move_time_ms: move_time.as_millis() as u64,
            ..Self::default()
        }
    }

    /// Parse limits from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Wall-clock ceiling as a `Duration`.
    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time_ms)
    }

    /// Depth ceiling for a board with `piece_count` pieces in total.
    /// Sparse boards are cheap to search and reward deeper lines.
    pub fn depth_ceiling(&self, piece_count: usize) -> u8 {
        if piece_count <= self.endgame_piece_limit {
            self.endgame_max_depth
        } else {
            self.max_depth
        }
    }

    /// Build the budget for one move decision. The clock starts now.
    pub fn budget(&self) -> Budget {
        Budget::new(self.max_nodes, self.move_time())
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
