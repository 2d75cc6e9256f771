//! Contracts shared between a game implementation and the search engine.
//!
//! The engine never owns board representation or move legality; it reaches
//! the game through [`GameState`] and paces itself through [`Budget`].

pub mod budget;
pub mod limits;
pub mod types;

pub use budget::Budget;
pub use limits::SearchLimits;
pub use types::{Outcome, PieceAt, PieceKind, Role};

// =============================================================================
// GameState trait — implemented by the board/rules collaborator
// =============================================================================

/// An immutable snapshot of a two-player, perfect-information, zero-sum game
/// at one ply.
///
/// Snapshots form a tree through the `previous()` back-reference: a child
/// knows which parent produced it, but parents do not own their children —
/// successors are regenerated on every `successors()` call. Cloning a state
/// must be cheap (implementations typically hand out shared handles), and
/// `PartialEq` must identify the same snapshot across clones, since the
/// engine compares parent links against the root it searched.
pub trait GameState: Clone + PartialEq {
    /// Which side the next move belongs to.
    fn side_to_move(&self) -> Role;

    /// `Some` with the reason once the game has ended, `None` while play
    /// continues. A state with an outcome must not offer successors.
    fn outcome(&self) -> Option<Outcome>;

    /// Inventory of every piece on the board.
    fn pieces(&self) -> Vec<PieceAt>;

    /// Total pieces on the board.
    fn piece_count(&self) -> usize {
        self.pieces().len()
    }

    /// All legal successor snapshots, each carrying this state as its
    /// parent. Order is implementation-defined but must be stable within
    /// one call.
    fn successors(&self) -> Vec<Self>;

    /// The snapshot this one was generated from, `None` at the game root.
    fn previous(&self) -> Option<Self>;

    /// Half-moves left before the no-progress draw rule ends the game.
    fn halfmoves_until_draw(&self) -> u32;
}

/// Best line found below some state: the leaf or terminal snapshot the line
/// ends on, and its evaluation from the maximizer's point of view.
///
/// Created fresh at every search leaf and propagated upward by replacement,
/// so the carried state is always the far end of the principal line, not an
/// immediate child.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<S> {
    pub state: S,
    pub value: f64,
}

impl<S> SearchResult<S> {
    pub fn new(state: S, value: f64) -> Self {
        Self { state, value }
    }
}
