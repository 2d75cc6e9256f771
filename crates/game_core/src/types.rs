/// The two adversaries. Scores are always from the maximizer's point of view:
/// positive favors `Maximizer`, negative favors `Minimizer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// Direction a pawn of this side advances along the rank axis.
    /// The maximizer plays toward higher ranks, the minimizer toward lower.
    pub fn advance_dir(self) -> i8 {
        match self {
            Role::Maximizer => 1,
            Role::Minimizer => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// One entry of a state's piece inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceAt {
    pub kind: PieceKind,
    pub owner: Role,
    pub file: u8,
    pub rank: u8,
}

impl PieceAt {
    pub fn new(kind: PieceKind, owner: Role, file: u8, rank: u8) -> Self {
        Self {
            kind,
            owner,
            file,
            rank,
        }
    }
}

/// Why a finished game ended. `None` outcome on a state means the game is
/// still in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Draw-rule counter ran out with no progress.
    DrawByRule,
    /// Side to move has no legal reply but is not in check.
    Stalemate,
    Checkmate { winner: Role },
}
