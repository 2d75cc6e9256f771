//! Material-plus-mobility position evaluation

use game_core::{GameState, Outcome, PieceAt, PieceKind, Role};

/// Score for a position where the maximizer has delivered checkmate;
/// negated for the minimizer.
pub const MATE_SCORE: f64 = 1000.0;

/// Evaluates a state from the maximizer's point of view.
///
/// Terminal states score a fixed sentinel: 0 for a rule draw or stalemate,
/// ±1000 for checkmate depending on the winner. Everything else, including
/// horizon cutoffs mid-game, scores as the maximizer's side score minus the
/// minimizer's. Pure function of the state.
pub fn evaluate<S: GameState>(state: &S) -> f64 {
    match state.outcome() {
        Some(Outcome::DrawByRule) => 0.0,
        Some(Outcome::Stalemate) => 0.0,
        Some(Outcome::Checkmate { winner }) => match winner {
            Role::Maximizer => MATE_SCORE,
            Role::Minimizer => -MATE_SCORE,
        },
        None => side_score(state, Role::Maximizer) - side_score(state, Role::Minimizer),
    }
}

/// One side's score: summed material with a doubled-pawn penalty, plus a
/// small bonus per legal reply available in the state. Having moves to
/// choose from is generally a good sign.
fn side_score<S: GameState>(state: &S, side: Role) -> f64 {
    let pieces = state.pieces();
    let mut score = 0.0;
    for piece in pieces.iter().filter(|p| p.owner == side) {
        score += piece_value(piece.kind);
        if piece.kind == PieceKind::Pawn && is_doubled_pawn(piece, &pieces) {
            score -= 0.5;
        }
    }
    score + 0.1 * state.successors().len() as f64
}

/// Returns the material value of a piece.
///
/// The king's value dwarfs the rest to bias strongly against losing it,
/// although checkmate is already a terminal sentinel.
#[inline]
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 100.0,
    }
}

/// A pawn is doubled when a friendly pawn occupies the same file strictly
/// further advanced. The most-advanced pawn of a stack is never penalized;
/// every pawn behind it is penalized once each, so stacks of three or more
/// are penalized more than once in total.
fn is_doubled_pawn(pawn: &PieceAt, pieces: &[PieceAt]) -> bool {
    pieces.iter().any(|other| {
        other.kind == PieceKind::Pawn
            && other.owner == pawn.owner
            && other.file == pawn.file
            && is_more_advanced(other.rank, pawn.rank, pawn.owner)
    })
}

fn is_more_advanced(rank: u8, than: u8, owner: Role) -> bool {
    match owner.advance_dir() {
        1 => rank > than,
        _ => rank < than,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
