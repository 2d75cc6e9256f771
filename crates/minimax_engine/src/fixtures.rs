//! Scripted game trees used as the board collaborator in tests.
//!
//! A `Script` describes one position and the positions each legal move
//! leads to. `TreeState` wraps a script in a shared handle and implements
//! `GameState` over it: successors are regenerated from the script on every
//! call, each carrying its parent back-reference, and equality compares
//! script identity so the same position is recognized across regenerations.

use std::rc::Rc;

use game_core::{GameState, Outcome, PieceAt, PieceKind, Role};

#[derive(Debug)]
pub(crate) struct Script {
    pub to_move: Role,
    pub pieces: Vec<PieceAt>,
    pub outcome: Option<Outcome>,
    pub halfmoves_left: u32,
    pub children: Vec<Rc<Script>>,
}

impl Script {
    pub fn position(to_move: Role, pieces: Vec<PieceAt>) -> Script {
        Script {
            to_move,
            pieces,
            outcome: None,
            halfmoves_left: 50,
            children: Vec::new(),
        }
    }

    pub fn terminal(to_move: Role, pieces: Vec<PieceAt>, outcome: Outcome) -> Script {
        Script {
            to_move,
            pieces,
            outcome: Some(outcome),
            halfmoves_left: 50,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Script>) -> Script {
        self.children = children.into_iter().map(Rc::new).collect();
        self
    }

    pub fn with_halfmoves(mut self, halfmoves_left: u32) -> Script {
        self.halfmoves_left = halfmoves_left;
        self
    }

    /// Wrap this script as a root state with no parent.
    pub fn root(self) -> TreeState {
        TreeState {
            script: Rc::new(self),
            parent: None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TreeState {
    script: Rc<Script>,
    parent: Option<Rc<TreeState>>,
}

impl PartialEq for TreeState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.script, &other.script)
    }
}

impl GameState for TreeState {
    fn side_to_move(&self) -> Role {
        self.script.to_move
    }

    fn outcome(&self) -> Option<Outcome> {
        self.script.outcome
    }

    fn pieces(&self) -> Vec<PieceAt> {
        self.script.pieces.clone()
    }

    fn successors(&self) -> Vec<TreeState> {
        self.script
            .children
            .iter()
            .map(|child| TreeState {
                script: Rc::clone(child),
                parent: Some(Rc::new(self.clone())),
            })
            .collect()
    }

    fn previous(&self) -> Option<TreeState> {
        self.parent.as_deref().cloned()
    }

    fn halfmoves_until_draw(&self) -> u32 {
        self.script.halfmoves_left
    }
}

pub(crate) fn piece(kind: PieceKind, owner: Role, file: u8, rank: u8) -> PieceAt {
    PieceAt::new(kind, owner, file, rank)
}

/// A bare-kings inventory.
pub(crate) fn kings() -> Vec<PieceAt> {
    vec![
        piece(PieceKind::King, Role::Maximizer, 4, 0),
        piece(PieceKind::King, Role::Minimizer, 4, 7),
    ]
}

/// A childless position whose evaluation is exactly `value`: that many
/// pawns for whichever side the sign favors, spread over distinct files so
/// no doubled-pawn penalty applies.
pub(crate) fn leaf_worth(value: i32) -> Script {
    let owner = if value >= 0 {
        Role::Maximizer
    } else {
        Role::Minimizer
    };
    let pieces = (0..value.unsigned_abs())
        .map(|i| piece(PieceKind::Pawn, owner, i as u8, 3))
        .collect();
    Script::position(Role::Maximizer, pieces)
}

/// `count` pawns for `owner` on distinct files.
pub(crate) fn pawns(owner: Role, count: u8) -> Vec<PieceAt> {
    (0..count).map(|i| piece(PieceKind::Pawn, owner, i, 3)).collect()
}
