// Single-piece move generation.
//
// Every piece looks exactly one square (step) and two squares (jump) along
// each of its diagonals. Men only look forward, kings look all four ways.
// The ruleset's flying-king and backward-capture flags do not widen this.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::{Board, Piece, Rank, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Step { to: Square },
    Jump { to: Square, captured: Square },
}

impl Move {
    pub fn to(&self) -> Square {
        match *self {
            Move::Step { to } | Move::Jump { to, .. } => to,
        }
    }

    pub fn captured(&self) -> Option<Square> {
        match *self {
            Move::Jump { captured, .. } => Some(captured),
            Move::Step { .. } => None,
        }
    }

    pub fn is_jump(&self) -> bool { matches!(self, Move::Jump { .. }) }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step { to } => write!(f, "-{}", to),
            Move::Jump { to, captured } => write!(f, "x{} (over {})", to, captured),
        }
    }
}

pub const KING_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const RED_MAN_DIRECTIONS: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
const BLACK_MAN_DIRECTIONS: [(i32, i32); 2] = [(1, -1), (1, 1)];

/// Diagonals a piece scans, in scan order
pub fn directions(piece: Piece) -> &'static [(i32, i32)] {
    match (piece.rank, piece.side) {
        (Rank::King, _) => &KING_DIRECTIONS,
        (Rank::Man, Side::Red) => &RED_MAN_DIRECTIONS,
        (Rank::Man, Side::Black) => &BLACK_MAN_DIRECTIONS,
    }
}

/// Jumps over adjacent opposing pieces, in direction-scan order
pub fn jumps(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else { return Vec::new() };
    directions(piece)
        .iter()
        .filter_map(|&(dr, dc)| {
            let over = from.offset(dr, dc);
            let land = from.offset(2 * dr, 2 * dc);
            let victim = board.piece_at(over)?;
            (victim.side != piece.side && board.is_empty_at(land)).then_some(Move::Jump { to: land, captured: over })
        })
        .collect()
}

/// Non-capturing steps onto adjacent empty squares
pub fn steps(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else { return Vec::new() };
    directions(piece)
        .iter()
        .map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.is_empty_at(to))
        .map(|to| Move::Step { to })
        .collect()
}

/// Legal destinations for the piece on `from`, regardless of whose turn it is.
/// If the piece has any jump, only its jumps are returned.
/// An empty or off-board square yields no moves.
pub fn piece_moves(board: &Board, from: Square) -> Vec<Move> {
    let jumps = jumps(board, from);
    if !jumps.is_empty() { return jumps; }
    steps(board, from)
}
