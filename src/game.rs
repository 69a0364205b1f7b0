use log::debug;
use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Cell, Rank, Side, Square};
use crate::error::{MoveError, NotationError};
use crate::movegen::{self, Move};
use crate::variants::Ruleset;

/// Board plus side to move. Values are never mutated after construction:
/// applying a move produces a new state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
}

/// A move bound to the square it starts from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Play {
    pub from: Square,
    pub mv: Move,
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mv {
            Move::Step { to } => write!(f, "{}-{}", self.from, to),
            Move::Jump { to, .. } => write!(f, "{}x{}", self.from, to),
        }
    }
}

/// Source and destination of a play as written, before it is matched against a position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayNotation {
    pub from: Square,
    pub to: Square,
    pub capture: bool,
}

impl FromStr for PlayNotation {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (sep, capture) = if s.contains('x') { ('x', true) } else { ('-', false) };
        // Leading '-' belongs to a negative row, so split on the last separator after the first char.
        let idx = s.char_indices().skip(1).filter(|&(_, c)| c == sep).map(|(i, _)| i).last()
            .ok_or_else(|| NotationError::Play(s.to_string()))?;
        let from = s[..idx].parse().map_err(|_| NotationError::Play(s.to_string()))?;
        let to = s[idx + 1..].parse().map_err(|_| NotationError::Play(s.to_string()))?;
        Ok(PlayNotation { from, to, capture })
    }
}

impl GameState {
    /// Fresh game for a ruleset: starting layout, Red to move.
    pub fn new(ruleset: &Ruleset) -> Self {
        Self { board: Board::initial(ruleset), side_to_move: Side::Red }
    }

    /// Arbitrary position, e.g. parsed from a layout string.
    pub fn from_board(board: Board, side_to_move: Side) -> Self { Self { board, side_to_move } }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Side { self.side_to_move }

    /// Check that `from` holds a piece of the side to move
    pub fn check_selectable(&self, from: Square) -> Result<(), MoveError> {
        if !self.board.contains(from) {
            return Err(MoveError::InvalidPosition { row: from.row, col: from.col });
        }
        match self.board.piece_at(from) {
            Some(p) if p.side == self.side_to_move => Ok(()),
            _ => Err(MoveError::WrongSide { row: from.row, col: from.col }),
        }
    }

    /// Legal moves for the piece on (row, col). Empty when the square is off
    /// the board, empty, or holds a piece of the side not on move.
    pub fn legal_moves(&self, row: i32, col: i32) -> Vec<Move> {
        let from = Square::new(row, col);
        if self.check_selectable(from).is_err() { return Vec::new(); }
        movegen::piece_moves(&self.board, from)
    }

    /// Every play available to the side to move, sources in row-major order.
    pub fn plays(&self) -> Vec<Play> {
        self.board
            .pieces()
            .filter(|(_, p)| p.side == self.side_to_move)
            .flat_map(|(from, _)| movegen::piece_moves(&self.board, from).into_iter().map(move |mv| Play { from, mv }))
            .collect()
    }

    /// Commit `mv` from `from`. The move must be one `legal_moves` offers for
    /// that square; otherwise the state is left as is and an error returned.
    pub fn apply_move(&self, from: Square, mv: Move) -> Result<GameState, MoveError> {
        self.check_selectable(from)?;
        if !movegen::piece_moves(&self.board, from).contains(&mv) {
            debug!("rejected {} {} for {}", from, mv, self.side_to_move);
            return Err(MoveError::IllegalMove { from, to: mv.to() });
        }
        Ok(self.commit(from, mv))
    }

    /// Commit the play whose source and destination match, looked up among the legal moves.
    pub fn apply_play(&self, from: Square, to: Square) -> Result<GameState, MoveError> {
        self.check_selectable(from)?;
        let mv = movegen::piece_moves(&self.board, from)
            .into_iter()
            .find(|m| m.to() == to)
            .ok_or(MoveError::IllegalMove { from, to })?;
        Ok(self.commit(from, mv))
    }

    /// Commit a written play. A jump must be written with `x` and a step with `-`.
    pub fn apply_notation(&self, notation: &PlayNotation) -> Result<GameState, MoveError> {
        let PlayNotation { from, to, capture } = *notation;
        self.check_selectable(from)?;
        let mv = movegen::piece_moves(&self.board, from)
            .into_iter()
            .find(|m| m.to() == to && m.is_jump() == capture)
            .ok_or(MoveError::IllegalMove { from, to })?;
        Ok(self.commit(from, mv))
    }

    fn commit(&self, from: Square, mv: Move) -> GameState {
        let mut board = self.board.clone();
        let Some(mut piece) = board.piece_at(from) else { return self.clone() };
        board.set(from, Cell::Empty);
        if let Some(captured) = mv.captured() { board.set(captured, Cell::Empty); }
        let to = mv.to();
        if piece.rank == Rank::Man && to.row == piece.side.promotion_row(board.dimension()) {
            piece = piece.crowned();
            debug!("{} crowned at {}", piece.side, to);
        }
        board.set(to, Cell::Piece(piece));
        debug!("{} played {}", self.side_to_move, Play { from, mv });
        GameState { board, side_to_move: self.side_to_move.opponent() }
    }
}

/// Fresh game for `ruleset`
pub fn new_game(ruleset: &Ruleset) -> GameState { GameState::new(ruleset) }

/// Legal moves for the piece at (row, col); empty for off-board, empty or wrong-side squares
pub fn legal_moves(state: &GameState, row: i32, col: i32) -> Vec<Move> { state.legal_moves(row, col) }

/// Apply `mv` from `from`, returning the new state or the reason it was refused
pub fn apply_move(state: &GameState, mv: Move, from: Square) -> Result<GameState, MoveError> { state.apply_move(from, mv) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_notation_parses_steps_and_jumps() {
        let p: PlayNotation = "5,0-4,1".parse().unwrap();
        assert_eq!(p, PlayNotation { from: Square::new(5, 0), to: Square::new(4, 1), capture: false });
        let j: PlayNotation = "3,4x1,2".parse().unwrap();
        assert!(j.capture);
        assert_eq!(j.to, Square::new(1, 2));
        assert!("3,4".parse::<PlayNotation>().is_err());
        assert!("a-b".parse::<PlayNotation>().is_err());
    }

    #[test]
    fn play_display_matches_notation() {
        let p = Play { from: Square::new(3, 4), mv: Move::Jump { to: Square::new(1, 2), captured: Square::new(2, 3) } };
        assert_eq!(p.to_string(), "3,4x1,2");
        let back: PlayNotation = p.to_string().parse().unwrap();
        assert_eq!((back.from, back.to), (p.from, p.mv.to()));
    }
}
