// Board representation: a square grid of cells, only dark squares ((row+col) odd) are ever occupied.
pub mod layout;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MoveError, NotationError};
use crate::variants::Ruleset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row direction a man of this side moves in (Red plays up the board, Black down)
    pub fn forward(self) -> i32 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Row on which a man of this side is crowned
    pub fn promotion_row(self, dimension: usize) -> i32 {
        match self {
            Side::Red => 0,
            Side::Black => dimension as i32 - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Side::Red => "red", Side::Black => "black" })
    }
}

impl FromStr for Side {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Side::Red),
            "black" | "b" => Ok(Side::Black),
            other => Err(format!("unknown side: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub const fn new(side: Side, rank: Rank) -> Self { Self { side, rank } }
    pub const fn man(side: Side) -> Self { Self::new(side, Rank::Man) }
    pub const fn king(side: Side) -> Self { Self::new(side, Rank::King) }
    pub fn is_king(&self) -> bool { self.rank == Rank::King }
    pub fn crowned(self) -> Self { Self::king(self.side) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Piece),
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Piece(p) => Some(p),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool { self == Cell::Empty }
}

impl From<Piece> for Cell {
    fn from(p: Piece) -> Self { Cell::Piece(p) }
}

/// Board coordinate. Signed so that off-board neighbours can be expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self { Self { row, col } }

    pub fn offset(self, dr: i32, dc: i32) -> Square { Square::new(self.row + dr, self.col + dc) }

    pub fn is_dark(self) -> bool { (self.row + self.col).rem_euclid(2) == 1 }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self { Square::new(row, col) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{},{}", self.row, self.col) }
}

impl FromStr for Square {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || NotationError::Square(s.to_string());
        let (r, c) = s.trim().split_once(',').ok_or_else(err)?;
        let row = r.trim().parse::<i32>().map_err(|_| err())?;
        let col = c.trim().parse::<i32>().map_err(|_| err())?;
        Ok(Square::new(row, col))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn empty(dimension: usize) -> Self {
        Self { dimension, cells: vec![Cell::Empty; dimension * dimension] }
    }

    /// Starting position: Black men fill the first `initial_rows` rows, Red men the last ones.
    pub fn initial(ruleset: &Ruleset) -> Self {
        let n = ruleset.board_dimension;
        let rows = ruleset.initial_rows;
        let mut board = Self::empty(n);
        for row in 0..n {
            let side = if row < rows {
                Side::Black
            } else if row >= n.saturating_sub(rows) {
                Side::Red
            } else {
                continue;
            };
            for col in 0..n {
                if (row + col) % 2 == 1 { board.cells[row * n + col] = Cell::Piece(Piece::man(side)); }
            }
        }
        board
    }

    pub fn dimension(&self) -> usize { self.dimension }

    pub fn contains(&self, sq: Square) -> bool {
        let n = self.dimension as i32;
        sq.row >= 0 && sq.row < n && sq.col >= 0 && sq.col < n
    }

    fn index(&self, sq: Square) -> Option<usize> {
        if self.contains(sq) { Some(sq.row as usize * self.dimension + sq.col as usize) } else { None }
    }

    /// Cell content, or None when the square is off the board
    pub fn get(&self, sq: Square) -> Option<Cell> { self.index(sq).map(|i| self.cells[i]) }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> { self.get(sq).and_then(Cell::piece) }

    pub fn is_empty_at(&self, sq: Square) -> bool { self.get(sq) == Some(Cell::Empty) }

    /// Put a cell on the board. Pieces may only go on dark squares.
    pub fn place(&mut self, sq: Square, cell: Cell) -> Result<(), MoveError> {
        let invalid = MoveError::InvalidPosition { row: sq.row, col: sq.col };
        let i = self.index(sq).ok_or(invalid.clone())?;
        if !cell.is_empty() && !sq.is_dark() { return Err(invalid); }
        self.cells[i] = cell;
        Ok(())
    }

    // Callers have already bounds-checked `sq` through move generation.
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        if let Some(i) = self.index(sq) { self.cells[i] = cell; }
    }

    /// All squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let n = self.dimension as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Square::new(row, col)))
    }

    /// Occupied squares with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn count(&self, side: Side) -> usize { self.pieces().filter(|(_, p)| p.side == side).count() }

    /// Multi-line grid for terminals: `r`/`b` men, `R`/`B` kings, `.` dark empty, ` ` light.
    pub fn pretty(&self) -> String {
        let n = self.dimension as i32;
        let mut out = String::new();
        out.push_str("   ");
        for col in 0..n { out.push_str(&format!("{:>2}", col)); }
        out.push('\n');
        for row in 0..n {
            out.push_str(&format!("{:>2} ", row));
            for col in 0..n {
                let sq = Square::new(row, col);
                let ch = match self.piece_at(sq) {
                    Some(p) => layout::piece_char(p),
                    None if sq.is_dark() => '.',
                    None => ' ',
                };
                out.push(' ');
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_notation_parses() {
        assert_eq!("3,4".parse::<Square>().unwrap(), Square::new(3, 4));
        assert_eq!(" -1 , 2 ".parse::<Square>().unwrap(), Square::new(-1, 2));
        assert!("34".parse::<Square>().is_err());
    }

    #[test]
    fn place_rejects_light_and_offboard_squares() {
        let mut b = Board::empty(8);
        assert!(b.place(Square::new(0, 0), Piece::man(Side::Red).into()).is_err());
        assert!(b.place(Square::new(8, 1), Piece::man(Side::Red).into()).is_err());
        assert!(b.place(Square::new(0, 1), Piece::man(Side::Red).into()).is_ok());
        assert!(b.place(Square::new(0, 0), Cell::Empty).is_ok());
        assert_eq!(b.count(Side::Red), 1);
    }

    #[test]
    fn promotion_rows() {
        assert_eq!(Side::Red.promotion_row(8), 0);
        assert_eq!(Side::Black.promotion_row(10), 9);
    }
}
