//! FEN-like text layout for boards.
//!
//! Rows are listed from row 0 down to row N-1 and separated by `/`. Inside a
//! row `r`/`b` are men, `R`/`B` kings, `.` is an empty cell and a decimal
//! number stands for that many empty cells. The American start position is
//! `1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1`.

use std::fmt;
use std::str::FromStr;

use super::{Board, Cell, Piece, Rank, Side, Square};
use crate::error::LayoutError;

pub fn piece_char(p: Piece) -> char {
    match (p.side, p.rank) {
        (Side::Red, Rank::Man) => 'r',
        (Side::Red, Rank::King) => 'R',
        (Side::Black, Rank::Man) => 'b',
        (Side::Black, Rank::King) => 'B',
    }
}

fn char_piece(c: char) -> Option<Piece> {
    match c {
        'r' => Some(Piece::man(Side::Red)),
        'R' => Some(Piece::king(Side::Red)),
        'b' => Some(Piece::man(Side::Black)),
        'B' => Some(Piece::king(Side::Black)),
        _ => None,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension() as i32;
        for row in 0..n {
            if row > 0 { f.write_str("/")?; }
            let mut run = 0;
            for col in 0..n {
                match self.piece_at(Square::new(row, col)) {
                    Some(p) => {
                        if run > 0 { write!(f, "{}", run)?; run = 0; }
                        write!(f, "{}", piece_char(p))?;
                    }
                    None => run += 1,
                }
            }
            if run > 0 { write!(f, "{}", run)?; }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        let n = rows.len();
        let mut board = Board::empty(n);
        for (r, text) in rows.iter().enumerate() {
            let mut cells: Vec<Cell> = Vec::with_capacity(n);
            let mut chars = text.chars().peekable();
            while let Some(c) = chars.next() {
                if let Some(d) = c.to_digit(10) {
                    let mut run = Some(d as usize);
                    while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                        run = run.and_then(|v| v.checked_mul(10)).and_then(|v| v.checked_add(next as usize));
                        chars.next();
                    }
                    // Runs never extend past the row width, however many digits they carry.
                    let width = run.and_then(|v| v.checked_add(cells.len())).filter(|&w| w <= n);
                    let Some(width) = width else {
                        let found = run.map_or(usize::MAX, |v| v.saturating_add(cells.len()));
                        return Err(LayoutError::RowWidth { row: r, expected: n, found });
                    };
                    cells.resize(width, Cell::Empty);
                } else if c == '.' {
                    cells.push(Cell::Empty);
                } else {
                    cells.push(Cell::Piece(char_piece(c).ok_or(LayoutError::BadChar(c))?));
                }
            }
            if cells.len() != n {
                return Err(LayoutError::RowWidth { row: r, expected: n, found: cells.len() });
            }
            for (c, cell) in cells.into_iter().enumerate() {
                let sq = Square::new(r as i32, c as i32);
                if !cell.is_empty() && !sq.is_dark() { return Err(LayoutError::LightSquare { row: r, col: c }); }
                board.set(sq, cell);
            }
        }
        Ok(board)
    }
}

/// Parse a layout and require a specific board dimension.
pub fn parse_sized(s: &str, dimension: usize) -> Result<Board, LayoutError> {
    let board: Board = s.parse()?;
    if board.dimension() != dimension {
        return Err(LayoutError::RowCount { expected: dimension, found: board.dimension() });
    }
    Ok(board)
}
