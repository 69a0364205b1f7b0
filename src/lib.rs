// Rules engine for checkers/draughts variants
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod protocol;
pub mod selfplay;
pub mod session;
pub mod variants;

pub use board::{Board, Cell, Piece, Rank, Side, Square};
pub use error::{LayoutError, MoveError, NotationError, VariantError};
pub use game::{apply_move, legal_moves, new_game, GameState, Play};
pub use movegen::Move;
pub use session::{PickOutcome, Selection, Session};
pub use variants::{list_variants, Ruleset};
