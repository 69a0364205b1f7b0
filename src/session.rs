//! Click-driven turn handling: pick a piece, then pick where it goes.
//!
//! The first pick selects a piece of the side to move and caches its legal
//! moves. The second pick always clears the selection; if it names one of
//! the cached destinations the move is applied and the turn passes.

use log::{debug, info};

use crate::board::Square;
use crate::game::{GameState, Play};
use crate::movegen::Move;
use crate::variants::Ruleset;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    AwaitingSelection,
    AwaitingDestination { from: Square, moves: Vec<Move> },
}

/// What a single pick did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// Empty square, opponent piece or off-board square while nothing was selected
    Ignored,
    Selected { from: Square, moves: Vec<Move> },
    Moved(Play),
    /// Destination matched no legal move; selection dropped, board untouched
    Deselected,
}

#[derive(Clone, Debug)]
pub struct Session {
    ruleset: Ruleset,
    state: GameState,
    selection: Selection,
}

impl Session {
    pub fn new(ruleset: Ruleset) -> Self {
        let state = GameState::new(&ruleset);
        Self { ruleset, state, selection: Selection::AwaitingSelection }
    }

    pub fn ruleset(&self) -> &Ruleset { &self.ruleset }
    pub fn state(&self) -> &GameState { &self.state }
    pub fn selection(&self) -> &Selection { &self.selection }

    /// Switch variant. Board, turn and selection all start over.
    pub fn select_variant(&mut self, ruleset: Ruleset) {
        info!("variant {} ({}x{})", ruleset.key, ruleset.board_dimension, ruleset.board_dimension);
        *self = Session::new(ruleset);
    }

    /// Restart the current variant
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.ruleset);
        self.selection = Selection::AwaitingSelection;
    }

    /// Replace the position wholesale (selection is dropped)
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.selection = Selection::AwaitingSelection;
    }

    pub fn pick(&mut self, row: i32, col: i32) -> PickOutcome {
        let sq = Square::new(row, col);
        match std::mem::replace(&mut self.selection, Selection::AwaitingSelection) {
            Selection::AwaitingSelection => {
                if self.state.check_selectable(sq).is_err() { return PickOutcome::Ignored; }
                let moves = self.state.legal_moves(row, col);
                debug!("selected {} with {} moves", sq, moves.len());
                self.selection = Selection::AwaitingDestination { from: sq, moves: moves.clone() };
                PickOutcome::Selected { from: sq, moves }
            }
            Selection::AwaitingDestination { from, moves } => {
                let Some(mv) = moves.into_iter().find(|m| m.to() == sq) else {
                    debug!("deselected {}", from);
                    return PickOutcome::Deselected;
                };
                match self.state.apply_move(from, mv) {
                    Ok(next) => {
                        self.state = next;
                        PickOutcome::Moved(Play { from, mv })
                    }
                    Err(e) => {
                        debug!("deselected {}: {}", from, e);
                        PickOutcome::Deselected
                    }
                }
            }
        }
    }
}
