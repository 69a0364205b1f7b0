use checkerbot::{Board, Cell, GameState, Move, Piece, Side, Square, list_variants, new_game};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn state_with(side: Side, pieces: &[((i32, i32), Piece)]) -> GameState {
    let mut b = Board::empty(8);
    for &(sq, p) in pieces { b.place(sq.into(), Cell::Piece(p)).unwrap(); }
    GameState::from_board(b, side)
}

fn as_set(moves: Vec<Move>) -> HashSet<Move> { moves.into_iter().collect() }

fn step(r: i32, c: i32) -> Move { Move::Step { to: Square::new(r, c) } }

#[test]
fn black_opening_steps() {
    // Black's turn is simulated by handing the start layout to black
    let start = new_game(&list_variants()[0]);
    let state = GameState::from_board(start.board().clone(), Side::Black);
    assert_eq!(as_set(state.legal_moves(2, 1)), as_set(vec![step(3, 0), step(3, 2)]));
}

#[test]
fn red_man_single_jump() {
    let state = state_with(Side::Red, &[((3, 4), Piece::man(Side::Red)), ((2, 3), Piece::man(Side::Black))]);
    assert_eq!(
        state.legal_moves(3, 4),
        vec![Move::Jump { to: Square::new(1, 2), captured: Square::new(2, 3) }]
    );
}

#[test]
fn king_in_open_board_has_four_steps() {
    let state = state_with(Side::Red, &[((4, 4), Piece::king(Side::Red))]);
    let moves = state.legal_moves(4, 4);
    assert_eq!(as_set(moves.clone()), as_set(vec![step(3, 3), step(3, 5), step(5, 3), step(5, 5)]));
    assert!(moves.iter().all(|m| !m.is_jump()));
}

#[test]
fn capture_suppresses_steps_for_that_piece_only() {
    let state = state_with(Side::Red, &[
        ((5, 2), Piece::man(Side::Red)),
        ((4, 3), Piece::man(Side::Black)),
        ((5, 6), Piece::man(Side::Red)),
    ]);
    let jumper = state.legal_moves(5, 2);
    assert_eq!(jumper, vec![Move::Jump { to: Square::new(3, 4), captured: Square::new(4, 3) }]);
    // Capture availability is per piece: the other man may still step
    assert_eq!(as_set(state.legal_moves(5, 6)), as_set(vec![step(4, 5), step(4, 7)]));
}

#[test]
fn king_captures_backward_and_kings_are_capturable() {
    let state = state_with(Side::Black, &[
        ((2, 3), Piece::king(Side::Black)),
        ((1, 2), Piece::king(Side::Red)),
        ((3, 4), Piece::man(Side::Red)),
    ]);
    let moves = as_set(state.legal_moves(2, 3));
    assert_eq!(moves, as_set(vec![
        Move::Jump { to: Square::new(0, 1), captured: Square::new(1, 2) },
        Move::Jump { to: Square::new(4, 5), captured: Square::new(3, 4) },
    ]));
}

#[test]
fn men_ignore_backward_capture_flag() {
    // Russian rules declare backward captures, but men still only capture forward
    let russian = list_variants().into_iter().find(|v| v.key == "russian").unwrap();
    assert!(russian.backward_capture);
    let state = state_with(Side::Red, &[((3, 4), Piece::man(Side::Red)), ((4, 5), Piece::man(Side::Black))]);
    assert!(state.legal_moves(3, 4).iter().all(|m| !m.is_jump()));
}

#[test]
fn flying_kings_still_move_one_square() {
    let state = state_with(Side::Red, &[((7, 0), Piece::king(Side::Red))]);
    assert_eq!(state.legal_moves(7, 0), vec![step(6, 1)]);
}

#[test]
fn nothing_to_move_yields_empty_set() {
    let state = new_game(&list_variants()[0]);
    assert!(state.legal_moves(3, 3).is_empty(), "empty square");
    assert!(state.legal_moves(2, 1).is_empty(), "black piece on red's turn");
    assert!(state.legal_moves(-1, 0).is_empty(), "off board");
    assert!(state.legal_moves(0, 8).is_empty(), "off board");
    assert!(state.legal_moves(6, 1).is_empty(), "blocked red man");
}

#[test]
fn random_game_positions_keep_dark_squares_and_capture_precedence() {
    use checkerbot::game::PlayNotation;
    use checkerbot::selfplay::{generate_games, SelfPlayParams};

    for v in list_variants() {
        let params = SelfPlayParams { games: 4, max_plies: 80, seed: 2024, variant: v.clone() };
        for g in generate_games(&params) {
            let mut state = new_game(&v);
            for (ply, m) in g.moves.iter().enumerate() {
                let board = state.board();
                assert!(board.pieces().all(|(sq, _)| sq.is_dark()), "{} ply {}: piece on light square", v.key, ply);
                for (sq, piece) in board.pieces().filter(|(_, p)| p.side == state.side_to_move()) {
                    let moves = state.legal_moves(sq.row, sq.col);
                    if moves.iter().any(|m| m.is_jump()) {
                        assert!(moves.iter().all(|m| m.is_jump()), "{} ply {}: {:?} at {} offers steps beside jumps", v.key, ply, piece, sq);
                    }
                }
                let n: PlayNotation = m.parse().unwrap();
                state = state.apply_notation(&n).unwrap();
            }
            assert!(state.board().pieces().all(|(sq, _)| sq.is_dark()));
        }
    }
}
