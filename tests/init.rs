use checkerbot::{list_variants, new_game, Cell, Piece, Rank, Side, Square};

#[test]
fn new_game_layout_holds_for_every_variant() {
    for v in list_variants() {
        let state = new_game(&v);
        let board = state.board();
        let n = v.board_dimension as i32;
        let rows = v.initial_rows as i32;
        assert_eq!(board.dimension(), v.board_dimension);
        assert_eq!(state.side_to_move(), Side::Red, "{} should start with red", v.key);
        for sq in board.squares() {
            let cell = board.get(sq).unwrap();
            if !sq.is_dark() {
                assert_eq!(cell, Cell::Empty, "{}: light square {} occupied", v.key, sq);
                continue;
            }
            let expected = if sq.row < rows {
                Cell::Piece(Piece::man(Side::Black))
            } else if sq.row >= n - rows {
                Cell::Piece(Piece::man(Side::Red))
            } else {
                Cell::Empty
            };
            assert_eq!(cell, expected, "{}: unexpected content at {}", v.key, sq);
        }
        let per_side = v.initial_rows * v.board_dimension / 2;
        assert_eq!(board.count(Side::Red), per_side);
        assert_eq!(board.count(Side::Black), per_side);
        assert!(board.pieces().all(|(_, p)| p.rank == Rank::Man));
    }
}

#[test]
fn american_start_scenario() {
    let state = new_game(&list_variants()[0]);
    let b = state.board();
    assert_eq!(b.piece_at(Square::new(2, 1)), Some(Piece::man(Side::Black)));
    assert_eq!(b.piece_at(Square::new(5, 0)), Some(Piece::man(Side::Red)));
    assert_eq!(b.get(Square::new(3, 3)), Some(Cell::Empty));
}
