use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_push() {
    let mut pos = Position::default();

    let moves = pos.legal_moves_from(sq("e2"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e2", "e3"));
    assert!(has_move(&moves, "e2", "e4"));
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let mut pos = Position::default();
    pos.set_side_to_move(Color::Black);

    let moves = pos.legal_moves_from(sq("e7"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e7", "e6"));
    assert!(has_move(&moves, "e7", "e5"));
}

#[test]
fn test_no_double_push_off_start_rank() {
    let mut pos = kings_only("a1", "h8");
    place_piece(&mut pos, "e3", Piece::new(Color::White, Type::Pawn));

    let moves = pos.legal_moves_from(sq("e3"));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "e3", "e4"));
}

#[test]
fn test_pawn_blocked_directly() {
    let mut pos = kings_only("a1", "h8");
    place_piece(&mut pos, "e2", Piece::new(Color::White, Type::Pawn));
    place_piece(&mut pos, "e3", Piece::new(Color::Black, Type::Knight));

    let moves = pos.legal_moves_from(sq("e2"));
    assert!(moves.is_empty(), "Blocked pawn cannot push at all");
}

#[test]
fn test_pawn_double_push_blocked_on_target() {
    let mut pos = kings_only("a1", "h8");
    place_piece(&mut pos, "e2", Piece::new(Color::White, Type::Pawn));
    place_piece(&mut pos, "e4", Piece::new(Color::Black, Type::Knight));

    let moves = pos.legal_moves_from(sq("e2"));
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "e2", "e3"));
}

#[test]
fn test_pawn_diagonal_captures() {
    let mut pos = kings_only("a1", "h8");
    place_piece(&mut pos, "e4", Piece::new(Color::White, Type::Pawn));
    place_piece(&mut pos, "d5", Piece::new(Color::Black, Type::Pawn));
    place_piece(&mut pos, "f5", Piece::new(Color::Black, Type::Bishop));

    let moves = pos.legal_moves_from(sq("e4"));
    assert_eq!(moves.len(), 3);
    assert!(has_move(&moves, "e4", "e5"));
    assert!(has_move(&moves, "e4", "d5"));
    assert!(has_move(&moves, "e4", "f5"));
    assert_eq!(count_moves(&moves, |m| m.is_capture()), 2);
}

#[test]
fn test_pawn_does_not_capture_own_piece_or_straight_ahead() {
    let mut pos = kings_only("a1", "h8");
    place_piece(&mut pos, "e4", Piece::new(Color::White, Type::Pawn));
    place_piece(&mut pos, "d5", Piece::new(Color::White, Type::Knight));
    place_piece(&mut pos, "e5", Piece::new(Color::Black, Type::Knight));

    let moves = pos.legal_moves_from(sq("e4"));
    assert!(moves.is_empty());
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut pos = Position::default();

    pos.play_coordinate("e2e4").unwrap();
    assert_eq!(pos.en_passant(), Some(sq("e3")));
    assert!(pos.is_en_passant_target(sq("e4")));

    pos.play_coordinate("g8f6").unwrap();
    assert_eq!(pos.en_passant(), None, "Target lives for one ply only");
    assert!(!pos.is_en_passant_target(sq("e4")));
}
