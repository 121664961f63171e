use super::*;

// ==================== KIWIPETE PERFT TESTS ====================
// Position 2: Tests castling, en passant, promotions
// r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -

#[test]
fn test_perft_kiwipete_depth_1() {
    let pos = KIWIPETE.build();
    assert_eq!(pos.perft(1), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    let pos = KIWIPETE.build();
    assert_eq!(pos.perft(2), 2039);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    let pos = KIWIPETE.build();
    assert_eq!(pos.perft(3), 97862);
}

#[test]
#[ignore]
fn test_perft_kiwipete_depth_4() {
    let pos = KIWIPETE.build();
    assert_eq!(pos.perft_parallel(4), 4085603);
}

#[test]
fn test_kiwipete_move_kinds() {
    let mut pos = KIWIPETE.build();
    let moves = pos.legal_moves();

    assert_eq!(count_moves(&moves, |m| m.is_castle()), 2);
    assert_eq!(count_moves(&moves, |m| m.is_capture()), 8);
}
