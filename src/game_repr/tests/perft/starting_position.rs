use super::*;

#[test]
fn test_perft_starting_position_depth_0() {
    let pos = Position::default();
    assert_eq!(pos.perft(0), 1);
}

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::default();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::default();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::default();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let pos = Position::default();
    assert_eq!(pos.perft(4), 197281);
}

#[test]
#[ignore]
fn test_perft_starting_position_depth_5() {
    let pos = Position::default();
    assert_eq!(pos.perft(5), 4865609);
}

#[test]
fn test_perft_parallel_matches_serial() {
    let pos = Position::default();
    assert_eq!(pos.perft_parallel(3), 8902);
    assert_eq!(pos.perft_parallel(1), 20);
}

#[test]
fn test_divide_starting_position() {
    let pos = Position::default();
    let counts = pos.divide(2);

    assert_eq!(counts.len(), 20);
    assert!(counts.iter().all(|(_, n)| *n == 20));
    assert_eq!(counts.first().map(|(m, _)| m.to_string()), Some("a2a3".to_string()));
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<u64>(), 400);
}

#[test]
fn test_perft_leaves_position_untouched() {
    let pos = Position::default();
    pos.perft(3);
    assert_eq!(pos, Position::default());
    assert_eq!(pos.history().count(), 0);
}
