use super::*;

// ==================== EN PASSANT TESTS ====================

fn en_passant_setup() -> Position {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "a1");
    place(&mut pos, Type::King, Player::Black, "h8");
    place(&mut pos, Type::PAWN, Player::White, "e4");
    place(&mut pos, Type::PAWN, Player::Black, "d7");
    // a pawn that has already moved, so e5 -> e7 is not on offer
    play(&mut pos, "e4", "e5");
    pos
}

#[test]
fn test_en_passant_requires_double_step() {
    let mut pos = en_passant_setup();
    assert!(!can_move(&pos, "e5", "d6"), "nothing to take yet");

    play(&mut pos, "d7", "d6");
    assert!(!can_move(&pos, "e5", "d7"), "no capture behind a single step");
    assert!(can_move(&pos, "e5", "d6"), "ordinary capture");
}

#[test]
fn test_en_passant_legal_after_double_step() {
    let mut pos = en_passant_setup();
    play(&mut pos, "d7", "d5");

    assert!(can_move(&pos, "e5", "d6"));
    assert_eq!(targets(&pos, "e5"), squares(&["d6", "e6"]));

    let pawn = *pos.piece_at(sq("e5"));
    assert_eq!(pos.move_meta(&pawn, sq("d6")), MoveMeta::Special);
    assert_eq!(pos.move_meta(&pawn, sq("e6")), MoveMeta::Default);
}

#[test]
fn test_en_passant_removes_pawn_behind_target() {
    let mut pos = en_passant_setup();
    let black_pawn = place(&mut pos, Type::PAWN, Player::Black, "c7");
    play(&mut pos, "c7", "c5");
    let d_pawn = pos.piece_at(sq("d7")).id;
    assert_ne!(d_pawn, black_pawn);

    let before = pos.live_count();
    // c5 is not beside e5
    assert!(!can_move(&pos, "e5", "d6"));

    play(&mut pos, "d7", "d5");
    play(&mut pos, "e5", "d6");

    assert_eq!(pos.piece_at(sq("d6")).owner, Player::White);
    assert!(pos.piece_at(sq("d5")).is_none(), "the pawn on d5 is taken");
    assert_eq!(pos.live_count(), before - 1);

    let taken = pos.captured().last().expect("a capture happened");
    assert_eq!(taken.id, d_pawn);
    assert!(taken.is_captured);
    assert!(pos.piece(black_pawn).is_some(), "the c-pawn is untouched");
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut pos = en_passant_setup();
    play(&mut pos, "d7", "d5");
    play(&mut pos, "a1", "a2");

    assert!(!can_move(&pos, "e5", "d6"));
}

#[test]
fn test_en_passant_black_captures_down() {
    let mut pos = empty_board();
    place(&mut pos, Type::PAWN, Player::Black, "d4");
    place(&mut pos, Type::PAWN, Player::White, "c2");
    play(&mut pos, "c2", "c4");

    assert!(can_move(&pos, "d4", "c3"));
    play(&mut pos, "d4", "c3");
    assert!(pos.piece_at(sq("c4")).is_none());
    assert_eq!(pos.piece_at(sq("c3")).owner, Player::Black);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "a5");
    place(&mut pos, Type::PAWN, Player::White, "b5");
    place(&mut pos, Type::PAWN, Player::Black, "c7");
    place(&mut pos, Type::Rook, Player::Black, "h5");
    place(&mut pos, Type::King, Player::Black, "h8");

    play(&mut pos, "c7", "c5");

    // both pawns leave the fifth rank, opening it for the rook
    assert!(!can_move(&pos, "b5", "c6"));
    assert!(can_move(&pos, "b5", "b6"), "the pawn is not pinned otherwise");
}
