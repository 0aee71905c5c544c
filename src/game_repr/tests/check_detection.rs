use super::*;
use crate::error::ChessError;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_rook_gives_check() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "e1");
    place(&mut pos, Type::Rook, Player::Black, "e8");

    assert!(pos.is_in_check(Player::White).unwrap());
}

#[test]
fn test_blocked_rook_gives_no_check() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "e1");
    place(&mut pos, Type::Knight, Player::White, "e4");
    place(&mut pos, Type::Rook, Player::Black, "e8");

    assert!(!pos.is_in_check(Player::White).unwrap());
}

#[test]
fn test_missing_king_is_an_error() {
    let mut pos = empty_board();
    place(&mut pos, Type::Rook, Player::Black, "e8");

    assert_eq!(
        pos.is_in_check(Player::White),
        Err(ChessError::NoKingPresent(Player::White))
    );
}

#[test]
fn test_pinned_bishop_cannot_leave_the_line() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "e1");
    place(&mut pos, Type::Bishop, Player::White, "e2");
    place(&mut pos, Type::Rook, Player::Black, "e8");

    assert!(targets(&pos, "e2").is_empty());
}

#[test]
fn test_pinned_rook_slides_along_the_pin() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "e1");
    place(&mut pos, Type::Rook, Player::White, "e2");
    place(&mut pos, Type::Rook, Player::Black, "e8");

    assert_eq!(
        targets(&pos, "e2"),
        squares(&["e3", "e4", "e5", "e6", "e7", "e8"])
    );
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "e1");
    place(&mut pos, Type::Rook, Player::Black, "d8");

    assert!(!can_move(&pos, "e1", "d1"));
    assert!(!can_move(&pos, "e1", "d2"));
    assert!(can_move(&pos, "e1", "e2"));
    assert!(can_move(&pos, "e1", "f2"));
}

#[test]
fn test_king_cannot_take_protected_piece() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "e1");
    place(&mut pos, Type::Queen, Player::Black, "e2");
    place(&mut pos, Type::Rook, Player::Black, "e8");
    assert!(!can_move(&pos, "e1", "e2"));

    let mut lone = empty_board();
    place(&mut lone, Type::King, Player::White, "e1");
    place(&mut lone, Type::Queen, Player::Black, "e2");
    assert!(can_move(&lone, "e1", "e2"));
}

#[test]
fn test_must_answer_check() {
    let mut pos = empty_board();
    place(&mut pos, Type::King, Player::White, "e1");
    place(&mut pos, Type::Knight, Player::White, "b1");
    place(&mut pos, Type::Rook, Player::White, "a4");
    place(&mut pos, Type::Rook, Player::Black, "e8");

    // knight cannot block the e-file, the rook can
    assert!(targets(&pos, "b1").is_empty());
    assert_eq!(targets(&pos, "a4"), squares(&["e4"]));
}

#[test]
fn test_legal_moves_never_leave_own_king_attacked() {
    let mut pos = Position::standard(RulesConfig::sequential());
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("d1", "h5"), ("b8", "c6"), ("f1", "c4")] {
        play(&mut pos, from, to);
    }
    // black to move, facing the Qxf7 threat
    for piece in pos.pieces_of(Player::Black) {
        for target in pos.legal_targets(piece) {
            let mut after = pos.clone();
            after.apply_move(piece.id, target, false).unwrap();
            assert!(
                !after.is_in_check(Player::Black).unwrap(),
                "{:?} {} -> {} leaves the king attacked",
                piece.piece_type,
                piece.square,
                target
            );
        }
    }
}
