use super::*;
use crate::config::RulesConfig;

// ==================== HELPER FUNCTIONS ====================

/// Parses "e4"-style names; test-only convenience
pub fn sq(name: &str) -> Square {
    let bytes = name.as_bytes();
    Square::new((bytes[0] - b'a') as i8, (bytes[1] - b'1') as i8).expect("square on board")
}

pub fn squares(names: &[&str]) -> Vec<Square> {
    let mut squares: Vec<Square> = names.iter().map(|n| sq(n)).collect();
    squares.sort();
    squares
}

/// Empty board, White to move, default rules evaluated sequentially
pub fn empty_board() -> Position {
    Position::empty(RulesConfig::sequential())
}

/// Empty board with standard castling rules
pub fn strict_board() -> Position {
    Position::empty(RulesConfig::standard().with_parallel(false))
}

pub fn place(pos: &mut Position, piece_type: Type, owner: Player, at: &str) -> PieceId {
    pos.place(piece_type, owner, sq(at)).expect("square is free")
}

pub fn can_move(pos: &Position, from: &str, to: &str) -> bool {
    let piece = *pos.piece_at(sq(from));
    pos.verify_move(&piece, sq(to), true)
}

/// Sorted legal destinations of the piece on `from`
pub fn targets(pos: &Position, from: &str) -> Vec<Square> {
    let piece = *pos.piece_at(sq(from));
    let mut targets = pos.legal_targets(&piece).to_vec();
    targets.sort();
    targets
}

/// Executes a move without verifying it
pub fn play(pos: &mut Position, from: &str, to: &str) {
    let id = pos.piece_at(sq(from)).id;
    pos.apply_move(id, sq(to), true).expect("move applies");
}

// ==================== TEST MODULES ====================

mod en_passant;
mod check_detection;
