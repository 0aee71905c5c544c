use super::super::{Piece, Position, Square};

impl Position {
    pub(crate) fn knight_geometry(&self, piece: &Piece, target: Square) -> bool {
        let (dx, dy) = piece.square.delta(target);
        matches!((dx.abs(), dy.abs()), (2, 1) | (1, 2))
    }
}
