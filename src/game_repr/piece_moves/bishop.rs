use super::super::{Piece, Position, Square};

impl Position {
    pub(crate) fn bishop_geometry(&self, piece: &Piece, target: Square) -> bool {
        let (dx, dy) = piece.square.delta(target);
        dx != 0 && dx.abs() == dy.abs() && self.path_clear(piece.square, target)
    }
}
