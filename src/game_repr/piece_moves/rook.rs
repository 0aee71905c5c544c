use super::super::{Piece, Position, Square};

impl Position {
    pub(crate) fn rook_geometry(&self, piece: &Piece, target: Square) -> bool {
        let (dx, dy) = piece.square.delta(target);
        // exactly one axis changes
        (dx == 0) != (dy == 0) && self.path_clear(piece.square, target)
    }
}
