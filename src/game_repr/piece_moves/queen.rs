use super::super::{Piece, Position, Square};

impl Position {
    pub(crate) fn queen_geometry(&self, piece: &Piece, target: Square) -> bool {
        self.rook_geometry(piece, target) || self.bishop_geometry(piece, target)
    }
}
