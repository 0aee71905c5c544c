pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::{Piece, Position, Square, Type};

impl Position {
    /// Per-variant displacement rule, including path-clear for sliders.
    /// Castling is not geometry; see [`Position::verify_castling`].
    pub(crate) fn geometry(&self, piece: &Piece, target: Square) -> bool {
        match piece.piece_type {
            Type::Pawn { .. } => self.pawn_geometry(piece, target),
            Type::Knight      => self.knight_geometry(piece, target),
            Type::Bishop      => self.bishop_geometry(piece, target),
            Type::Rook        => self.rook_geometry(piece, target),
            Type::Queen       => self.queen_geometry(piece, target),
            Type::King        => self.king_geometry(piece, target),
            Type::None        => false,
        }
    }

    /// No piece stands strictly between `from` and `to`.
    /// The target square itself is not inspected.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        from.between(to).all(|sq| self.piece_at(sq).is_none())
    }
}
