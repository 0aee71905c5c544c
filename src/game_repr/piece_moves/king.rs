use super::super::{Piece, Position, Square, Type};

impl Position {
    pub(crate) fn king_geometry(&self, piece: &Piece, target: Square) -> bool {
        let (dx, dy) = piece.square.delta(target);
        dx.abs() <= 1 && dy.abs() <= 1
    }

    /// Nearest same-owner rook on the king's rank, on the `direction` side
    /// (+1 towards the h-file, -1 towards the a-file).
    pub(crate) fn castling_rook(&self, king: &Piece, direction: i8) -> Option<&Piece> {
        self.pieces_of(king.owner)
            .filter(|p| p.piece_type == Type::Rook)
            .filter(|p| p.square.rank() == king.square.rank())
            .filter(|p| (p.square.file() - king.square.file()).signum() == direction)
            .min_by_key(|p| p.square.distance_sq(king.square))
    }

    /// Castling: an unmoved king travels two files towards the nearest
    /// unmoved rook on its rank, with everything between them empty and
    /// the square it passes over unattacked.
    ///
    /// Unless `strict_castling` is configured, neither the king's current
    /// square nor its destination is checked for attack, so the king may
    /// castle out of or into check.
    pub(crate) fn verify_castling(&self, king: &Piece, target: Square) -> bool {
        if king.piece_type != Type::King || king.has_moved || !king.owner.is_real() {
            return false;
        }
        let (dx, dy) = king.square.delta(target);
        if dy != 0 || dx.abs() != 2 || !self.piece_at(target).is_none() {
            return false;
        }

        let direction = dx.signum();
        let rook = match self.castling_rook(king, direction) {
            Some(rook) if !rook.has_moved => rook,
            _ => return false,
        };
        // the rook must stand beyond the king's destination
        if (rook.square.file() - king.square.file()).abs() <= 2 {
            return false;
        }
        if !self.path_clear(king.square, rook.square) {
            return false;
        }

        let enemy = king.owner.opposite();
        let transit_attacked = king
            .square
            .between(target)
            .any(|sq| self.is_square_attacked(sq, enemy));
        if transit_attacked {
            return false;
        }

        if self.rules.strict_castling {
            return !self.is_square_attacked(king.square, enemy)
                && !self.is_square_attacked(target, enemy);
        }
        true
    }

    /// A king move of two files along its rank is a castle
    pub(crate) fn is_castle(piece: &Piece, target: Square) -> bool {
        let (dx, dy) = piece.square.delta(target);
        piece.piece_type == Type::King && dy == 0 && dx.abs() == 2
    }
}
