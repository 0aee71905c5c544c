use super::super::{Piece, Position, Square};

impl Position {
    /// Forward pushes onto empty squares (two from an unmoved pawn),
    /// diagonal steps onto an enemy piece, or en passant.
    pub(crate) fn pawn_geometry(&self, piece: &Piece, target: Square) -> bool {
        let (dx, dy) = piece.square.delta(target);
        let forward = piece.owner.forward();
        let occupant = self.piece_at(target);

        if dx == 0 {
            if !occupant.is_none() {
                return false;
            }
            if dy == forward {
                return true;
            }
            dy == 2 * forward && !piece.has_moved && self.path_clear(piece.square, target)
        } else if dx.abs() == 1 && dy == forward {
            if occupant.is_none() {
                self.en_passant_victim(piece, target).is_some()
            } else {
                occupant.owner == piece.owner.opposite()
            }
        } else {
            false
        }
    }

    /// The enemy pawn a diagonal step of `pawn` onto the empty `target` would
    /// take en passant: it stands one rank behind `target` and has just
    /// advanced two squares.
    pub(crate) fn en_passant_victim(&self, pawn: &Piece, target: Square) -> Option<&Piece> {
        if !pawn.piece_type.is_pawn() || !self.piece_at(target).is_none() {
            return None;
        }
        let (dx, dy) = pawn.square.delta(target);
        if dx.abs() != 1 || dy != pawn.owner.forward() {
            return None;
        }

        let behind = target.offset(0, -pawn.owner.forward())?;
        let victim = self.piece_at(behind);
        (victim.owner == pawn.owner.opposite() && victim.just_double_advanced()).then_some(victim)
    }

    /// `pawn` stepping onto `target` lands on its far rank
    pub(crate) fn reaches_far_rank(pawn: &Piece, target: Square) -> bool {
        pawn.piece_type.is_pawn() && target.rank() == pawn.owner.far_rank()
    }
}
