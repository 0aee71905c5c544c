use std::collections::HashSet;

use rayon::prelude::*;
use smallvec::SmallVec;

use super::{Piece, Player, Position, Square};
use crate::error::{ChessError, Result};

/// Legal destinations of a single piece
pub type Targets = SmallVec<[Square; 32]>;

impl Position {
    /// Decides whether `piece` may move to `target`.
    ///
    /// Composed of the shared preconditions (real owner, target not held by
    /// an ally), the per-variant geometry (path-clear for sliders) and, when
    /// `check_self_safety` is set, a simulation on a cloned position proving
    /// the mover's King is not left capturable.
    ///
    /// The simulation probes enemy replies with `check_self_safety = false`,
    /// so the recursion never goes deeper than one level. Castling is only
    /// considered at the outer level: it never captures, so it can never
    /// attack a King.
    pub fn verify_move(&self, piece: &Piece, target: Square, check_self_safety: bool) -> bool {
        if check_self_safety && self.verify_castling(piece, target) {
            return true;
        }

        if !piece.owner.is_real() {
            return false;
        }
        if self.piece_at(target).owner == piece.owner {
            return false;
        }
        if !self.geometry(piece, target) {
            return false;
        }

        !check_self_safety || self.is_safe_after(piece, target)
    }

    /// Plays the move on a clone and reports whether the mover's King
    /// survives every enemy reply. A side without a King is trivially safe.
    fn is_safe_after(&self, piece: &Piece, target: Square) -> bool {
        let mut simulated = self.clone();
        if simulated.apply_move(piece.id, target, false).is_err() {
            return false;
        }

        let king_square = match simulated.king_of(piece.owner) {
            Some(king) => king.square,
            None => return true,
        };

        let exposed = simulated
            .pieces_of(piece.owner.opposite())
            .any(|enemy| simulated.verify_move(enemy, king_square, false));
        !exposed
    }

    /// Whether some piece of `by` attacks `square`, ignoring whether the
    /// attacker would expose its own King.
    ///
    /// Pawns attack their forward diagonals even when the square is empty.
    pub fn is_square_attacked(&self, square: Square, by: Player) -> bool {
        self.pieces_of(by).any(|attacker| {
            if attacker.piece_type.is_pawn() {
                let (dx, dy) = attacker.square.delta(square);
                dx.abs() == 1 && dy == attacker.owner.forward()
            } else {
                self.verify_move(attacker, square, false)
            }
        })
    }

    /// Some enemy piece can legally move onto `player`'s King.
    pub fn is_in_check(&self, player: Player) -> Result<bool> {
        let king = self
            .king_of(player)
            .ok_or(ChessError::NoKingPresent(player))?;

        Ok(self
            .pieces_of(player.opposite())
            .any(|enemy| self.verify_move(enemy, king.square, true)))
    }

    /// Every square `piece` may legally move to
    pub fn legal_targets(&self, piece: &Piece) -> Targets {
        Square::all()
            .iter()
            .copied()
            .filter(|&sq| self.verify_move(piece, sq, true))
            .collect()
    }

    /// Union of the legal destinations of all of `player`'s pieces
    pub fn all_legal_targets(&self, player: Player) -> HashSet<Square> {
        let movers: Vec<&Piece> = self.pieces_of(player).collect();

        if self.rules.parallel {
            movers
                .par_iter()
                .flat_map_iter(|piece| self.legal_targets(piece))
                .collect()
        } else {
            movers
                .iter()
                .flat_map(|piece| self.legal_targets(piece))
                .collect()
        }
    }

    /// Short-circuiting `!all_legal_targets(player).is_empty()`
    pub fn has_legal_move(&self, player: Player) -> bool {
        let movers: Vec<&Piece> = self.pieces_of(player).collect();
        let can_move = |piece: &&Piece| {
            Square::all()
                .iter()
                .any(|&sq| self.verify_move(piece, sq, true))
        };

        if self.rules.parallel {
            movers.par_iter().any(can_move)
        } else {
            movers.iter().any(can_move)
        }
    }
}
