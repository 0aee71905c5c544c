use rayon::prelude::*;

use super::{PieceId, Position, Square, Type};
use crate::error::{ChessError, Result};

impl Position {
    /// Plays an already verified move of piece `id` to `target`, performing
    /// the capture and every special-move side effect.
    ///
    /// Full legality is not re-run here. With `notify` set, every live
    /// piece's `attacked` flag is recomputed afterwards; simulations pass
    /// `false`.
    pub fn apply_move(&mut self, id: PieceId, target: Square, notify: bool) -> Result<()> {
        let mover = *self.piece(id).ok_or(ChessError::InvalidPieceReference)?;
        let previous = *self.piece_at(target);
        if previous.owner == mover.owner {
            return Err(ChessError::SquareOccupied(target));
        }

        // resolved before anything moves: the victim's flag is part of the check
        let en_passant = self.en_passant_victim(&mover, target).map(|victim| victim.id);
        let castling_rook = if Self::is_castle(&mover, target) {
            let direction = mover.square.delta(target).0.signum();
            self.castling_rook(&mover, direction)
                .filter(|rook| !rook.has_moved)
                .map(|rook| rook.id)
        } else {
            None
        };

        if !previous.is_none() {
            self.take_piece(previous.id)?;
        }

        {
            let piece = self.piece_mut(id)?;
            piece.has_moved = true;
            piece.square = target;
        }

        if mover.piece_type.is_pawn() {
            self.finish_pawn_move(id, mover.square, target, en_passant)?;
        }
        if let Some(rook_id) = castling_rook {
            let direction = mover.square.delta(target).0.signum();
            self.finish_castle(rook_id, target, direction)?;
        }

        self.expire_double_advances(id);

        log::debug!(
            "{:?} {:?} {} -> {}{}",
            mover.owner,
            mover.piece_type,
            mover.square,
            target,
            if previous.is_none() { "" } else { " (capture)" }
        );

        if notify {
            self.refresh_attacked();
        }
        Ok(())
    }

    fn finish_pawn_move(
        &mut self,
        id: PieceId,
        from: Square,
        target: Square,
        en_passant: Option<PieceId>,
    ) -> Result<()> {
        let (_, dy) = from.delta(target);
        let pawn = self.piece_mut(id)?;
        pawn.piece_type = Type::Pawn { double_advanced: dy.abs() == 2 };
        let owner = pawn.owner;

        if target.rank() == owner.far_rank() {
            log::debug!("{:?} pawn on {} awaits promotion", owner, target);
            self.promotion_pending = Some(id);
        }

        if let Some(victim) = en_passant {
            let taken = self.take_piece(victim)?;
            log::debug!("en passant: {:?} pawn on {} removed", taken.owner, taken.square);
        }
        Ok(())
    }

    /// The rook lands on the square the king passed over
    fn finish_castle(&mut self, rook_id: PieceId, king_target: Square, direction: i8) -> Result<()> {
        let landing = king_target
            .offset(-direction, 0)
            .ok_or(ChessError::InvalidPieceReference)?;
        let rook = self.piece_mut(rook_id)?;
        log::debug!("castle: rook {} -> {}", rook.square, landing);
        rook.square = landing;
        rook.has_moved = true;
        Ok(())
    }

    /// A double advance is only capturable en passant on the very next move
    fn expire_double_advances(&mut self, mover: PieceId) {
        for piece in self.pieces.iter_mut().filter(|p| p.id != mover) {
            if let Type::Pawn { double_advanced } = &mut piece.piece_type {
                *double_advanced = false;
            }
        }
    }

    /// Recomputes `attacked` for every live piece: some enemy piece could
    /// legally move onto it.
    pub fn refresh_attacked(&mut self) {
        let flags: Vec<bool> = {
            let this = &*self;
            let attacked = |idx: usize| {
                let target = &this.pieces[idx];
                this.pieces_of(target.owner.opposite())
                    .any(|enemy| this.verify_move(enemy, target.square, true))
            };

            if self.rules.parallel {
                (0..this.pieces.len()).into_par_iter().map(attacked).collect()
            } else {
                (0..this.pieces.len()).map(attacked).collect()
            }
        };

        for (piece, attacked) in self.pieces.iter_mut().zip(flags) {
            piece.attacked = attacked;
        }
    }
}
