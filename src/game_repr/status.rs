use smallvec::SmallVec;

use super::{Piece, Player, Position, Square};
use crate::error::Result;

/// State of the game from the point of view of the side to move.
/// Derived fresh on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// The side to move is in check but has a way out
    Check,
    /// The side to move is not in check and has no legal move
    Stalemate,
    WinnerWhite,
    WinnerBlack,
}

impl GameStatus {
    pub fn winner(winner: Player) -> Self {
        match winner {
            Player::Black => GameStatus::WinnerBlack,
            _ => GameStatus::WinnerWhite,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::WinnerWhite | GameStatus::WinnerBlack
        )
    }
}

/// How a legal destination should be presented to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveMeta {
    Default,
    /// The destination holds an enemy piece
    Attacks,
    /// Castle, promotion or en passant
    Special,
}

impl Position {
    pub fn status(&self) -> Result<GameStatus> {
        let player = self.turn;
        let in_check = self.is_in_check(player)?;
        let can_move = self.has_legal_move(player);

        Ok(match (can_move, in_check) {
            (false, true) => GameStatus::winner(player.opposite()),
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Playing,
        })
    }

    /// Classifies a legal move of `piece` to `target`
    pub fn move_meta(&self, piece: &Piece, target: Square) -> MoveMeta {
        let occupant = self.piece_at(target);

        if occupant.owner == piece.owner.opposite() && occupant.owner.is_real() {
            MoveMeta::Attacks
        } else if Self::is_castle(piece, target)
            || (occupant.is_none() && Self::reaches_far_rank(piece, target))
            || self.en_passant_victim(piece, target).is_some()
        {
            MoveMeta::Special
        } else {
            MoveMeta::Default
        }
    }

    pub fn legal_targets_with_meta(&self, piece: &Piece) -> SmallVec<[(Square, MoveMeta); 32]> {
        self.legal_targets(piece)
            .into_iter()
            .map(|target| (target, self.move_meta(piece, target)))
            .collect()
    }
}
