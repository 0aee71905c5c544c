//! Top-level game object consumed by a UI or CLI.
//!
//! A [`Game`] owns the single live [`Position`] and the fifty-move counter.
//! Every query runs against the side to move; moves are verified before
//! they are executed.

use std::collections::HashSet;

use smallvec::SmallVec;

use crate::config::RulesConfig;
use crate::error::{ChessError, Result};
use crate::game_repr::{GameStatus, MoveMeta, PieceId, Player, Position, Square, Targets, Type};

/// Kinds a pawn may be promoted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl From<Promotion> for Type {
    fn from(promotion: Promotion) -> Self {
        match promotion {
            Promotion::Queen => Type::Queen,
            Promotion::Rook => Type::Rook,
            Promotion::Bishop => Type::Bishop,
            Promotion::Knight => Type::Knight,
        }
    }
}

#[derive(Debug)]
pub struct Game {
    position: Position,
    /// Half-moves since the last pawn move or capture
    half_move_clock: u32,
    rules: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move, default rules
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(rules: RulesConfig) -> Self {
        Self::from_position(Position::standard(rules))
    }

    /// Starts a game from a prepared position. The position's rules become
    /// the game's rules.
    pub fn from_position(position: Position) -> Self {
        Self {
            rules: *position.rules(),
            position,
            half_move_clock: 0,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn turn(&self) -> Player {
        self.position.turn()
    }

    pub fn half_move_clock(&self) -> u32 {
        self.half_move_clock
    }

    /// Moves `player`'s piece from `from` to `to`, then hands the turn over.
    pub fn do_move(&mut self, player: Player, from: Square, to: Square) -> Result<()> {
        let expected = self.turn();
        if player != expected {
            log::warn!("{:?} tried to move on {:?}'s turn", player, expected);
            return Err(ChessError::WrongTurn {
                expected,
                attempted: player,
            });
        }

        let piece = *self.position.piece_at(from);
        if piece.is_none() || piece.owner != player {
            log::warn!("{:?} has no piece on {}", player, from);
            return Err(ChessError::InvalidPieceReference);
        }
        if !self.position.verify_move(&piece, to, true) {
            log::warn!("rejected {:?} {} -> {}", piece.piece_type, from, to);
            return Err(ChessError::IllegalMove { from, to });
        }

        let live_before = self.position.live_count();
        self.position.apply_move(piece.id, to, true)?;
        self.position.set_turn(player.opposite());

        // captures are the only way the live count changes
        if piece.piece_type.is_pawn() || self.position.live_count() != live_before {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock += 1;
        }
        Ok(())
    }

    /// Whether the side to move may play `from` -> `to`
    pub fn verify_move(&self, from: Square, to: Square) -> bool {
        let piece = self.position.piece_at(from);
        let legal = !piece.is_none()
            && piece.owner == self.turn()
            && self.position.verify_move(piece, to, true);
        if !legal {
            log::trace!("{} -> {} is not legal for {:?}", from, to, self.turn());
        }
        legal
    }

    /// Legal destinations of the side-to-move piece on `from`; empty for an
    /// empty square or an enemy piece
    pub fn legal_targets(&self, from: Square) -> Targets {
        let piece = self.position.piece_at(from);
        if piece.is_none() || piece.owner != self.turn() {
            return Targets::new();
        }
        self.position.legal_targets(piece)
    }

    pub fn legal_targets_with_meta(&self, from: Square) -> SmallVec<[(Square, MoveMeta); 32]> {
        let piece = self.position.piece_at(from);
        if piece.is_none() || piece.owner != self.turn() {
            return SmallVec::new();
        }
        self.position.legal_targets_with_meta(piece)
    }

    /// Every square some piece of the side to move can reach
    pub fn all_legal_targets(&self) -> HashSet<Square> {
        self.position.all_legal_targets(self.turn())
    }

    pub fn status(&self) -> Result<GameStatus> {
        let status = self.position.status()?;
        if status.is_terminal() {
            log::info!("game over: {:?}", status);
        }
        Ok(status)
    }

    /// Fifty-move rule: enough half-moves without a pawn move or capture
    pub fn can_claim_draw(&self) -> bool {
        self.half_move_clock >= self.rules.draw_half_moves
    }

    /// Resolves the pending promotion to `kind`, returning the new piece.
    pub fn promote(&mut self, kind: Promotion) -> Result<PieceId> {
        let pawn = *self
            .position
            .promotion_pending()
            .ok_or(ChessError::NoPromotionPending)?;

        let id = self.position.replace_piece(&pawn, kind.into())?;
        self.position.clear_promotion();
        log::debug!("{:?} pawn on {} promoted to {:?}", pawn.owner, pawn.square, kind);
        Ok(id)
    }
}

/// Standard starting position, White to move
pub fn new_game() -> Game {
    Game::new()
}
