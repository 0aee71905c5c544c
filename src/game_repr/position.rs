use smallvec::SmallVec;

use super::{Piece, PieceId, Player, Square, Type, EMPTY};
use crate::config::RulesConfig;
use crate::error::{ChessError, Result};

/*
 * MODULE IS RESPONSIBLE FOR
 * THE PIECE SET AND ITS INVARIANTS
 */

/// Back rank layout, a-file to h-file
const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

/// A board position: the live pieces, the side to move and the pawn (if any)
/// waiting for the caller to pick its promotion.
///
/// `Clone` is a deep copy; speculative moves on a clone never touch the
/// original. Legality checking relies on this.
#[derive(Debug, Clone)]
pub struct Position {
    /// Live pieces, at most one per square
    pub(crate) pieces: SmallVec<[Piece; 32]>,
    /// Pieces removed from play, kept so their `is_captured` flag stays observable
    pub(crate) captured: Vec<Piece>,
    pub(crate) turn: Player,
    pub(crate) promotion_pending: Option<PieceId>,
    pub(crate) rules: RulesConfig,
    next_id: u8,
}

impl Default for Position {
    fn default() -> Self {
        Self::standard(RulesConfig::default())
    }
}

impl Position {
    /// An empty board with White to move
    pub fn empty(rules: RulesConfig) -> Self {
        Self {
            pieces: SmallVec::new(),
            captured: Vec::new(),
            turn: Player::White,
            promotion_pending: None,
            rules,
            next_id: 0,
        }
    }

    /// The standard starting position, 16 pieces per side, White to move
    pub fn standard(rules: RulesConfig) -> Self {
        let mut position = Self::empty(rules);

        for (owner, back, pawns) in [(Player::White, 0, 1), (Player::Black, 7, 6)] {
            for (file, piece_type) in BACK_RANK.iter().enumerate() {
                let file = file as i8;
                position.spawn(*piece_type, owner, file, back);
                position.spawn(Type::PAWN, owner, file, pawns);
            }
        }

        position
    }

    fn spawn(&mut self, piece_type: Type, owner: Player, file: i8, rank: i8) {
        if let Some(square) = Square::new(file, rank) {
            let placed = self.place(piece_type, owner, square);
            debug_assert!(placed.is_ok(), "starting layout collides on {}", square);
        }
    }

    /// Adds a fresh, unmoved piece. Used to build the starting layout and
    /// custom positions.
    pub fn place(&mut self, piece_type: Type, owner: Player, square: Square) -> Result<PieceId> {
        if piece_type == Type::None || !owner.is_real() {
            return Err(ChessError::InvalidPieceReference);
        }
        if !self.piece_at(square).is_none() {
            return Err(ChessError::SquareOccupied(square));
        }

        // ids are never reused; the last u8 value is reserved for EMPTY
        if self.next_id == PieceId::NONE.0 {
            return Err(ChessError::PieceIdsExhausted);
        }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(Piece::new(id, piece_type, owner, square));
        Ok(id)
    }

    /// The piece on `square`, or [`EMPTY`]
    pub fn piece_at(&self, square: Square) -> &Piece {
        self.pieces
            .iter()
            .find(|p| p.square == square)
            .unwrap_or(&EMPTY)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece> {
        self.pieces
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ChessError::InvalidPieceReference)
    }

    /// All live pieces, in no particular order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.owner == player)
    }

    pub fn king_of(&self, player: Player) -> Option<&Piece> {
        self.pieces_of(player).find(|p| p.piece_type == Type::King)
    }

    /// Pieces taken out of play so far, in capture order
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn live_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// The pawn that reached the far rank and waits for the caller to pick
    /// its new kind
    pub fn promotion_pending(&self) -> Option<&Piece> {
        self.promotion_pending.and_then(|id| self.piece(id))
    }

    pub fn clear_promotion(&mut self) {
        self.promotion_pending = None;
    }

    /// Removes a live piece from play and marks it captured.
    pub fn take_piece(&mut self, id: PieceId) -> Result<Piece> {
        if id == PieceId::NONE {
            return Err(ChessError::InvalidPieceReference);
        }
        let idx = self
            .pieces
            .iter()
            .position(|p| p.id == id)
            .ok_or(ChessError::InvalidPieceReference)?;

        let mut piece = self.pieces.remove(idx);
        piece.is_captured = true;
        piece.attacked = false;
        self.captured.push(piece);

        if self.promotion_pending == Some(id) {
            self.promotion_pending = None;
        }
        Ok(piece)
    }

    /// Swaps `old` for a new piece of `piece_type` on the same square.
    ///
    /// `old` must still be live and still stand where the caller saw it;
    /// a stale reference (piece moved or taken since) is rejected.
    pub fn replace_piece(&mut self, old: &Piece, piece_type: Type) -> Result<PieceId> {
        if old.is_none() || piece_type == Type::None {
            return Err(ChessError::InvalidPieceReference);
        }
        let live = self.piece(old.id).ok_or(ChessError::InvalidPieceReference)?;
        if live.square != old.square {
            return Err(ChessError::InvalidPieceReference);
        }
        let (owner, square) = (live.owner, live.square);

        self.pieces.retain(|p| p.id != old.id);
        let id = self.place(piece_type, owner, square)?;
        self.piece_mut(id)?.has_moved = true;

        if self.promotion_pending == Some(old.id) {
            self.promotion_pending = Some(id);
        }
        Ok(id)
    }
}
