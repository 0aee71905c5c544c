use super::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
    /// Owner of the [`EMPTY`] placeholder, never a real side.
    None,
}

impl Player {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
            Self::None => Self::None,
        }
    }

    pub fn is_real(&self) -> bool {
        *self != Self::None
    }

    /// Rank direction of this side's pawns
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
            Self::None => 0,
        }
    }

    /// Rank a pawn of this side promotes on
    pub fn far_rank(&self) -> i8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
            Self::None => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    /// `double_advanced` is set while the pawn's last move was a two-square
    /// advance and the opponent has not replied yet.
    Pawn { double_advanced: bool },
    None,
}

impl Type {
    pub const PAWN: Type = Type::Pawn { double_advanced: false };

    pub fn is_pawn(&self) -> bool {
        matches!(self, Type::Pawn { .. })
    }

}

/// Stable identity of a piece inside one game, preserved across clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub const NONE: PieceId = PieceId(u8::MAX);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub piece_type: Type,
    pub owner: Player,
    /// Meaningless for [`EMPTY`]
    pub square: Square,
    pub has_moved: bool,
    pub is_captured: bool,
    /// Derived: some enemy piece could legally move onto this piece.
    /// Refreshed after every notifying move, used for highlighting only.
    pub attacked: bool,
}

/// The "no piece here" value returned by lookups on empty squares.
/// It is never part of a position's live set and every mutating
/// operation on it fails.
pub const EMPTY: Piece = Piece {
    id: PieceId::NONE,
    piece_type: Type::None,
    owner: Player::None,
    square: Square::A1,
    has_moved: false,
    is_captured: false,
    attacked: false,
};

impl Piece {
    pub(crate) fn new(id: PieceId, piece_type: Type, owner: Player, square: Square) -> Self {
        Self {
            id,
            piece_type,
            owner,
            square,
            has_moved: false,
            is_captured: false,
            attacked: false,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    /// True for a pawn whose last move was a double advance
    pub fn just_double_advanced(&self) -> bool {
        matches!(self.piece_type, Type::Pawn { double_advanced: true })
    }
}
