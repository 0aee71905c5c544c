use thiserror::Error;

use crate::game_repr::{Player, Square};

/// Invariant violations surfaced by move execution and status queries.
///
/// Legality predicates never produce these: a disallowed move is simply
/// `false`. Only operations that would corrupt the piece set, or a status
/// query on a side without a King, fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("it is {expected:?}'s turn, not {attempted:?}'s")]
    WrongTurn { expected: Player, attempted: Player },

    #[error("piece reference is the empty sentinel or not part of the position")]
    InvalidPieceReference,

    #[error("{0:?} has no King on the board")]
    NoKingPresent(Player),

    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("no pawn is awaiting promotion")]
    NoPromotionPending,

    #[error("every piece id of this position has been handed out")]
    PieceIdsExhausted,
}

pub type Result<T> = std::result::Result<T, ChessError>;
