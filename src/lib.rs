//! Chess rules engine: move legality, move execution with every special-move
//! side effect, and game status derivation.
//!
//! The caller drives a [`Game`]: it issues moves, asks for legal
//! destinations and queries the status. Notation, rendering and move
//! search live elsewhere.

pub mod config;
pub mod error;
pub mod game;
pub mod game_repr;

pub use config::RulesConfig;
pub use error::ChessError;
pub use game::{new_game, Game, Promotion};
pub use game_repr::{GameStatus, MoveMeta, Piece, PieceId, Player, Position, Square, Type, EMPTY};
