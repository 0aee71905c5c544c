//! Rules configuration for a [`Game`](crate::Game).
//!
//! The defaults reproduce the engine's reference behaviour. Individual
//! rules can be tightened through the named constructors or the
//! `with_*` builders.

/// Half-moves without a pawn move or capture before a draw may be claimed.
pub const FIFTY_MOVE_HALF_MOVES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Draw threshold for the fifty-move counter, in half-moves.
    pub draw_half_moves: u32,
    /// When set, castling additionally requires the King's current and
    /// destination squares to be unattacked. Off by default: only the
    /// square the King passes through is checked, so a King may castle
    /// into check.
    pub strict_castling: bool,
    /// Fan legal-move enumeration and attacked-status refresh out over
    /// the rayon thread pool.
    pub parallel: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            draw_half_moves: FIFTY_MOVE_HALF_MOVES,
            strict_castling: false,
            parallel: true,
        }
    }
}

impl RulesConfig {
    /// Standard over-the-board rules: castling may not start in, pass
    /// through, or end in check.
    pub fn standard() -> Self {
        Self {
            strict_castling: true,
            ..Self::default()
        }
    }

    /// Single-threaded evaluation, useful for deterministic profiling.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_draw_half_moves(mut self, half_moves: u32) -> Self {
        self.draw_half_moves = half_moves;
        self
    }

    pub fn with_strict_castling(mut self, strict: bool) -> Self {
        self.strict_castling = strict;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
