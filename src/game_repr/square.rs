use std::fmt;

use once_cell::sync::Lazy;

/// Every on-board square, file-major (a1, a2, .., h8).
/// Built once and shared read-only for the lifetime of the process.
static BOARD_SQUARES: Lazy<[Square; 64]> = Lazy::new(|| {
    let mut squares = [Square { file: 0, rank: 0 }; 64];
    for (idx, square) in squares.iter_mut().enumerate() {
        *square = Square {
            file: (idx / 8) as i8,
            rank: (idx % 8) as i8,
        };
    }
    squares
});

/// A board cell addressed by file (a..h = 0..8) and rank (1..8 = 0..8).
///
/// A `Square` is always on the board: off-board coordinates are rejected
/// by [`Square::new`] and [`Square::offset`] instead of being represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    pub const A1: Square = Square { file: 0, rank: 0 };

    pub const fn new(file: i8, rank: i8) -> Option<Self> {
        if Self::on_board(file, rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    const fn on_board(file: i8, rank: i8) -> bool {
        0 <= file && file < 8 && 0 <= rank && rank < 8
    }

    /// All 64 squares of the board.
    pub fn all() -> &'static [Square; 64] {
        &BOARD_SQUARES
    }

    pub const fn file(self) -> i8 {
        self.file
    }

    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Mailbox index (a1 = 0, h1 = 7, a8 = 56, h8 = 63)
    pub const fn idx(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    /// Square reached by stepping `(d_file, d_rank)`, if it stays on the board.
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        Square::new(self.file + d_file, self.rank + d_rank)
    }

    /// Displacement `target - self` as `(d_file, d_rank)`.
    pub const fn delta(self, target: Square) -> (i8, i8) {
        (target.file - self.file, target.rank - self.rank)
    }

    /// Squares strictly between `self` and `target` along a straight line
    /// (file, rank or diagonal). Empty when the two are adjacent or not aligned.
    pub fn between(self, target: Square) -> impl Iterator<Item = Square> {
        let (dx, dy) = self.delta(target);
        let aligned = (dx == 0) != (dy == 0) || (dx != 0 && dx.abs() == dy.abs());
        let steps = if aligned { dx.abs().max(dy.abs()) } else { 0 };
        let (sx, sy) = (dx.signum(), dy.signum());
        let origin = self;

        (1..steps).filter_map(move |i| origin.offset(sx * i, sy * i))
    }

    /// Squared euclidean distance, used to pick the nearest castling rook.
    pub fn distance_sq(self, other: Square) -> i32 {
        let (dx, dy) = self.delta(other);
        (dx as i32).pow(2) + (dy as i32).pow(2)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'1' + self.rank as u8) as char;
        write!(f, "{}{}", file, rank)
    }
}
