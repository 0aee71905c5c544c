mod square;
mod piece;
mod position;
mod piece_moves;
mod legality;
mod executor;
mod status;

#[cfg(test)]
mod tests;

pub use square::*;
pub use piece::*;
pub use position::*;
pub use legality::*;
pub use status::*;
