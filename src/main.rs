use chess_rules::{new_game, ChessError, Player, Square};

/// Replays a short game ending in mate and logs each status.
/// Run with `RUST_LOG=debug` to see move execution details.
fn main() -> Result<(), ChessError> {
    env_logger::init();

    let mut game = new_game();
    let script = [
        (Player::White, (4, 1), (4, 3)), // e2 e4
        (Player::Black, (5, 6), (5, 4)), // f7 f5
        (Player::White, (4, 3), (5, 4)), // e4 x f5
        (Player::Black, (6, 6), (6, 4)), // g7 g5
        (Player::White, (3, 0), (7, 4)), // d1 h5
    ];

    for (player, from, to) in script {
        let from = square(from)?;
        let to = square(to)?;
        game.do_move(player, from, to)?;
        log::info!("{:?} {} -> {}: {:?}", player, from, to, game.status()?);
    }

    println!("{:?}", game.status()?);
    Ok(())
}

fn square((file, rank): (i8, i8)) -> Result<Square, ChessError> {
    Square::new(file, rank).ok_or(ChessError::InvalidPieceReference)
}
