//! Computer player on top of the search, driven through a [`Game`].

use crate::game::{Game, GameboardError, Outcome};
use crate::minmax::choose_move;
use tracing::debug;

/// Searches the best move for the side to move in `game`.
///
/// Fails with [`GameboardError::GameOver`] if the game has already ended.
pub fn search_best_move(game: &Game) -> Result<usize, GameboardError> {
    let outcome = game.outcome();
    if outcome.is_over() {
        return Err(GameboardError::GameOver(outcome));
    }

    let player = game.current_player();
    let (cell, score) =
        choose_move(game.board(), player).ok_or(GameboardError::GameOver(Outcome::Draw))?;
    debug!(%player, cell, score, round = game.round(), "computer chose move");
    Ok(cell)
}

/// Lets the computer play the side to move and applies its move.
pub fn play_computer_move(game: &mut Game) -> Result<(usize, Outcome), GameboardError> {
    let cell = search_best_move(game)?;
    let player = game.current_player();
    let outcome = game.place_mark(cell, player)?;
    Ok((cell, outcome))
}
