//! Exhaustive check of the computer player.
//!
//! Plays every possible game in which the human tries all legal moves at each
//! of their turns while the computer answers with [`choose_move`]. The
//! human's opening moves are explored in parallel.

use crate::game::{Gameboard, Outcome, Player};
use crate::minmax::choose_move;
use core::fmt::{self, Display, Formatter};
use core::ops::Add;
use rayon::prelude::*;
use tracing::debug;

/// Number of finished games per outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Census {
    #[must_use]
    pub const fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    /// Number of games the side `player` lost.
    #[must_use]
    pub const fn losses(&self, player: Player) -> usize {
        match player {
            Player::X => self.o_wins,
            Player::O => self.x_wins,
        }
    }
}

impl From<Outcome> for Census {
    fn from(outcome: Outcome) -> Self {
        let mut census = Self::default();
        match outcome {
            Outcome::XWins => census.x_wins = 1,
            Outcome::OWins => census.o_wins = 1,
            Outcome::Draw => census.draws = 1,
            Outcome::InProgress => {}
        }
        census
    }
}

impl Add for Census {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x_wins: self.x_wins + rhs.x_wins,
            o_wins: self.o_wins + rhs.o_wins,
            draws: self.draws + rhs.draws,
        }
    }
}

impl Display for Census {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Counts the outcomes of all games the computer, playing `computer`, can be
/// drawn into. X always moves first.
#[must_use]
pub fn census(computer: Player) -> Census {
    let mut board = Gameboard::new();
    if computer == Player::X
        && let Some((cell, _)) = choose_move(&board, computer)
    {
        board.set(cell, Some(computer));
    }

    let human = computer.opponent();
    let openings = board.available_cells_iter().collect::<Vec<_>>();
    let census = openings
        .into_par_iter()
        .map(|cell| {
            let mut board = board;
            board.set(cell, Some(human));
            explore(board, computer, computer)
        })
        .reduce(Census::default, |a, b| a + b);

    debug!(%computer, %census, "census finished");
    census
}

fn explore(board: Gameboard, to_move: Player, computer: Player) -> Census {
    let outcome = board.outcome();
    if outcome.is_over() {
        return Census::from(outcome);
    }

    if to_move == computer {
        let Some((cell, _)) = choose_move(&board, computer) else {
            return Census::from(outcome);
        };
        let mut board = board;
        board.set(cell, Some(computer));
        explore(board, to_move.opponent(), computer)
    } else {
        board
            .available_cells_iter()
            .map(|cell| {
                let mut board = board;
                board.set(cell, Some(to_move));
                explore(board, to_move.opponent(), computer)
            })
            .fold(Census::default(), |a, b| a + b)
    }
}
