//! Game logic and game board.

use core::fmt::{self, Display, Formatter};
use thiserror::Error;
use tracing::info;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Width (and height) of the board.
pub const SIDE_LEN: usize = 3;

/// Score of a board where X completed a line.
pub const WIN_SCORE: i32 = 10;

/// All winnable lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, PartialEq, Clone, Copy, Eq, Error)]
pub enum GameboardError {
    #[error("cell {0} is not on the board")]
    InvalidCell(usize),
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
    #[error("invalid cell value {0} (expected 1, -1 or 0)")]
    InvalidCellValue(i8),
    #[error("it is not {0}'s turn")]
    NotYourTurn(Player),
    #[error("game is already over: {0}")]
    GameOver(Outcome),
}

#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    /// Moves first, scored positively.
    X,
    /// Scored negatively.
    O,
}

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a board as seen by the game session.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Outcome {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::XWins => Some(Player::X),
            Self::OWins => Some(Player::O),
            Self::InProgress | Self::Draw => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in progress"),
            Self::XWins => f.write_str("X wins!"),
            Self::OWins => f.write_str("O wins!"),
            Self::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// A single cell. `None` is an empty cell.
pub type Cell = Option<Player>;

/// Gameboard.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Gameboard(
    /*
     * Cells in row-major order:
     * index 0 <==> top left, index 8 <==> bottom right
     */
    [Cell; CELLS],
);

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Gameboard {
    #[must_use]
    pub const fn new() -> Self {
        Self([None; CELLS])
    }

    /// Builds a board from the numeric encoding `1 = X`, `-1 = O`, `0 = empty`.
    pub fn from_values(values: [i8; CELLS]) -> Result<Self, GameboardError> {
        let mut board = Self::new();
        for (cell, value) in board.0.iter_mut().zip(values) {
            *cell = match value {
                0 => None,
                1 => Some(Player::X),
                -1 => Some(Player::O),
                other => return Err(GameboardError::InvalidCellValue(other)),
            };
        }
        Ok(board)
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELLS] {
        &self.0
    }

    /// Returns the content of a cell, `None` if empty.
    ///
    /// # Panics
    /// If `index` is not on the board.
    #[must_use]
    pub const fn cell(&self, index: usize) -> Cell {
        self.0[index]
    }

    #[must_use]
    pub const fn is_empty(&self, index: usize) -> bool {
        self.0[index].is_none()
    }

    /// Emits the indices of empty cells in ascending order.
    pub fn available_cells_iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&index| self.is_empty(index))
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn free_cells(&self) -> usize {
        self.available_cells_iter().count()
    }

    /// Returns whether there are no legal moves left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Places a mark on an empty cell.
    pub(crate) fn insert_mark(
        &mut self,
        index: usize,
        player: Player,
    ) -> Result<(), GameboardError> {
        let cell = self
            .0
            .get_mut(index)
            .ok_or(GameboardError::InvalidCell(index))?;
        if cell.is_some() {
            return Err(GameboardError::CellOccupied(index));
        }
        *cell = Some(player);
        Ok(())
    }

    /// Overwrites a cell without checks. Used by the search to place and undo.
    pub(crate) const fn set(&mut self, index: usize, cell: Cell) {
        self.0[index] = cell;
    }

    /// Check if `player` completed any line.
    #[must_use]
    pub fn check_for_winner(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.0[index] == Some(player)))
    }

    /// Classifies the board. A full board without a line is a draw.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match evaluate(self) {
            WIN_SCORE => Outcome::XWins,
            score if score == -WIN_SCORE => Outcome::OWins,
            _ if self.is_full() => Outcome::Draw,
            _ => Outcome::InProgress,
        }
    }
}

/// Static evaluation of a board.
///
/// Returns `+10` if X completed a line, `-10` if O completed a line and `0`
/// otherwise. A zero score does not distinguish a draw from a game in
/// progress; use [`Gameboard::outcome`] for that.
#[must_use]
pub fn evaluate(board: &Gameboard) -> i32 {
    for line in LINES {
        let [a, b, c] = line.map(|index| board.0[index]);
        let Some(player) = a else {
            continue;
        };
        if b == a && c == a {
            return match player {
                Player::X => WIN_SCORE,
                Player::O => -WIN_SCORE,
            };
        }
    }
    0
}

/// Game with all its state.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Game {
    board: Gameboard,
    round: usize,
}

impl Game {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Gameboard::new(),
            round: 0,
        }
    }

    /// Places `player`'s mark at `index` and returns the resulting outcome.
    ///
    /// The board is left untouched if the move is rejected.
    pub fn place_mark(
        &mut self,
        index: usize,
        player: Player,
    ) -> Result<Outcome, GameboardError> {
        let outcome = self.outcome();
        if outcome.is_over() {
            return Err(GameboardError::GameOver(outcome));
        }
        if player != self.current_player() {
            return Err(GameboardError::NotYourTurn(player));
        }

        self.board.insert_mark(index, player)?;
        self.round += 1;

        let outcome = self.outcome();
        if outcome.is_over() {
            info!(%outcome, round = self.round, "game over");
        }
        Ok(outcome)
    }

    /// Resets the session to an empty board with X to move.
    pub fn restart(&mut self) {
        info!(round = self.round, "restarting game");
        *self = Self::new();
    }

    /// X moves on even rounds, O on odd rounds.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        if self.round.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.outcome().is_over()
    }

    #[must_use]
    pub const fn board(&self) -> &Gameboard {
        &self.board
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Status line for the player.
impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome() {
            Outcome::InProgress => write!(f, "{}'s turn", self.current_player()),
            outcome => Display::fmt(&outcome, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values() {
        let board = Gameboard::from_values([1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
        assert_eq!(board.cell(0), Some(Player::X));
        assert_eq!(board.cell(1), Some(Player::X));
        assert_eq!(board.cell(3), Some(Player::O));
        assert_eq!(board.cell(4), Some(Player::O));
        assert_eq!(board.free_cells(), 5);

        assert_eq!(
            Gameboard::from_values([0, 0, 0, 0, 2, 0, 0, 0, 0]),
            Err(GameboardError::InvalidCellValue(2))
        );
    }

    #[test]
    fn test_available_cells_iter() {
        let mut board = Gameboard::new();
        assert_eq!(
            board.available_cells_iter().collect::<Vec<_>>().as_slice(),
            &[0, 1, 2, 3, 4, 5, 6, 7, 8]
        );

        board.insert_mark(4, Player::X).unwrap();
        board.insert_mark(0, Player::O).unwrap();
        board.insert_mark(8, Player::X).unwrap();
        assert_eq!(
            board.available_cells_iter().collect::<Vec<_>>().as_slice(),
            &[1, 2, 3, 5, 6, 7]
        );
        assert_eq!(board.free_cells(), 6);
        assert!(!board.is_full());
    }

    #[test]
    fn test_insert_mark() {
        let mut board = Gameboard::new();
        assert_eq!(board.insert_mark(9, Player::X), Err(GameboardError::InvalidCell(9)));
        board.insert_mark(3, Player::X).unwrap();
        assert_eq!(board.insert_mark(3, Player::O), Err(GameboardError::CellOccupied(3)));
        assert_eq!(board.cell(3), Some(Player::X));
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(&Gameboard::new()), 0);

        // row
        let board = Gameboard::from_values([0, 0, 0, 1, 1, 1, -1, -1, 0]).unwrap();
        assert_eq!(evaluate(&board), 10);
        assert!(board.check_for_winner(Player::X));
        assert!(!board.check_for_winner(Player::O));

        // column
        let board = Gameboard::from_values([1, -1, 1, 0, -1, 0, 1, -1, 0]).unwrap();
        assert_eq!(evaluate(&board), -10);
        assert!(board.check_for_winner(Player::O));

        // anti diagonal
        let board = Gameboard::from_values([1, 1, -1, 0, -1, 0, -1, 0, 1]).unwrap();
        assert_eq!(evaluate(&board), -10);

        // two in a row is not a line
        let board = Gameboard::from_values([1, 1, 0, -1, -1, 0, 0, 0, 0]).unwrap();
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(Gameboard::new().outcome(), Outcome::InProgress);

        // X O X
        // X O O
        // O X X
        let draw = Gameboard::from_values([1, -1, 1, 1, -1, -1, -1, 1, 1]).unwrap();
        assert_eq!(evaluate(&draw), 0);
        assert!(draw.is_full());
        assert_eq!(draw.outcome(), Outcome::Draw);

        // a line on the last move beats the full-board check
        let full_win = Gameboard::from_values([1, -1, 1, -1, 1, -1, -1, 1, 1]).unwrap();
        assert!(full_win.is_full());
        assert_eq!(full_win.outcome(), Outcome::XWins);

        let o_wins = Gameboard::from_values([1, 1, 0, -1, -1, -1, 1, 0, 0]).unwrap();
        assert_eq!(o_wins.outcome(), Outcome::OWins);
        assert_eq!(o_wins.outcome().winner(), Some(Player::O));
    }

    #[test]
    fn test_game_turns_and_errors() {
        let mut game = Game::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.to_string(), "X's turn");

        assert_eq!(
            game.place_mark(0, Player::O),
            Err(GameboardError::NotYourTurn(Player::O))
        );
        assert_eq!(game.place_mark(0, Player::X), Ok(Outcome::InProgress));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.to_string(), "O's turn");

        assert_eq!(
            game.place_mark(0, Player::O),
            Err(GameboardError::CellOccupied(0))
        );
        assert_eq!(
            game.place_mark(12, Player::O),
            Err(GameboardError::InvalidCell(12))
        );
        assert_eq!(game.round(), 1);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut game = Game::new();
        for (index, player) in [
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
        ] {
            assert_eq!(game.place_mark(index, player), Ok(Outcome::InProgress));
        }
        assert_eq!(game.place_mark(2, Player::X), Ok(Outcome::XWins));
        assert!(!game.is_active());
        assert_eq!(game.to_string(), "X wins!");
        assert_eq!(
            game.place_mark(5, Player::O),
            Err(GameboardError::GameOver(Outcome::XWins))
        );

        game.restart();
        assert_eq!(game.board(), &Gameboard::new());
        assert!(game.board().cells().iter().all(Option::is_none));
        assert_eq!(game.round(), 0);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.is_active());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.to_string(), "X's turn");
    }

    #[test]
    fn test_draw_status() {
        let mut game = Game::new();
        // X O X
        // X O O
        // O X X
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let mut player = Player::X;
        let mut outcome = Outcome::InProgress;
        for index in moves {
            outcome = game.place_mark(index, player).unwrap();
            player = player.opponent();
        }
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(game.to_string(), "It's a draw!");
    }
}
