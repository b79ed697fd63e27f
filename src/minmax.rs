//! Minmax search with alpha-beta pruning over the full game tree.
//!
//! Scores are always seen from X's perspective: X maximizes, O minimizes.
//! A won position is worth `10 - depth` for X and `-10 + depth` for O, so
//! faster wins and slower losses are preferred.

use crate::game::{CELLS, Gameboard, Player, WIN_SCORE, evaluate};
use tracing::trace;

/// Places `player` at `index`, runs `f` on the board and clears the cell
/// again before returning.
fn with_mark<R>(
    board: &mut Gameboard,
    index: usize,
    player: Player,
    f: impl FnOnce(&mut Gameboard) -> R,
) -> R {
    debug_assert!(board.is_empty(index));
    board.set(index, Some(player));
    let result = f(board);
    board.set(index, None);
    result
}

/// Recursive alpha-beta search. Returns the value of `board` assuming optimal
/// play of both sides from here on.
///
/// `depth` counts the plies played since the root of the search. The board is
/// mutated during the search but always restored before this returns.
pub fn search(
    board: &mut Gameboard,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    // We start with the recursion tail: Can we stop the recursion?
    let score = evaluate(board);
    if score == WIN_SCORE {
        return score - depth as i32;
    }
    if score == -WIN_SCORE {
        return score + depth as i32;
    }
    if board.is_full() {
        return 0;
    }

    let (player, mut best) = if maximizing {
        (Player::X, i32::MIN)
    } else {
        (Player::O, i32::MAX)
    };

    for index in 0..CELLS {
        if !board.is_empty(index) {
            continue;
        }

        let value = with_mark(board, index, player, |board| {
            search(board, depth + 1, alpha, beta, !maximizing)
        });

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Returns the best cell for `player` together with its score, or `None` if
/// the board is full.
///
/// Every empty cell is tried in ascending order. Only a strictly better score
/// replaces the current best, so the lowest index wins ties.
#[must_use]
pub fn choose_move(board: &Gameboard, player: Player) -> Option<(usize, i32)> {
    let better_score: fn(i32, i32) -> bool = match player {
        Player::X => |new, best| new > best,
        Player::O => |new, best| new < best,
    };
    let mut best_score = match player {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };
    let mut best_cell = None;

    // working copy, never handed out
    let mut board = *board;
    let opponent_maximizes = player.opponent() == Player::X;

    for index in 0..CELLS {
        if !board.is_empty(index) {
            continue;
        }

        let score = with_mark(&mut board, index, player, |board| {
            search(board, 0, i32::MIN, i32::MAX, opponent_maximizes)
        });
        trace!(%player, index, score, "scored candidate");

        if better_score(score, best_score) {
            best_score = score;
            best_cell = Some(index);
        }
    }

    best_cell.map(|cell| (cell, best_score))
}

/// Returns the computer's (O) move, or `None` if the board is full.
#[must_use]
pub fn choose_computer_move(board: &Gameboard) -> Option<usize> {
    choose_move(board, Player::O).map(|(cell, _)| cell)
}
