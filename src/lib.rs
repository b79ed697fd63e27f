//! Tic-tac-toe against a computer that never loses.
//!
//! The computer picks its moves with an exhaustive minmax search with
//! alpha-beta pruning ([`minmax`]). [`Game`] is the session a frontend drives:
//! it owns the board, validates human moves and reports the [`Outcome`].

#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from,
    clippy::multiple_crate_versions
)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

mod ai_player;
pub mod census;
mod game;
pub mod minmax;

pub use ai_player::{play_computer_move, search_best_move};
pub use census::{Census, census};
pub use game::{
    CELLS, Cell, Game, Gameboard, GameboardError, LINES, Outcome, Player, SIDE_LEN, WIN_SCORE,
    evaluate,
};
pub use minmax::{choose_computer_move, choose_move};
