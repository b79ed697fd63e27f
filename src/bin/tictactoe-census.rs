//! Plays every game a human can force against the computer and prints how
//! they end. Exits with a failure if the computer lost any of them.
//!
//! Usage: `tictactoe-census [x|o]` (the computer's side, default `o`).

#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_debug_implementations)]

use std::process::ExitCode;
use tictactoe_rs::{Player, census};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let computer = match std::env::args().nth(1).as_deref() {
        None | Some("o" | "O") => Player::O,
        Some("x" | "X") => Player::X,
        Some(other) => {
            error!(argument = other, "expected 'x' or 'o'");
            return ExitCode::FAILURE;
        }
    };

    let census = census(computer);
    println!("computer plays {computer}: {census}");

    if census.losses(computer) > 0 {
        error!(losses = census.losses(computer), "computer lost");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
