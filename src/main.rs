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

use std::error::Error;
use std::io::{self, BufRead, Write};
use tictactoe_rs::{
    CELLS, Game, Gameboard, GameboardError, Player, SIDE_LEN, play_computer_move,
};
use tracing_subscriber::EnvFilter;

fn print_board(board: &Gameboard) {
    for (row_index, row) in board.cells().chunks(SIDE_LEN).enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            let symbol = match cell {
                None => char::from_digit((row_index * SIDE_LEN + col_index + 1) as u32, 10)
                    .unwrap_or(' '),
                Some(player) => player.symbol(),
            };
            print!(" {symbol} ");
            if col_index + 1 < SIDE_LEN {
                print!("|");
            }
        }
        println!();
        if row_index + 1 < SIDE_LEN {
            println!("---+---+---");
        }
    }
}

/// Reads one trimmed line. `None` on end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Maps the human's 1-based cell number to a board index.
fn parse_cell(line: &str) -> Option<usize> {
    match line.parse::<usize>() {
        Ok(cell @ 1..=CELLS) => Some(cell - 1),
        _ => None,
    }
}

/// Maps the answer to "play 1st or 2nd" to the human's side.
fn parse_side(line: &str) -> Option<Player> {
    match line {
        "1" => Some(Player::X),
        "2" => Some(Player::O),
        _ => None,
    }
}

/// Asks which side the human plays. `None` on end of input.
fn choose_side(input: &mut impl BufRead) -> io::Result<Option<Player>> {
    loop {
        print!("Do you want to play 1st (X) or 2nd (O)? [1/2] ");
        io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_side(&line) {
            Some(side) => return Ok(Some(side)),
            None => println!("Please pick 1 or 2"),
        }
    }
}

/// Asks the human until they pick a legal cell. `false` on end of input.
fn human_move(
    game: &mut Game,
    human: Player,
    input: &mut impl BufRead,
) -> Result<bool, Box<dyn Error>> {
    loop {
        print!("Choose your move (cell): ");
        for cell in game.board().available_cells_iter().map(|x| x + 1) {
            print!("{cell},");
        }
        println!();
        io::stdout().flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        let Some(index) = parse_cell(&line) else {
            println!("'{line}' is not a cell between 1 and {CELLS}, try again");
            continue;
        };

        match game.place_mark(index, human) {
            Ok(_) => return Ok(true),
            Err(GameboardError::CellOccupied(_)) => {
                println!("cell {} is already occupied, try again", index + 1);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    println!("Let's play tic-tac-toe against the computer.");
    let Some(mut human) = choose_side(&mut input)? else {
        return Ok(());
    };

    loop {
        println!("----------------");
        print_board(game.board());
        println!();
        println!("{game}");

        if !game.is_active() {
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            match read_line(&mut input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    let Some(side) = choose_side(&mut input)? else {
                        break;
                    };
                    human = side;
                    game.restart();
                    continue;
                }
                _ => break,
            }
        }

        // Human player
        if game.current_player() == human {
            if !human_move(&mut game, human, &mut input)? {
                break;
            }
        }
        // Computer player
        else {
            let (cell, _) = play_computer_move(&mut game)?;
            println!("Computer chose cell {}", cell + 1);
        }
    }

    Ok(())
}
