//! Console front end for the tic-tac-toe engine.
//!
//! Thin caller: prompts for `"rc"` coordinates, feeds them to the engine,
//! and re-reads state to render after every accepted move.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Lines, StdinLock, Write};
use tictactoe_engine::{Engine, Mark, Phase, Player, Turn};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut engine = Engine::new(
        Player::new(cli.player1, Mark::X),
        Player::new(cli.player2, Mark::O),
    );

    info!("starting console game");
    run(&mut engine)
}

/// Runs games until the user declines a restart or input ends.
fn run(engine: &mut Engine) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if play_game(engine, &mut lines)?.is_none() {
            return Ok(());
        }

        match engine.phase() {
            Phase::Won(_) => {
                let winner = engine.winner().map(Player::name).unwrap_or_default();
                println!("{winner} won");
            }
            Phase::Tied => println!("We have a tie!"),
            Phase::InProgress => unreachable!("game loop exits only in a terminal phase"),
        }

        if !prompt(&mut lines, "Play again? (y/n): ")?.is_some_and(|a| a.eq_ignore_ascii_case("y"))
        {
            return Ok(());
        }
        engine.restart();
    }
}

/// Plays one game to a terminal phase. Returns `None` when input ends.
fn play_game(engine: &mut Engine, lines: &mut Lines<StdinLock<'_>>) -> Result<Option<()>> {
    while engine.is_in_progress() {
        println!("{}", engine.active_player().info());

        let Some(input) = prompt(lines, "Give row and column: ")? else {
            return Ok(None);
        };

        let coord = match input.parse() {
            Ok(coord) => coord,
            Err(err) => {
                println!("Invalid move ({err}), try again.");
                continue;
            }
        };

        match engine.play_turn(coord) {
            Ok(turn) => {
                println!("{}\n", engine.board().render());
                if turn != Turn::Placed {
                    break;
                }
            }
            Err(err) => println!("Invalid move ({err}), try again."),
        }
    }
    Ok(Some(()))
}

/// Prints a prompt and reads one trimmed line; `None` on end of input.
fn prompt(lines: &mut Lines<StdinLock<'_>>, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}
