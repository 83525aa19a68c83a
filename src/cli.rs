//! Command-line arguments for the console front end.

use clap::Parser;

/// Two-player tic-tac-toe at the console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the first player (plays x and moves first)
    #[arg(long, default_value = "player1")]
    pub player1: String,

    /// Name of the second player (plays o)
    #[arg(long, default_value = "player2")]
    pub player2: String,
}
