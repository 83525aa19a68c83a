//! Two-player tic-tac-toe: a 3x3 board and a turn-state machine with
//! win/tie detection.
//!
//! The [`Engine`] owns the board, both players, the active-player pointer,
//! and the set of unplayed coordinates. Callers (a console loop, a UI)
//! submit moves and re-read state to render:
//!
//! ```
//! use tictactoe_engine::{Coordinate, Engine, Phase};
//!
//! let mut engine = Engine::default();
//! engine.play_turn("11".parse::<Coordinate>()?)?;
//! assert_eq!(engine.phase(), Phase::InProgress);
//! assert_eq!(engine.active_player().name(), "player2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Moves arrive either as a structured [`Coordinate`] or, at the text
//! boundary, as one of the nine two-character strings `"00"` through
//! `"22"`. Illegal input never reaches the engine: range errors fail at
//! coordinate parsing, and occupied cells or moves after game over are
//! rejected leaving the engine untouched.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod engine;
mod player;
mod rules;

pub use board::{Board, Cell, Mark};
pub use coordinate::{Coordinate, ParseCoordinateError};
pub use engine::{Engine, Phase, Turn, TurnError};
pub use player::Player;
pub use rules::check_winner;
