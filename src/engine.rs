//! The turn-state machine: players, available cells, phase, and win/tie
//! evaluation.

use crate::board::{Board, Mark};
use crate::coordinate::Coordinate;
use crate::player::Player;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Top-level game phase.
///
/// Transitions are one-directional: `InProgress` moves to `Won` or `Tied`,
/// and only an explicit [`Engine::restart`] leaves a terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are being accepted.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// All nine cells are occupied with no line.
    Tied,
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Mark placed; play passes to the other player.
    Placed,
    /// The move completed a line.
    Won(Mark),
    /// The move filled the last cell with no line.
    Tied,
}

/// Reasons a move is rejected.
///
/// Every rejection leaves the engine unchanged, so callers that do not
/// care about the reason may treat an `Err` as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The cell is occupied (no longer in the available set).
    #[display("Cell {_0} is not available")]
    CellUnavailable(Coordinate),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for TurnError {}

/// Two-player tic-tac-toe engine.
///
/// Owns the board, both players, the active-player pointer, and the set of
/// unplayed coordinates. All mutation goes through [`Engine::play_turn`]
/// and [`Engine::restart`].
///
/// Invariant: `available_cells().len() + board().occupied_count() == 9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    board: Board,
    players: [Player; 2],
    active: usize,
    available: BTreeSet<Coordinate>,
    phase: Phase,
}

impl Engine {
    /// Creates an engine with the given players; `first` moves first.
    #[instrument]
    pub fn new(first: Player, second: Player) -> Self {
        debug_assert_ne!(first.mark(), second.mark(), "players must use distinct marks");
        Self {
            board: Board::new(),
            players: [first, second],
            active: 0,
            available: Coordinate::ALL.into_iter().collect(),
            phase: Phase::InProgress,
        }
    }

    /// Submits the active player's move.
    ///
    /// On acceptance the coordinate leaves the available set, the active
    /// player's mark lands on the board, and the phase is re-evaluated:
    /// a completed line through the placed cell ends the game as
    /// `Won(mark)` (the active player does not switch), a full board ends
    /// it as `Tied`, otherwise play passes to the other player.
    ///
    /// # Errors
    ///
    /// `CellUnavailable` if the coordinate is occupied, `GameOver` if the
    /// phase is terminal. Either way the engine is left untouched.
    #[instrument(skip(self), fields(active = %self.active_player().name()))]
    pub fn play_turn(&mut self, coord: Coordinate) -> Result<Turn, TurnError> {
        if self.phase != Phase::InProgress {
            return Err(TurnError::GameOver);
        }
        if !self.available.remove(&coord) {
            return Err(TurnError::CellUnavailable(coord));
        }

        let mark = self.active_player().mark();
        self.board.place(coord, mark);

        if rules::wins_through(&self.board, coord) {
            debug!(winner = %mark, "line completed");
            self.phase = Phase::Won(mark);
            return Ok(Turn::Won(mark));
        }
        if self.available.is_empty() {
            debug!("board full with no line");
            self.phase = Phase::Tied;
            return Ok(Turn::Tied);
        }

        self.active = 1 - self.active;
        Ok(Turn::Placed)
    }

    /// Returns the engine to its initial state: empty board, all nine
    /// cells available, first player active, phase `InProgress`.
    ///
    /// Players are kept as constructed.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.available = Coordinate::ALL.into_iter().collect();
        self.active = 0;
        self.phase = Phase::InProgress;
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while moves are being accepted.
    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// True once a player has completed a line.
    pub fn is_won(&self) -> bool {
        matches!(self.phase, Phase::Won(_))
    }

    /// The winning player, if the game has been won.
    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            Phase::Won(mark) => self.players.iter().find(|p| p.mark() == mark),
            _ => None,
        }
    }

    /// The player whose move is currently expected.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Coordinates not yet occupied. Shrinks with every accepted move
    /// until a restart.
    pub fn available_cells(&self) -> &BTreeSet<Coordinate> {
        &self.available
    }

    /// The board contents for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Engine {
    /// Engine with the stock players: "player1" on x, "player2" on o.
    fn default() -> Self {
        Self::new(
            Player::new("player1", Mark::X),
            Player::new("player2", Mark::O),
        )
    }
}
