//! Marks, cells, and the 3x3 grid.

use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Mark {
    /// The "x" symbol (first player).
    X,
    /// The "o" symbol (second player).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for display.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Occupied by a player's mark.
    Marked(Mark),
}

impl Cell {
    /// True when no mark has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order. The board performs no occupancy
/// checking of its own: `place` overwrites unconditionally, and move
/// legality is the engine's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.index()]
    }

    /// Places a mark, overwriting whatever the cell held.
    pub fn place(&mut self, coord: Coordinate, mark: Mark) {
        self.cells[coord.index()] = Cell::Marked(mark);
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Cells as a row-major slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid, one row per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for coord in Coordinate::ALL {
            match self.get(coord) {
                Cell::Empty => out.push(' '),
                Cell::Marked(mark) => out.push(mark.symbol()),
            }
            if coord.col() < 2 {
                out.push('|');
            } else if coord.row() < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn coord(s: &str) -> Coordinate {
        s.parse().expect("valid coordinate")
    }

    #[test]
    fn test_marks_are_opponents() {
        for mark in Mark::iter() {
            assert_ne!(mark, mark.opponent());
            assert_eq!(mark, mark.opponent().opponent());
        }
    }

    #[test]
    fn test_each_mark_renders_its_symbol() {
        for mark in Mark::iter() {
            let mut board = Board::new();
            board.place(coord("11"), mark);
            assert!(board.render().contains(mark.symbol()));
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(Coordinate::ALL.into_iter().all(|c| board.get(c).is_empty()));
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(coord("12"), Mark::X);
        assert_eq!(board.get(coord("12")), Cell::Marked(Mark::X));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_overwrites() {
        // Occupancy checks live in the engine, not here.
        let mut board = Board::new();
        board.place(coord("00"), Mark::X);
        board.place(coord("00"), Mark::O);
        assert_eq!(board.get(coord("00")), Cell::Marked(Mark::O));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        for c in Coordinate::ALL {
            board.place(c, Mark::O);
        }
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render_grid() {
        let mut board = Board::new();
        board.place(coord("00"), Mark::X);
        board.place(coord("11"), Mark::O);
        board.place(coord("22"), Mark::X);
        assert_eq!(board.render(), "x| | \n-+-+-\n |o| \n-+-+-\n | |x");
    }
}
