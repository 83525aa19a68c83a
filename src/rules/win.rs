//! Win detection logic.
//!
//! The engine uses [`wins_through`], which examines only the lines passing
//! through the cell just played. [`check_winner`] scans all eight winning
//! lines; the two must agree on every reachable board.

use crate::board::{Board, Cell, Mark};
use crate::coordinate::Coordinate;
use tracing::instrument;

const MAIN_DIAGONAL: [Coordinate; 3] = [
    Coordinate::at(0, 0),
    Coordinate::at(1, 1),
    Coordinate::at(2, 2),
];

const ANTI_DIAGONAL: [Coordinate; 3] = [
    Coordinate::at(2, 0),
    Coordinate::at(1, 1),
    Coordinate::at(0, 2),
];

/// Checks whether the mark just placed at `coord` completed a line.
///
/// Examines only the row, the column, and (when `coord` lies on one) the
/// diagonals through `coord`. Returns false for an empty cell.
#[instrument(skip(board))]
pub fn wins_through(board: &Board, coord: Coordinate) -> bool {
    let cell = board.get(coord);
    if cell.is_empty() {
        return false;
    }
    let complete = |line: [Coordinate; 3]| line.into_iter().all(|c| board.get(c) == cell);

    let row = [
        Coordinate::at(coord.row(), 0),
        Coordinate::at(coord.row(), 1),
        Coordinate::at(coord.row(), 2),
    ];
    let col = [
        Coordinate::at(0, coord.col()),
        Coordinate::at(1, coord.col()),
        Coordinate::at(2, coord.col()),
    ];

    complete(row)
        || complete(col)
        || (coord.on_main_diagonal() && complete(MAIN_DIAGONAL))
        || (coord.on_anti_diagonal() && complete(ANTI_DIAGONAL))
}

/// Scans all eight winning lines for a completed line of one mark.
///
/// Returns `Some(mark)` if that mark has three in a line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    const LINES: [[Coordinate; 3]; 8] = [
        // Rows
        [Coordinate::at(0, 0), Coordinate::at(0, 1), Coordinate::at(0, 2)],
        [Coordinate::at(1, 0), Coordinate::at(1, 1), Coordinate::at(1, 2)],
        [Coordinate::at(2, 0), Coordinate::at(2, 1), Coordinate::at(2, 2)],
        // Columns
        [Coordinate::at(0, 0), Coordinate::at(1, 0), Coordinate::at(2, 0)],
        [Coordinate::at(0, 1), Coordinate::at(1, 1), Coordinate::at(2, 1)],
        [Coordinate::at(0, 2), Coordinate::at(1, 2), Coordinate::at(2, 2)],
        // Diagonals
        [Coordinate::at(0, 0), Coordinate::at(1, 1), Coordinate::at(2, 2)],
        [Coordinate::at(2, 0), Coordinate::at(1, 1), Coordinate::at(0, 2)],
    ];

    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Marked(mark) = cell
            && board.get(b) == cell
            && board.get(c) == cell
        {
            return Some(mark);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> Coordinate {
        s.parse().expect("valid coordinate")
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        for c in Coordinate::ALL {
            assert!(!wins_through(&board, c));
        }
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(coord("00"), Mark::X);
        board.place(coord("01"), Mark::X);
        board.place(coord("02"), Mark::X);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert!(wins_through(&board, coord("01")));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        board.place(coord("02"), Mark::O);
        board.place(coord("12"), Mark::O);
        board.place(coord("22"), Mark::O);
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert!(wins_through(&board, coord("22")));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(coord("20"), Mark::O);
        board.place(coord("11"), Mark::O);
        board.place(coord("02"), Mark::O);
        assert_eq!(check_winner(&board), Some(Mark::O));
        assert!(wins_through(&board, coord("11")));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(coord("00"), Mark::X);
        board.place(coord("01"), Mark::X);
        assert_eq!(check_winner(&board), None);
        assert!(!wins_through(&board, coord("01")));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.place(coord("00"), Mark::X);
        board.place(coord("01"), Mark::O);
        board.place(coord("02"), Mark::X);
        assert_eq!(check_winner(&board), None);
        assert!(!wins_through(&board, coord("02")));
    }

    #[test]
    fn test_diagonal_checks_only_apply_on_diagonal_cells() {
        // Three o's on the main diagonal; a cell off that diagonal
        // must not report a win through itself.
        let mut board = Board::new();
        board.place(coord("00"), Mark::O);
        board.place(coord("11"), Mark::O);
        board.place(coord("22"), Mark::O);
        board.place(coord("01"), Mark::O);
        assert!(!wins_through(&board, coord("01")));
        assert!(wins_through(&board, coord("11")));
    }
}
