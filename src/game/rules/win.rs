//! Win detection for the tic-tac-toe board.

use super::super::types::{Board, Cell, LineKind, Mark, WinningLine};
use tracing::instrument;

/// The 8 lines in canonical scan order: rows top-to-bottom, then
/// columns left-to-right, then the main diagonal, then the
/// anti-diagonal. The scan order fixes which line a win is reported
/// on, so it must not be rearranged.
const LINES: [(LineKind, u8, [(usize, usize); 3]); 8] = [
    (LineKind::Row, 0, [(0, 0), (0, 1), (0, 2)]),
    (LineKind::Row, 1, [(1, 0), (1, 1), (1, 2)]),
    (LineKind::Row, 2, [(2, 0), (2, 1), (2, 2)]),
    (LineKind::Column, 0, [(0, 0), (1, 0), (2, 0)]),
    (LineKind::Column, 1, [(0, 1), (1, 1), (2, 1)]),
    (LineKind::Column, 2, [(0, 2), (1, 2), (2, 2)]),
    (LineKind::Diagonal, 0, [(0, 0), (1, 1), (2, 2)]),
    (LineKind::Diagonal, 1, [(0, 2), (1, 1), (2, 0)]),
];

/// Scans the board for a completed line.
///
/// Returns the winning mark together with a descriptor of the first
/// completed line in scan order, or `None` when no line is complete.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, WinningLine)> {
    for (kind, index, [(ar, ac), (br, bc), (cr, cc)]) in LINES {
        let cell = board.get(ar, ac);
        if cell != Some(Cell::Empty)
            && cell == board.get(br, bc)
            && cell == board.get(cr, cc)
        {
            if let Some(Cell::Occupied(mark)) = cell {
                return Some((mark, WinningLine { kind, index }));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .place(0, 0, Mark::X)
            .place(0, 1, Mark::X)
            .place(0, 2, Mark::X);
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::X,
                WinningLine {
                    kind: LineKind::Row,
                    index: 0
                }
            ))
        );
    }

    #[test]
    fn test_winner_middle_column() {
        let board = Board::new()
            .place(0, 1, Mark::O)
            .place(1, 1, Mark::O)
            .place(2, 1, Mark::O);
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::O,
                WinningLine {
                    kind: LineKind::Column,
                    index: 1
                }
            ))
        );
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = Board::new()
            .place(0, 0, Mark::O)
            .place(1, 1, Mark::O)
            .place(2, 2, Mark::O);
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::O,
                WinningLine {
                    kind: LineKind::Diagonal,
                    index: 0
                }
            ))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .place(0, 2, Mark::X)
            .place(1, 1, Mark::X)
            .place(2, 0, Mark::X);
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::X,
                WinningLine {
                    kind: LineKind::Diagonal,
                    index: 1
                }
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = Board::new().place(0, 0, Mark::X).place(0, 1, Mark::X);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_scan_order_reports_row_before_column() {
        // Both the bottom row and the left column are complete; the
        // row comes first in scan order.
        let board = Board::new()
            .place(2, 0, Mark::X)
            .place(2, 1, Mark::X)
            .place(2, 2, Mark::X)
            .place(0, 0, Mark::X)
            .place(1, 0, Mark::X);
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::X,
                WinningLine {
                    kind: LineKind::Row,
                    index: 2
                }
            ))
        );
    }
}
