//! Draw detection for the tic-tac-toe board.

use super::super::types::Board;
use super::win::winning_line;
use tracing::instrument;

/// Checks whether the board is a draw: every cell occupied and no
/// completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
