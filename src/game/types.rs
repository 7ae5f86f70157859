//! Core domain types for the tic-tac-toe engine.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X — the human player, always moves first.
    X,
    /// O — the computer opponent.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board, addressed by `(row, col)` with both in `0..3`.
///
/// The board is `Copy`, so hypothetical placements are cheap scratch
/// copies that never touch live game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Board side length.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < Self::SIZE && col < Self::SIZE);
        row * Self::SIZE + col
    }

    /// Gets the cell at `(row, col)`, or `None` if the coordinate is off
    /// the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return None;
        }
        Some(self.cells[Self::index(row, col)])
    }

    /// Checks whether the cell at `(row, col)` is empty.
    ///
    /// Off-board coordinates are reported as not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Overwrites the cell at `(row, col)`. Callers validate bounds first.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::index(row, col)] = cell;
    }

    /// Returns a copy of the board with `mark` placed at `(row, col)`.
    ///
    /// This is the hypothetical-placement primitive used by the move
    /// policy's win/block scans. The coordinate must be on the board;
    /// occupancy is not checked.
    pub fn place(&self, row: usize, col: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.set(row, col, Cell::Occupied(mark));
        next
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns the empty cells in row-major scan order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                if self.is_empty(row, col) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Counts the cells occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..Self::SIZE {
            for col in 0..Self::SIZE {
                let symbol = match self.cells[Self::index(row, col)] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                result.push(' ');
                result.push(symbol);
                if col < Self::SIZE - 1 {
                    result.push_str(" |");
                }
            }
            if row < Self::SIZE - 1 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row for the given mark.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Draw,
}

/// The kind of line that completed a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// A horizontal row.
    Row,
    /// A vertical column.
    Column,
    /// A diagonal.
    Diagonal,
}

/// Descriptor of the line that won the game, recorded so the
/// presentation layer can highlight it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Row, column, or diagonal.
    pub kind: LineKind,
    /// Row/column index 0-2; for diagonals 0 is the main diagonal and
    /// 1 the anti-diagonal.
    pub index: u8,
}

/// Running score across games in a session. Counters only go up;
/// `Game::reset` leaves them alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub(crate) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}
