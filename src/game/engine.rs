//! Game engine: board state, turn order, terminal detection, scores.

use super::error::OutOfBounds;
use super::rules;
use super::types::{Board, Cell, Mark, Outcome, Scoreboard, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A tic-tac-toe game.
///
/// Owns the board, the turn marker, terminal-state detection, and the
/// running scoreboard. The scoreboard survives [`Game::reset`]; it is
/// bumped exactly once when a game reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Mark,
    outcome: Outcome,
    winning_line: Option<WinningLine>,
    scores: Scoreboard,
}

impl Game {
    /// Creates a new game with a zeroed scoreboard. X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            outcome: Outcome::InProgress,
            winning_line: None,
            scores: Scoreboard::default(),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns `Ok(true)` when the mark was placed (whether or not the
    /// game ended), `Ok(false)` when the game is already over or the
    /// cell is occupied — both leave the game untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when `row` or `col` is outside `0..3`.
    /// Nothing is mutated on any failure path.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<bool, OutOfBounds> {
        if row >= Board::SIZE || col >= Board::SIZE {
            return Err(OutOfBounds { row, col });
        }

        if self.is_over() || !self.board.is_empty(row, col) {
            debug!(row, col, outcome = ?self.outcome, "move rejected");
            return Ok(false);
        }

        let mark = self.current_player;
        self.board.set(row, col, Cell::Occupied(mark));
        self.update_outcome();

        // The turn only passes while the game is live; the marker is
        // meaningless once the game is over.
        if !self.is_over() {
            self.current_player = mark.opponent();
        }

        Ok(true)
    }

    /// Terminal detection, run once after every placement.
    fn update_outcome(&mut self) {
        if let Some((winner, line)) = rules::winning_line(&self.board) {
            self.outcome = Outcome::Won(winner);
            self.winning_line = Some(line);
            self.scores.record_win(winner);
        } else if rules::is_draw(&self.board) {
            self.outcome = Outcome::Draw;
            self.scores.record_draw();
        }
    }

    /// Starts a fresh game. The scoreboard carries over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::X;
        self.outcome = Outcome::InProgress;
        self.winning_line = None;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next. Meaningless once the game is
    /// over.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Checks whether the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Returns the line that won the game, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Returns the running scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
