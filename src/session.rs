//! Game session: one human-vs-computer match series.
//!
//! The session owns everything the front end needs to drive play — the
//! game, the selected difficulty, and the computer's move policy — so
//! none of it lives in ambient global state.

use crate::ai::{Difficulty, MovePolicy};
use crate::game::{Game, Mark, OutOfBounds};
use tracing::{debug, info, instrument, warn};

/// A human-vs-computer session. The human plays X and always moves
/// first; scores accumulate across resets for the life of the session.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    difficulty: Difficulty,
    policy: MovePolicy,
}

impl GameSession {
    /// Creates a session with an entropy-seeded move policy and the
    /// default difficulty.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(MovePolicy::new())
    }

    /// Creates a session with a deterministic move policy seed.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_policy(MovePolicy::seeded(seed))
    }

    fn with_policy(policy: MovePolicy) -> Self {
        info!("creating game session");
        Self {
            game: Game::new(),
            difficulty: Difficulty::default(),
            policy,
        }
    }

    /// Changes the computer's difficulty tier. Takes effect on its
    /// next move; the game in progress is untouched.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "difficulty changed");
        self.difficulty = difficulty;
    }

    /// Starts a fresh game, keeping the scoreboard.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting game");
        self.game.reset();
    }

    /// Applies the human's move at `(row, col)`.
    ///
    /// Returns `Ok(false)` without touching the game when it is not the
    /// human's turn, the game is over, or the cell is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] for coordinates outside `0..3`.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, row: usize, col: usize) -> Result<bool, OutOfBounds> {
        if !self.game.is_over() && self.game.current_player() != Mark::X {
            warn!(row, col, "human move attempted on computer's turn");
            return Ok(false);
        }
        let applied = self.game.make_move(row, col)?;
        if applied {
            info!(row, col, outcome = ?self.game.outcome(), "human moved");
        }
        Ok(applied)
    }

    /// Lets the computer take its turn, if it is the computer's turn.
    ///
    /// Selects a cell under the current difficulty and applies it
    /// through the engine, so terminal detection and scoring run
    /// exactly as they do for human moves. Returns the coordinate
    /// played, or `None` when no move was made.
    #[instrument(skip(self))]
    pub fn ai_turn(&mut self) -> Option<(usize, usize)> {
        if self.game.is_over() || self.game.current_player() != Mark::O {
            debug!("not the computer's turn");
            return None;
        }

        let (row, col) = self
            .policy
            .select_move(self.game.board(), Mark::O, self.difficulty)?;

        match self.game.make_move(row, col) {
            Ok(true) => {
                info!(row, col, outcome = ?self.game.outcome(), "computer moved");
                Some((row, col))
            }
            Ok(false) | Err(_) => {
                // The policy only proposes empty on-board cells.
                warn!(row, col, "policy proposed an unplayable cell");
                None
            }
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
