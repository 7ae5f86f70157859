//! Move selection for the computer opponent.
//!
//! Three difficulty tiers share one entry point, [`MovePolicy::select_move`].
//! The policy only reads the board and proposes a coordinate; applying the
//! mark and all turn/score bookkeeping stay with [`crate::game::Game`].

use crate::game::{Board, Mark};
use crate::game::rules::winning_line;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty tier for the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random among empty cells.
    Easy,
    /// Coin flip per move between `Easy` and `Hard` behavior.
    Medium,
    /// Fixed priority cascade: win, block, center, corner, anything.
    #[default]
    Hard,
}

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// Computer move selection with an injected random source.
///
/// The RNG is owned by the policy so games are reproducible from a
/// seed; use [`MovePolicy::seeded`] in tests.
#[derive(Debug, Clone)]
pub struct MovePolicy {
    rng: ChaCha20Rng,
}

impl MovePolicy {
    /// Creates a policy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Creates a policy with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Selects a cell for `mark` under the given difficulty tier.
    ///
    /// Returns `None` only when the board has no empty cell; callers
    /// invoke this mid-game. The board is never mutated — hypothetical
    /// win/block checks run on scratch copies.
    #[instrument(skip(self, board))]
    pub fn select_move(
        &mut self,
        board: &Board,
        mark: Mark,
        difficulty: Difficulty,
    ) -> Option<(usize, usize)> {
        let choice = match difficulty {
            Difficulty::Easy => self.random_move(board),
            // Per-move coin flip, re-evaluated every turn.
            Difficulty::Medium => {
                if self.rng.gen_bool(0.5) {
                    self.smart_move(board, mark)
                } else {
                    self.random_move(board)
                }
            }
            Difficulty::Hard => self.smart_move(board, mark),
        };
        debug!(?mark, ?difficulty, ?choice, "selected move");
        choice
    }

    /// Uniform choice among all empty cells.
    fn random_move(&mut self, board: &Board) -> Option<(usize, usize)> {
        board.empty_cells().choose(&mut self.rng).copied()
    }

    /// The hard-tier cascade. Each step runs only if the previous
    /// found nothing. This is a one-ply scan, not a search: it can
    /// lose to a double threat, and that behavior is deliberate.
    fn smart_move(&mut self, board: &Board, mark: Mark) -> Option<(usize, usize)> {
        // 1. Take an immediate win.
        if let Some(cell) = completing_cell(board, mark) {
            return Some(cell);
        }

        // 2. Block the opponent's immediate win.
        if let Some(cell) = completing_cell(board, mark.opponent()) {
            return Some(cell);
        }

        // 3. Take the center.
        if board.is_empty(1, 1) {
            return Some((1, 1));
        }

        // 4. Take a random empty corner.
        let corners: Vec<(usize, usize)> = CORNERS
            .iter()
            .copied()
            .filter(|&(row, col)| board.is_empty(row, col))
            .collect();
        if let Some(cell) = corners.choose(&mut self.rng) {
            return Some(*cell);
        }

        // 5. Take anything left.
        self.random_move(board)
    }
}

impl Default for MovePolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// First empty cell in row-major scan order where placing `mark`
/// completes a line, evaluated on a scratch copy of the board.
fn completing_cell(board: &Board, mark: Mark) -> Option<(usize, usize)> {
    board.empty_cells().into_iter().find(|&(row, col)| {
        winning_line(&board.place(row, col, mark)).is_some_and(|(winner, _)| winner == mark)
    })
}
