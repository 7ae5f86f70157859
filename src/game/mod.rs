//! Game state and rules for tic-tac-toe.

mod engine;
mod error;
pub(crate) mod rules;
mod types;

pub use engine::Game;
pub use error::OutOfBounds;
pub use types::{Board, Cell, LineKind, Mark, Outcome, Scoreboard, WinningLine};
