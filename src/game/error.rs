//! Error types for the game engine.

use derive_more::{Display, Error};

/// A coordinate outside the 3x3 board was passed to the engine.
///
/// This is the only error the core can produce. Occupied cells and
/// finished games are ordinary move rejections, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({}, {}) is off the board", row, col)]
pub struct OutOfBounds {
    /// The offending row.
    pub row: usize,
    /// The offending column.
    pub col: usize,
}
