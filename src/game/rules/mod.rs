//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated
//! from board storage so the engine and the move policy share one
//! line-scanning implementation.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::winning_line;
