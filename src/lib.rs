//! Noughts - tic-tac-toe with a tiered computer opponent
//!
//! The crate separates pure game rules from move selection:
//!
//! - **Game**: board state, strict turn alternation, terminal
//!   detection, winning-line identification, and a running scoreboard
//!   that survives resets.
//! - **MovePolicy**: selects the computer's cell under three
//!   difficulty tiers, from an injected (seedable) random source.
//! - **GameSession**: owns both plus the selected difficulty, giving
//!   a front end one object to drive.
//!
//! # Example
//!
//! ```
//! use noughts::{GameSession, Outcome};
//!
//! let mut session = GameSession::with_seed(7);
//! session.human_move(1, 1).unwrap();
//! let reply = session.ai_turn();
//! assert!(reply.is_some());
//! assert_eq!(session.game().outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod cli;
mod game;
mod session;

// Crate-level exports - move selection
pub use ai::{Difficulty, MovePolicy};

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - game state and rules
pub use game::{Board, Cell, Game, LineKind, Mark, OutOfBounds, Outcome, Scoreboard, WinningLine};

// Crate-level exports - session management
pub use session::GameSession;
