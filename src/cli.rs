//! Command-line interface for noughts.

use crate::ai::Difficulty;
use clap::Parser;

/// Noughts - tic-tac-toe against a tiered computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Difficulty tier for the computer (easy, medium, hard)
    #[arg(short, long, default_value = "hard")]
    pub difficulty: Difficulty,

    /// Seed for the computer's random source (omit for entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, default_value = "300")]
    pub ai_delay_ms: u64,
}
