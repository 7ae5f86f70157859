//! Terminal front end for noughts.
//!
//! Thin presentation layer over [`GameSession`]: renders the board and
//! scoreboard, translates typed commands into core operations, and
//! paces the computer's reply. All rules live in the library.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Difficulty, Game, GameSession, LineKind, Mark, Outcome};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    };
    session.set_difficulty(cli.difficulty);
    let ai_delay = Duration::from_millis(cli.ai_delay_ms);

    println!("noughts - you are X; enter moves as `row col` (0-2)");
    println!("commands: easy | medium | hard | reset | quit");

    let stdin = io::stdin();
    loop {
        render(&session);
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["quit"] | ["q"] => break,
            ["reset"] => session.reset(),
            [word] => match word.parse::<Difficulty>() {
                Ok(tier) => session.set_difficulty(tier),
                Err(_) => println!("unrecognized command: {word}"),
            },
            [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) => play(&mut session, row, col, ai_delay),
                _ => println!("enter a move as two numbers, e.g. `0 2`"),
            },
            [] => {}
            _ => println!("unrecognized input"),
        }
    }

    Ok(())
}

/// Applies a human move and, if the game continues, the computer's
/// reply after a cosmetic pause.
fn play(session: &mut GameSession, row: usize, col: usize, ai_delay: Duration) {
    if session.game().is_over() {
        println!("the game is over - `reset` to play again");
        return;
    }

    match session.human_move(row, col) {
        Err(err) => println!("{err}"),
        Ok(false) => println!("that cell is taken"),
        Ok(true) => {
            if !session.game().is_over() {
                // Pacing only; the core has no timing dependency.
                thread::sleep(ai_delay);
                if let Some((row, col)) = session.ai_turn() {
                    println!("computer plays {row} {col}");
                }
            }
        }
    }
}

/// Renders the board, scoreboard, and status line.
fn render(session: &GameSession) {
    let game = session.game();
    println!();
    println!("{}", game.board().display());

    let scores = game.scores();
    println!(
        "difficulty: {}  |  you {} - computer {} - draws {}",
        session.difficulty(),
        scores.x_wins(),
        scores.o_wins(),
        scores.draws()
    );

    match game.outcome() {
        Outcome::InProgress => {
            if game.current_player() == Mark::X {
                println!("your turn");
            } else {
                println!("computer's turn");
            }
        }
        Outcome::Won(Mark::X) => println!("you win!{}", line_note(game)),
        Outcome::Won(Mark::O) => println!("computer wins!{}", line_note(game)),
        Outcome::Draw => println!("it's a draw"),
    }
}

/// Names the winning line for the status message.
fn line_note(game: &Game) -> String {
    match game.winning_line() {
        Some(line) => {
            let name = match line.kind {
                LineKind::Row => format!("row {}", line.index),
                LineKind::Column => format!("column {}", line.index),
                LineKind::Diagonal if line.index == 0 => "the main diagonal".to_string(),
                LineKind::Diagonal => "the anti-diagonal".to_string(),
            };
            format!(" ({name})")
        }
        None => String::new(),
    }
}
