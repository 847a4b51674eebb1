//! Tic-tac-toe CLI.
//!
//! Thin shell over the library: builds the two players from the command
//! line, then renders session events to stdout.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Opponent};
use tictactoe::{
    GameEvent, GameSession, HeuristicPlayer, HumanPlayer, MinimaxPlayer, Outcome, Player,
    RandomPlayer, StdinInput,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.json {
        print_welcome();
    }

    let player_x: Box<dyn Player> = Box::new(HumanPlayer::new("Player X", StdinInput));
    let player_o: Box<dyn Player> = match cli.opponent {
        Opponent::Human => Box::new(HumanPlayer::new("Player O", StdinInput)),
        Opponent::Random => Box::new(RandomPlayer::new("Random AI")),
        Opponent::Heuristic => Box::new(HeuristicPlayer::new("Heuristic AI")),
        Opponent::Minimax => Box::new(MinimaxPlayer::new("Minimax AI")),
    };

    let json = cli.json;
    let mut session = GameSession::new(player_x, player_o, move |event: GameEvent| {
        render(event, json);
    });
    session.run()?;

    Ok(())
}

/// Renders one session event to stdout.
fn render(event: GameEvent, json: bool) {
    if json {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::error!(%err, "failed to serialize event"),
        }
        return;
    }

    match event {
        GameEvent::TurnStarted { mark, name } => println!("\n{name} ({mark}) to move"),
        GameEvent::MoveMade { name, position, .. } => println!("{name} plays {position}"),
        GameEvent::BoardUpdated { board } => println!("\n{}", board.grid()),
        GameEvent::MoveRejected { reason, .. } => println!("{reason}. Try again."),
        GameEvent::GameOver { outcome, .. } => match outcome {
            Outcome::Won(mark) => println!("\nPlayer {mark} wins! Congratulations!"),
            Outcome::Draw => println!("\nIt's a draw! Game over."),
            Outcome::InProgress => {}
        },
    }
}

/// Prints the welcome banner and the positions legend.
fn print_welcome() {
    println!("Welcome to Tic-Tac-Toe!");
    println!("Enter a number from 1-9 to place your mark:");
    println!();
    println!(" 1 | 2 | 3 ");
    println!("-----------");
    println!(" 4 | 5 | 6 ");
    println!("-----------");
    println!(" 7 | 8 | 9 ");
}
