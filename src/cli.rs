//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, ValueEnum};

/// Tic-tac-toe with selectable opponents
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against another human or an AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays O
    #[arg(short, long, value_enum, default_value = "minimax")]
    pub opponent: Opponent,

    /// Emit session events as JSON lines instead of a rendered grid
    #[arg(long)]
    pub json: bool,
}

/// Opponent for the O side, fixed for the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// A second human sharing the terminal
    Human,
    /// AI picking uniformly random moves
    Random,
    /// AI taking an immediate win or block, else random
    Heuristic,
    /// AI playing perfectly via exhaustive search
    Minimax,
}
