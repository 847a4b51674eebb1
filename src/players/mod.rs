//! Player trait and implementations.
//!
//! A [`Player`] is a move source: the session asks it for the next move
//! and applies the answer through the game engine. Humans read from an
//! input line source; the AI players each wrap one strategy.

mod heuristic;
mod human;
mod minimax;
mod random;

pub use heuristic::HeuristicPlayer;
pub use human::{HumanPlayer, LineSource, StdinInput};
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use crate::game::{Game, Position};

/// Errors a player can report when asked for a move.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlayerError {
    /// Input could not be parsed as a move. Recoverable: the session
    /// re-prompts the same player.
    #[display("invalid input: {_0}")]
    InvalidInput(#[error(not(source))] String),
    /// The input source reached end of input.
    #[display("input closed")]
    InputClosed,
    /// No empty square exists. Players are never asked to move on a
    /// terminal board, so this is a contract violation.
    #[display("no legal moves available")]
    NoMoves,
    /// Reading input failed.
    #[display("input error: {_0}")]
    #[from]
    Io(std::io::Error),
}

/// Trait for players that can make moves.
pub trait Player {
    /// Returns this player's next move for the current game.
    ///
    /// The board is guaranteed non-terminal. The player does not apply
    /// the move; the session does, and re-prompts on a rejected one.
    fn next_move(&mut self, game: &Game) -> Result<Position, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
