//! Tic-tac-toe engine with selectable opponents.
//!
//! # Architecture
//!
//! - **Game**: board state, move legality, and win/draw detection
//! - **Players**: move sources - a human reading input lines, or one of
//!   three AI strategies (random, one-ply win/block, full minimax)
//! - **Session**: turn orchestration reporting [`GameEvent`]s to an
//!   output collaborator
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, GameEvent, MinimaxPlayer, Outcome, Player};
//!
//! # fn example() -> anyhow::Result<()> {
//! let x: Box<dyn Player> = Box::new(MinimaxPlayer::new("AI X"));
//! let o: Box<dyn Player> = Box::new(MinimaxPlayer::new("AI O"));
//! let mut session = GameSession::new(x, o, |_event: GameEvent| {});
//!
//! // Two optimal players always draw.
//! assert_eq!(session.run()?, Outcome::Draw);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod players;
mod session;

// Crate-level exports - Game engine
pub use game::{Board, Game, Mark, MoveError, Outcome, ParseBoardError, Position, Square, evaluate};

// Crate-level exports - Players
pub use players::{
    HeuristicPlayer, HumanPlayer, LineSource, MinimaxPlayer, Player, PlayerError, RandomPlayer,
    StdinInput,
};

// Crate-level exports - Session
pub use session::{EventSink, GameEvent, GameSession};
