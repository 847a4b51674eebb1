//! Game orchestration between two players.

use crate::game::{Game, Mark, MoveError, Outcome, Position};
use crate::players::{Player, PlayerError};
use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Events reported to the output collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A player's turn began.
    TurnStarted {
        /// Mark whose turn it is.
        mark: Mark,
        /// Display name of the player.
        name: String,
    },
    /// A move was accepted.
    MoveMade {
        /// Mark that moved.
        mark: Mark,
        /// Display name of the player.
        name: String,
        /// Square that was played.
        position: Position,
    },
    /// Board snapshot after an accepted move.
    BoardUpdated {
        /// Current board state.
        board: crate::game::Board,
    },
    /// A move was rejected; the same player will be re-prompted.
    MoveRejected {
        /// Display name of the player.
        name: String,
        /// Why the move was rejected.
        reason: String,
    },
    /// The game ended.
    GameOver {
        /// Terminal outcome.
        outcome: Outcome,
        /// Result string: "X wins", "O wins", or "draw".
        result: String,
    },
}

/// Consumer of session events.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: GameEvent);
}

impl<F: FnMut(GameEvent)> EventSink for F {
    fn emit(&mut self, event: GameEvent) {
        self(event)
    }
}

/// Orchestrates one game between two players.
///
/// X moves first. Each turn the session asks the active player for a move
/// and applies it through the engine. A rejected move (unparseable input
/// or an occupied square) re-prompts the same player without toggling the
/// turn; an accepted move reports a board snapshot. The session is one
/// game: it stops once the outcome is terminal.
pub struct GameSession<S: EventSink> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    events: S,
}

impl<S: EventSink> GameSession<S> {
    /// Creates a new session with an empty board and X to move.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, events: S) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            events,
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game to completion and returns the terminal outcome.
    ///
    /// # Errors
    ///
    /// Fails on unrecoverable player errors (input exhausted, I/O failure)
    /// and on internal contract violations; recoverable rejections are
    /// reported as [`GameEvent::MoveRejected`] and retried instead.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!(x = %self.player_x.name(), o = %self.player_o.name(), "starting game");

        loop {
            let outcome = self.game.outcome();
            if outcome.is_terminal() {
                info!(%outcome, "game over");
                self.events.emit(GameEvent::GameOver {
                    outcome,
                    result: outcome.to_string(),
                });
                return Ok(outcome);
            }

            let mark = self.game.to_move();

            // Get the name first (immutable borrow), then the player
            // (mutable borrow of a single field).
            let name = if mark == Mark::X {
                self.player_x.name().to_string()
            } else {
                self.player_o.name().to_string()
            };
            self.events.emit(GameEvent::TurnStarted {
                mark,
                name: name.clone(),
            });

            let player = if mark == Mark::X {
                &mut self.player_x
            } else {
                &mut self.player_o
            };

            debug!(player = %name, %mark, "waiting for move");
            let position = match player.next_move(&self.game) {
                Ok(position) => position,
                Err(PlayerError::InvalidInput(reason)) => {
                    debug!(player = %name, %reason, "input rejected");
                    self.events.emit(GameEvent::MoveRejected { name, reason });
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            match self.game.make_move(position) {
                Ok(_) => {}
                Err(err @ MoveError::SquareOccupied(_)) => {
                    debug!(player = %name, %err, "move rejected");
                    self.events.emit(GameEvent::MoveRejected {
                        name,
                        reason: err.to_string(),
                    });
                    continue;
                }
                // The loop never asks a player to move on a terminal board.
                Err(err @ MoveError::GameOver) => {
                    return Err(anyhow::Error::new(err)
                        .context("player was asked to move on a finished game"));
                }
            }

            self.events.emit(GameEvent::MoveMade {
                mark,
                name,
                position,
            });
            self.events.emit(GameEvent::BoardUpdated {
                board: self.game.board().clone(),
            });
        }
    }
}
