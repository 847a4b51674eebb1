//! AI player that picks a uniformly random empty square.

use super::{Player, PlayerError};
use crate::game::{Board, Game, Position};
use rand::prelude::IndexedRandom;
use tracing::debug;

/// AI player making uniformly random moves.
pub struct RandomPlayer {
    name: String,
}

impl RandomPlayer {
    /// Creates a new random player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Picks a random empty square, or `None` if the board is full.
    pub fn choose(board: &Board) -> Option<Position> {
        Position::valid_moves(board)
            .choose(&mut rand::rng())
            .copied()
    }
}

impl Player for RandomPlayer {
    fn next_move(&mut self, game: &Game) -> Result<Position, PlayerError> {
        let pos = Self::choose(game.board()).ok_or(PlayerError::NoMoves)?;
        debug!(ai = %self.name, position = %pos, "random move chosen");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
