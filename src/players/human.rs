//! Human player that gets moves from an input line source.

use super::{Player, PlayerError};
use crate::game::{Game, Position};

/// Source of raw input lines for a human player.
pub trait LineSource {
    /// Reads the next line, or `None` at end of input.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

/// Line source backed by standard input.
pub struct StdinInput;

impl LineSource for StdinInput {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin().read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

/// Human player reading moves from a line source.
///
/// Accepts a cell number 1-9 or a position label ("center", "top-left").
/// Unparseable input is reported as recoverable so the session re-prompts;
/// occupancy is checked by the engine when the move is applied.
pub struct HumanPlayer<S> {
    name: String,
    input: S,
}

impl<S: LineSource> HumanPlayer<S> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: S) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<S: LineSource> Player for HumanPlayer<S> {
    fn next_move(&mut self, _game: &Game) -> Result<Position, PlayerError> {
        let line = self.input.next_line()?.ok_or(PlayerError::InputClosed)?;
        Position::from_input(&line).ok_or_else(|| {
            PlayerError::InvalidInput(format!(
                "expected a cell number 1-9, got {:?}",
                line.trim()
            ))
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
