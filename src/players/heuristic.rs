//! One-ply lookahead AI: win now, else block, else play randomly.

use super::random::RandomPlayer;
use super::{Player, PlayerError};
use crate::game::{Board, Game, Mark, Outcome, Position, Square, evaluate};
use tracing::debug;

/// AI player with single-ply win/block lookahead.
pub struct HeuristicPlayer {
    name: String,
}

impl HeuristicPlayer {
    /// Creates a new heuristic player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Chooses a move for `mark`:
    ///
    /// 1. a square that wins immediately for `mark`, if one exists;
    /// 2. else a square the opponent would win with next turn (block it);
    /// 3. else a random empty square.
    ///
    /// Candidates are scanned in ascending index order, so ties break
    /// toward the lowest index. Returns `None` only on a full board.
    pub fn choose(board: &Board, mark: Mark) -> Option<Position> {
        let mut scratch = board.clone();
        winning_square(&mut scratch, mark)
            .or_else(|| winning_square(&mut scratch, mark.opponent()))
            .or_else(|| RandomPlayer::choose(board))
    }
}

/// Finds the first empty square that completes a line for `mark`.
///
/// Each candidate is placed speculatively, evaluated, and reverted before
/// the next one is tried; the board is unchanged on return.
fn winning_square(board: &mut Board, mark: Mark) -> Option<Position> {
    for pos in Position::valid_moves(board) {
        board.set(pos, Square::Occupied(mark));
        let wins = evaluate(board) == Outcome::Won(mark);
        board.set(pos, Square::Empty);
        if wins {
            return Some(pos);
        }
    }
    None
}

impl Player for HeuristicPlayer {
    fn next_move(&mut self, game: &Game) -> Result<Position, PlayerError> {
        let mark = game.to_move();
        let pos = Self::choose(game.board(), mark).ok_or(PlayerError::NoMoves)?;
        debug!(ai = %self.name, position = %pos, "heuristic move chosen");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
