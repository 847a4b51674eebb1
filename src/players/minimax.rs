//! Full-depth minimax AI.

use super::{Player, PlayerError};
use crate::game::{Board, Game, Mark, Outcome, Position, Square, evaluate};
use tracing::debug;

/// AI player using exhaustive minimax search.
///
/// Never loses: it wins whenever the opponent slips and draws against
/// optimal play. The 3x3 tree is small enough that no pruning is needed.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Chooses the optimal move for `mark`, assuming the opponent also
    /// plays optimally. Ties break toward the lowest index. Returns `None`
    /// only on a full board.
    pub fn choose(board: &Board, mark: Mark) -> Option<Position> {
        let mut scratch = board.clone();
        let mut best: Option<(Position, i32)> = None;

        for pos in Position::valid_moves(board) {
            scratch.set(pos, Square::Occupied(mark));
            let score = value(&mut scratch, mark.opponent(), mark);
            scratch.set(pos, Square::Empty);

            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((pos, score)),
            }
        }

        best.map(|(pos, _)| pos)
    }

    /// Scores the move `mark` would make at `pos`, from `mark`'s
    /// perspective: +1 a forced win, -1 a forced loss, 0 a draw.
    pub fn score(board: &Board, pos: Position, mark: Mark) -> i32 {
        let mut scratch = board.clone();
        scratch.set(pos, Square::Occupied(mark));
        let score = value(&mut scratch, mark.opponent(), mark);
        scratch.set(pos, Square::Empty);
        score
    }
}

/// Recursive game value with `to_move` next, scored for `ai`.
///
/// Terminal boards score +1 if `ai` won, -1 if the opponent won, 0 on a
/// draw. Interior nodes take the max of the children when `ai` is to
/// move, the min otherwise. Each speculative placement is reverted before
/// the next sibling, so the board is unchanged on return.
fn value(board: &mut Board, to_move: Mark, ai: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Won(winner) => {
            if winner == ai {
                1
            } else {
                -1
            }
        }
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let maximizing = to_move == ai;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };

            for pos in Position::valid_moves(board) {
                board.set(pos, Square::Occupied(to_move));
                let score = value(board, to_move.opponent(), ai);
                board.set(pos, Square::Empty);

                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }

            best
        }
    }
}

impl Player for MinimaxPlayer {
    fn next_move(&mut self, game: &Game) -> Result<Position, PlayerError> {
        let mark = game.to_move();
        let pos = Self::choose(game.board(), mark).ok_or(PlayerError::NoMoves)?;
        debug!(ai = %self.name, position = %pos, "minimax move chosen");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
