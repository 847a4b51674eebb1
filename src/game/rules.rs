//! Game engine: move legality, application, and terminal detection.

use super::position::Position;
use super::types::{Board, Mark, Outcome, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Derives the outcome from the board alone.
///
/// A completed line wins for its mark; a full board with no line is a draw.
/// Under legal play at most one mark can hold a line, so the first match
/// suffices.
pub fn evaluate(board: &Board) -> Outcome {
    for [a, b, c] in LINES {
        let occ = board.get(a);
        if occ != Square::Empty && occ == board.get(b) && occ == board.get(c) {
            if let Square::Occupied(mark) = occ {
                return Outcome::Won(mark);
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Square is already occupied.
    #[display("{_0} is already taken")]
    SquareOccupied(#[error(not(source))] Position),
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

/// Tic-tac-toe game engine.
///
/// Owns one board for the lifetime of one game. X always moves first.
/// The turn toggles only when a move is accepted, so a rejected move
/// leaves the engine observably unchanged.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Resumes a game from an existing board with the given mark to move.
    pub fn from_board(board: Board, to_move: Mark) -> Self {
        Self { board, to_move }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Checks whether placing at `pos` would be accepted.
    pub fn is_legal(&self, pos: Position) -> bool {
        !self.outcome().is_terminal() && self.board.is_empty(pos)
    }

    /// Places the current mark at the given position and toggles the turn.
    ///
    /// Returns the outcome after the move. The turn does not toggle once
    /// the game has ended.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended, or
    /// [`MoveError::SquareOccupied`] if the square is taken. Neither
    /// mutates any state.
    #[instrument(skip(self), fields(pos = %pos, mark = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.to_move = self.to_move.opponent();
        }
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
