//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order: 0,1,2 is the top row,
/// 3,4,5 the middle, 6,7,8 the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// Also used by strategies for speculative placement: a strategy may
    /// place a mark on a scratch copy, evaluate the result, and must set
    /// the square back to `Empty` before trying the next candidate.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable 3x3 grid.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ' ',
                    Square::Occupied(mark) => {
                        if mark == Mark::X {
                            'X'
                        } else {
                            'O'
                        }
                    }
                };
                result.push(' ');
                result.push(symbol);
                result.push(' ');
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-----------\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact 9-character form: `X`, `O`, or `.` per square in row-major order.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Error parsing a compact board string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The string is not exactly 9 characters long.
    #[display("expected exactly 9 squares, got {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not one of `X`, `O`, `.`, or space.
    #[display("invalid square character: {c:?}")]
    InvalidSquare {
        /// The offending character.
        c: char,
    },
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the compact form produced by `Display`. A space also counts
    /// as an empty square, matching snapshots rendered with blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(ParseBoardError::WrongLength { len: chars.len() });
        }
        let mut board = Board::new();
        for (i, c) in chars.into_iter().enumerate() {
            let square = match c {
                '.' | ' ' => Square::Empty,
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                other => return Err(ParseBoardError::InvalidSquare { c: other }),
            };
            let pos = Position::from_index(i).expect("index < 9");
            board.set(pos, square);
        }
        Ok(board)
    }
}

/// Outcome of a game, derived from the board.
///
/// Never stored alongside the board; [`crate::Game::outcome`] recomputes it
/// on demand so it cannot drift out of sync with the squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
