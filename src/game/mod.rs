mod position;
mod rules;
mod types;

pub use position::Position;
pub use rules::{Game, MoveError, evaluate};
pub use types::{Board, Mark, Outcome, ParseBoardError, Square};
