//! Tests for the board, rules engine, and terminal detection.

use tictactoe::{Board, Game, Mark, MoveError, Outcome, Position, evaluate};

#[test]
fn test_new_game_starts_empty_with_x_to_move() {
    let game = Game::new();
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
    for pos in Position::ALL {
        assert!(game.board().is_empty(pos));
    }
}

#[test]
fn test_make_move_alternates_players() {
    let mut game = Game::new();
    game.make_move(Position::Center).expect("center is empty");
    assert_eq!(game.to_move(), Mark::O);

    game.make_move(Position::TopLeft).expect("top-left is empty");
    assert_eq!(game.to_move(), Mark::X);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut game = Game::new();
    game.make_move(Position::Center).expect("center is empty");

    let before = game.board().clone();
    let result = game.make_move(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));

    // Neither the board nor the turn changed.
    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Mark::O);
}

#[test]
fn test_out_of_range_indices_have_no_position() {
    assert!(Position::from_index(9).is_none());
    assert!(Position::from_index(100).is_none());
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
}

#[test]
fn test_is_legal() {
    let mut game = Game::new();
    assert!(game.is_legal(Position::Center));
    game.make_move(Position::Center).expect("center is empty");
    assert!(!game.is_legal(Position::Center));
    assert!(game.is_legal(Position::TopLeft));
}

#[test]
fn test_evaluate_detects_every_line() {
    let wins = [
        "XXX......",
        "...XXX...",
        "......XXX",
        "X..X..X..",
        ".X..X..X.",
        "..X..X..X",
        "X...X...X",
        "..X.X.X..",
    ];
    for compact in wins {
        let board: Board = compact.parse().expect("valid board");
        assert_eq!(evaluate(&board), Outcome::Won(Mark::X), "board {compact}");
    }
}

#[test]
fn test_evaluate_reports_exactly_one_winner() {
    let board: Board = "XXX...OO.".parse().expect("valid board");
    assert_eq!(evaluate(&board), Outcome::Won(Mark::X));

    let board: Board = "OO....XXX".parse().expect("valid board");
    assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
}

#[test]
fn test_evaluate_draw_requires_full_board() {
    let board: Board = "XOXXOOOXX".parse().expect("valid board");
    assert_eq!(evaluate(&board), Outcome::Draw);

    let board: Board = "XOXXOOOX.".parse().expect("valid board");
    assert_eq!(evaluate(&board), Outcome::InProgress);
}

#[test]
fn test_win_on_full_board_beats_draw() {
    let board: Board = "XXXOOXOXO".parse().expect("valid board");
    assert_eq!(evaluate(&board), Outcome::Won(Mark::X));
}

#[test]
fn test_game_over_rejects_further_moves() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight, // X completes the top row
    ] {
        game.make_move(pos).expect("legal move");
    }
    assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    assert_eq!(game.make_move(Position::BottomLeft), Err(MoveError::GameOver));
}

#[test]
fn test_resumed_game_reports_terminal_outcome() {
    let board: Board = "XXX.OO...".parse().expect("valid board");
    let mut game = Game::from_board(board, Mark::O);
    assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    assert_eq!(
        game.make_move(Position::MiddleLeft),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_speculative_place_and_revert_is_invisible() {
    use tictactoe::Square;

    let original: Board = "XO..X..O.".parse().expect("valid board");
    let before = evaluate(&original);

    let mut board = original.clone();
    for pos in Position::valid_moves(&original) {
        board.set(pos, Square::Occupied(Mark::X));
        board.set(pos, Square::Empty);
        assert_eq!(evaluate(&board), before);
    }
    assert_eq!(board, original);
}

#[test]
fn test_compact_round_trip() {
    let compact = "XO..X..O.";
    let board: Board = compact.parse().expect("valid board");
    assert_eq!(board.to_string(), compact);
}

#[test]
fn test_compact_accepts_spaces_as_empty() {
    let board: Board = "XO  X  O ".parse().expect("valid board");
    assert_eq!(board.to_string(), "XO..X..O.");
}

#[test]
fn test_compact_rejects_bad_input() {
    assert!("XO".parse::<Board>().is_err());
    assert!("XO..Z..O.".parse::<Board>().is_err());
    assert!("XO..X..O.X".parse::<Board>().is_err());
}

#[test]
fn test_position_input_parsing() {
    // Cell numbers are one-indexed, as printed in the legend.
    assert_eq!(Position::from_input("1"), Some(Position::TopLeft));
    assert_eq!(Position::from_input(" 9 "), Some(Position::BottomRight));
    assert_eq!(Position::from_input("5"), Some(Position::Center));
    assert_eq!(Position::from_input("center"), Some(Position::Center));
    assert_eq!(Position::from_input("Top-left"), Some(Position::TopLeft));
    assert_eq!(Position::from_input("0"), None);
    assert_eq!(Position::from_input("10"), None);
    assert_eq!(Position::from_input("banana"), None);
    assert_eq!(Position::from_input(""), None);
}

#[test]
fn test_outcome_result_strings() {
    assert_eq!(Outcome::Won(Mark::X).to_string(), "X wins");
    assert_eq!(Outcome::Won(Mark::O).to_string(), "O wins");
    assert_eq!(Outcome::Draw.to_string(), "draw");
}
