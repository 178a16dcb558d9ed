//! Tests for the grid game engine: moves, time travel and restarts.

use strictly_triples::{
    Dimensions, GameEngine, GameStatus, HistoryError, Mark, MarkSequence, MoveError, SetupError,
    Square,
};

fn x_o_engine(height: usize, width: usize) -> GameEngine {
    let marks = MarkSequence::new([Mark::new('X'), Mark::new('O')]).expect("valid marks");
    GameEngine::new(Dimensions::new(height, width).expect("valid size"), marks)
}

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for &index in moves {
        engine.apply_move(index).expect("legal move");
    }
}

#[test]
fn test_left_column_win() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0, 1, 3, 4, 6]);

    let line = engine.winning_line().expect("X has a column");
    assert_eq!(line.cells(), [0, 3, 6]);
    assert_eq!(engine.status().winner(), Some(Mark::new('X')));
    assert_eq!(engine.status().to_string(), "You're winner: X");
}

#[test]
fn test_default_game_is_six_by_five() {
    let mut engine = GameEngine::default();
    play(&mut engine, &[0, 1]);
    engine.reset(6, 5).unwrap();

    assert_eq!(engine.current_board().len(), 30);
    assert!(
        engine
            .current_board()
            .squares()
            .iter()
            .all(|s| *s == Square::Empty)
    );
    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.current_move(), 0);
}

#[test]
fn test_move_after_win_is_rejected() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0, 1, 3, 4, 6]);
    let board = engine.current_board().clone();

    assert_eq!(engine.apply_move(8), Err(MoveError::GameOver(Mark::new('X'))));
    assert_eq!(engine.history_len(), 6);
    assert_eq!(engine.current_board(), &board);
}

#[test]
fn test_occupied_square_is_rejected() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[4]);
    let board = engine.current_board().clone();

    assert_eq!(engine.apply_move(4), Err(MoveError::SquareOccupied(4)));
    assert_eq!(engine.history_len(), 2);
    assert_eq!(engine.current_board(), &board);
    assert_eq!(engine.active_mark(), Mark::new('O'));
}

#[test]
fn test_out_of_range_square_is_rejected() {
    let mut engine = x_o_engine(2, 2);
    assert_eq!(
        engine.apply_move(4),
        Err(MoveError::OutOfBounds { index: 4, cells: 4 })
    );
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_turn_rotation_three_players() {
    let mut engine = GameEngine::new(Dimensions::new(4, 4).unwrap(), MarkSequence::default());
    let moves = [0, 5, 10, 3, 12, 9, 6];
    play(&mut engine, &moves);

    let marks = engine.marks().as_slice().to_vec();
    for (n, &index) in moves.iter().enumerate() {
        let board = &engine.history()[n + 1];
        assert_eq!(board.get(index), Some(Square::Occupied(marks[n % marks.len()])));
    }
}

#[test]
fn test_jump_is_idempotent() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0, 1, 2]);

    engine.jump_to(1).unwrap();
    let first = (
        engine.current_board().clone(),
        engine.status(),
        engine.history_len(),
    );
    engine.jump_to(1).unwrap();
    let second = (
        engine.current_board().clone(),
        engine.status(),
        engine.history_len(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_branch_on_rewind() {
    let mut engine = x_o_engine(3, 4);
    play(&mut engine, &[0, 1, 2, 3, 4]);
    let discarded: Vec<_> = engine.history()[3..].to_vec();

    let k = 2;
    engine.jump_to(k).unwrap();
    engine.apply_move(11).unwrap();
    assert_eq!(engine.history_len(), k + 2);

    for target in 0..engine.history_len() {
        engine.jump_to(target).unwrap();
        assert!(!discarded.contains(engine.current_board()));
    }
    assert!(engine.jump_to(k + 2).is_err());
}

#[test]
fn test_branch_mark_follows_position() {
    let mut engine = GameEngine::new(Dimensions::new(3, 3).unwrap(), MarkSequence::default());
    play(&mut engine, &[0, 1, 2]);
    engine.jump_to(1).unwrap();

    let placement = engine.apply_move(8).unwrap();
    assert_eq!(placement.mark, Mark::new('O'));
    assert_eq!(placement.move_number, 2);
}

#[test]
fn test_jump_out_of_range() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0]);
    assert_eq!(
        engine.jump_to(5),
        Err(HistoryError::OutOfRange { target: 5, len: 2 })
    );
    assert_eq!(engine.current_move(), 1);
}

#[test]
fn test_jump_back_past_win_allows_moves() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0, 1, 3, 4, 6]);
    engine.jump_to(4).unwrap();

    assert_eq!(engine.status(), GameStatus::NextTurn(Mark::new('X')));
    engine.apply_move(8).unwrap();
    assert_eq!(engine.history_len(), 6);
    assert!(engine.winning_line().is_none());
}

#[test]
fn test_reset_rejects_zero_dimensions() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0]);
    assert!(engine.reset(0, 0).is_err());
    assert!(engine.reset(3, 0).is_err());
    assert_eq!(engine.history_len(), 2);
}

#[test]
fn test_reset_rejects_huge_boards_without_panicking() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0]);

    let result = std::panic::catch_unwind(move || {
        let outcome = engine.reset(usize::MAX / 4, 2);
        (outcome, engine.history_len())
    });
    let (outcome, history_len) = result.expect("reset must not panic");
    assert!(matches!(outcome, Err(SetupError::TooManyCells { .. })));
    assert_eq!(history_len, 2);

    assert!(Dimensions::new(Dimensions::MAX_CELLS, 2).is_err());
}

#[test]
fn test_snapshots_do_not_alias() {
    let mut engine = x_o_engine(3, 3);
    play(&mut engine, &[0, 1]);
    assert!(engine.history()[0].is_empty(0));
    assert!(engine.history()[1].is_empty(1));
    assert!(!engine.history()[2].is_empty(1));
}
