//! Scenario tests for the maru-batsu engine.

use marubatsu_core::{Cell, Coord, EngineError, GameEngine, Outcome, Player};

fn at(row: usize, column: usize) -> Coord {
    Coord::new(row, column).expect("coordinate in range")
}

#[test]
fn test_repeat_move_is_rejected() {
    let mut engine = GameEngine::new();
    assert!(engine.place(at(0, 0)));

    let before = engine.clone();
    assert!(!engine.place(at(0, 0)));

    assert_eq!(engine, before);
    assert_eq!(engine.cell(at(0, 0)), Cell::Occupied(Player::Maru));
    assert_eq!(engine.current_player(), Player::Batsu);
}

#[test]
fn test_top_row_win_freezes_game() {
    let mut engine = GameEngine::new();
    for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        assert!(engine.place(at(row, column)));
    }

    assert_eq!(engine.outcome(), Outcome::Won(Player::Maru));
    assert_eq!(engine.remaining_cells(), 4);

    let finished = engine.clone();
    for coord in Coord::ALL {
        assert!(!engine.place(coord));
    }
    assert_eq!(engine.attempt_move(2, 2), Ok(false));
    assert_eq!(engine, finished);
}

#[test]
fn test_batsu_can_win() {
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)];
    let mut engine = GameEngine::new();
    for (row, column) in moves {
        assert!(engine.place(at(row, column)));
    }
    assert_eq!(engine.outcome(), Outcome::Won(Player::Batsu));
    assert_eq!(engine.current_player(), Player::Maru);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // O X O
    // O X X
    // X O O
    let moves = [
        (0, 0),
        (1, 1),
        (0, 2),
        (0, 1),
        (2, 1),
        (1, 2),
        (1, 0),
        (2, 0),
        (2, 2),
    ];
    let mut engine = GameEngine::new();
    for (n, (row, column)) in moves.into_iter().enumerate() {
        assert_eq!(engine.outcome(), Outcome::Ongoing, "ended early at move {n}");
        assert!(engine.place(at(row, column)));
    }

    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.remaining_cells(), 0);
    assert!(engine.legal_moves().is_empty());
}

#[test]
fn test_filled_board_with_anti_diagonal_is_a_win_not_a_draw() {
    // Maru (0,0) (0,1) (1,2) (1,0) (2,1) against Batsu (0,2) (1,1) (2,0):
    // Batsu completes the anti-diagonal on the sixth move.
    let moves = [(0, 0), (0, 2), (0, 1), (1, 1), (1, 2), (2, 0)];
    let mut engine = GameEngine::new();
    for (row, column) in moves {
        assert!(engine.place(at(row, column)));
    }
    assert_eq!(engine.outcome(), Outcome::Won(Player::Batsu));
    assert!(!engine.place(at(1, 0)));
}

#[test]
fn test_anti_diagonal_win_detected_on_third_cell() {
    // Maru takes (2,0) and (0,2) first, then the center.
    let mut engine = GameEngine::new();
    for (row, column) in [(2, 0), (0, 0), (0, 2), (2, 2)] {
        assert!(engine.place(at(row, column)));
        assert_eq!(engine.outcome(), Outcome::Ongoing);
    }

    assert!(engine.place(at(1, 1)));
    assert_eq!(engine.outcome(), Outcome::Won(Player::Maru));
}

#[test]
fn test_anti_diagonal_win_closed_from_corner() {
    let mut engine = GameEngine::new();
    for (row, column) in [(1, 1), (0, 0), (2, 0), (0, 1)] {
        assert!(engine.place(at(row, column)));
    }
    assert!(engine.place(at(0, 2)));
    assert_eq!(engine.outcome(), Outcome::Won(Player::Maru));
}

#[test]
fn test_invalid_coordinates_do_not_mutate() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.attempt_move(0, 3),
        Err(EngineError::InvalidCoordinate { row: 0, column: 3 })
    );
    assert_eq!(
        engine.cell_at(9, 9),
        Err(EngineError::InvalidCoordinate { row: 9, column: 9 })
    );
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_replay_reports_rejected_move() {
    let moves = [Coord::CENTER, Coord::TOP_LEFT, Coord::CENTER];
    assert_eq!(
        GameEngine::replay(&moves),
        Err(EngineError::MoveRejected {
            coord: Coord::CENTER,
            index: 2
        })
    );
}

#[test]
fn test_replay_rejects_moves_after_win() {
    let moves = [0, 3, 1, 4, 2, 5].map(|i| Coord::ALL[i]);
    let err = GameEngine::replay(&moves).unwrap_err();
    assert_eq!(
        err,
        EngineError::MoveRejected {
            coord: Coord::ALL[5],
            index: 5
        }
    );
    assert!(err.to_string().contains("Middle-right"));
}

#[test]
fn test_snapshot_serializes() {
    let moves = [4, 0].map(|i| Coord::ALL[i]);
    let engine = GameEngine::replay(&moves).unwrap();
    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["remaining_cells"], 7);
    assert_eq!(json["current_player"], "Maru");
    assert_eq!(json["outcome"], "Ongoing");
    assert_eq!(json["board"][0][0], "X");
    assert_eq!(json["history"], serde_json::json!([4, 0]));
}
