//! Whole-game scenarios through the public API

use gomoku::eval::{evaluate_cell, RunScore};
use gomoku::rules::{run_length, Axis};
use gomoku::{
    AIEngine, Board, GameState, GameStatus, InvalidMoveReason, Placement, Pos, Stone, BOARD_SIZE,
};

fn pos(r: u8, c: u8) -> Pos {
    Pos::new(r, c)
}

fn assert_collinear_contiguous(line: &[Pos]) {
    assert!(line.len() >= 5, "winning line too short: {line:?}");
    let dr = line[1].row as i32 - line[0].row as i32;
    let dc = line[1].col as i32 - line[0].col as i32;
    assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
    for pair in line.windows(2) {
        assert_eq!((pair[1].row as i32 - pair[0].row as i32, pair[1].col as i32 - pair[0].col as i32), (dr, dc));
    }
}

#[test]
fn center_opening_continues_with_white() {
    let mut game = GameState::new();
    assert_eq!(game.place_stone(pos(7, 7), Stone::Black), Ok(Placement::Continue));
    assert_eq!(game.current_player(), Stone::White);
}

#[test]
fn completing_row_seven_wins_in_order() {
    let mut game = GameState::new();
    let white_moves = [pos(0, 0), pos(0, 2), pos(14, 14), pos(14, 12)];
    for (c, &white) in (3..7).zip(white_moves.iter()) {
        game.place_stone(pos(7, c), Stone::Black).unwrap();
        game.place_stone(white, Stone::White).unwrap();
    }

    let result = game.place_stone(pos(7, 7), Stone::Black).unwrap();
    let expected = vec![pos(7, 3), pos(7, 4), pos(7, 5), pos(7, 6), pos(7, 7)];
    assert_eq!(result, Placement::Win(expected.clone()));
    assert_eq!(
        game.status(),
        &GameStatus::Won {
            winner: Stone::Black,
            line: expected
        }
    );
    assert_eq!(game.result_message().as_deref(), Some("Black wins"));
}

#[test]
fn winning_in_middle_of_run_reports_whole_run() {
    let mut game = GameState::new();
    // Black: (2,2) (3,3) (5,5) (6,6), then (4,4) fills the gap
    let black = [pos(2, 2), pos(3, 3), pos(5, 5), pos(6, 6)];
    let white = [pos(0, 14), pos(1, 14), pos(2, 14), pos(4, 14)];
    for (&b, &w) in black.iter().zip(white.iter()) {
        game.play(b).unwrap();
        game.play(w).unwrap();
    }
    let Placement::Win(line) = game.play(pos(4, 4)).unwrap() else {
        panic!("expected a win");
    };
    assert_eq!(line.first(), Some(&pos(2, 2)));
    assert_eq!(line.last(), Some(&pos(6, 6)));
    assert_collinear_contiguous(&line);
}

#[test]
fn occupied_cell_is_rejected_and_board_unchanged() {
    let mut game = GameState::new();
    game.play(pos(7, 7)).unwrap();
    game.play(pos(7, 8)).unwrap();
    let before = game.board().clone();

    let err = game.play(pos(7, 8)).unwrap_err();
    assert_eq!(err.reason(), InvalidMoveReason::Occupied);
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_player(), Stone::Black);
}

#[test]
fn filling_the_board_without_five_is_a_draw() {
    // Pairs of columns alternating color, shifted every two rows:
    // the longest run in any direction is two.
    let is_black = |r: usize, c: usize| (c + r / 2) % 2 == 0;
    let mut black = Vec::new();
    let mut white = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let p = pos(r as u8, c as u8);
            if is_black(r, c) {
                black.push(p);
            } else {
                white.push(p);
            }
        }
    }
    assert_eq!(black.len(), 113);
    assert_eq!(white.len(), 112);

    let mut game = GameState::new();
    for i in 0..white.len() {
        assert_eq!(game.play(black[i]).unwrap(), Placement::Continue);
        assert_eq!(game.play(white[i]).unwrap(), Placement::Continue);
    }
    assert_eq!(game.play(black[112]).unwrap(), Placement::Draw);
    assert_eq!(game.status(), &GameStatus::Draw);
    assert_eq!(game.result_message().as_deref(), Some("Draw"));
    assert_eq!(game.play(pos(0, 0)).unwrap_err().reason(), InvalidMoveReason::GameOver);
}

#[test]
fn defense_reads_four_against_left_edge() {
    // White (0,0)..(0,2): a White stone at (0,3) makes a four whose walk
    // must stop at column 0
    let mut board = Board::new();
    for c in 0..3 {
        board.place_stone(pos(0, c), Stone::White);
    }
    let cell = evaluate_cell(&board, pos(0, 3), Stone::Black, Stone::White).unwrap();
    assert_eq!(cell.defense, RunScore::FOUR);

    // With four White stones in place, (0,4) is a five, not a longer run
    board.place_stone(pos(0, 3), Stone::White);
    assert_eq!(run_length(&board, pos(0, 4), Stone::White, Axis::Horizontal), 5);
    let cell = evaluate_cell(&board, pos(0, 4), Stone::Black, Stone::White).unwrap();
    assert_eq!(cell.defense, RunScore::FIVE);
}

#[test]
fn evaluator_blocks_open_four() {
    let mut board = Board::new();
    for c in 3..7 {
        board.place_stone(pos(7, c), Stone::Black);
    }
    board.place_stone(pos(0, 0), Stone::White);
    board.place_stone(pos(14, 14), Stone::White);

    let mut engine = AIEngine::with_seed(9);
    // Both ends block; (7,7) is closer to the center than (7,2)
    assert_eq!(engine.find_best_move(&board, Stone::White, Stone::Black), Some(pos(7, 7)));
}

#[test]
fn evaluator_completes_own_four() {
    let mut game = GameState::new();
    let black = [pos(14, 0), pos(14, 2), pos(14, 4), pos(14, 6), pos(14, 8)];
    let white = [pos(3, 3), pos(3, 4), pos(3, 5), pos(3, 6)];
    for i in 0..white.len() {
        game.play(black[i]).unwrap();
        game.play(white[i]).unwrap();
    }
    game.play(black[4]).unwrap();

    let mut engine = AIEngine::with_seed(2);
    let best = engine.find_best_move(game.board(), Stone::White, Stone::Black).unwrap();
    assert_eq!(best, pos(3, 7));
    assert!(matches!(game.play(best).unwrap(), Placement::Win(_)));
    assert_eq!(game.winner(), Some(Stone::White));
}

#[test]
fn evaluator_prefers_blocking_over_winning() {
    // Defense is weighted 1.5 against attack 1.2, so a five for the
    // opponent outranks a five for the computer
    let mut board = Board::new();
    for c in 3..7 {
        board.place_stone(pos(2, c), Stone::White);
        board.place_stone(pos(11, c), Stone::Black);
    }
    let mut engine = AIEngine::with_seed(4);
    let best = engine.find_best_move(&board, Stone::White, Stone::Black).unwrap();
    assert_eq!(best.row, 11);
    assert!(best == pos(11, 2) || best == pos(11, 7));
}

#[test]
fn evaluator_returns_none_only_on_full_board() {
    let mut board = Board::new();
    for idx in 0..BOARD_SIZE * BOARD_SIZE - 1 {
        let stone = if idx % 3 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(Pos::from_index(idx), stone);
    }
    let mut engine = AIEngine::with_seed(0);
    assert_eq!(engine.find_best_move(&board, Stone::White, Stone::Black), Some(pos(14, 14)));

    board.place_stone(pos(14, 14), Stone::Black);
    assert_eq!(engine.find_best_move(&board, Stone::White, Stone::Black), None);
}

#[test]
fn computer_self_play_ends_cleanly() {
    let mut game = GameState::new();
    let mut black_engine = AIEngine::with_seed(100);
    let mut white_engine = AIEngine::with_seed(200);

    while !game.is_terminal() {
        let me = game.current_player();
        let engine = if me == Stone::Black { &mut black_engine } else { &mut white_engine };
        let mv = engine
            .find_best_move(game.board(), me, me.opponent())
            .expect("non-terminal game has an empty cell");
        assert!(game.board().is_empty(mv), "evaluator chose occupied cell {mv}");
        game.play(mv).unwrap();
        assert!(game.move_count() <= BOARD_SIZE * BOARD_SIZE);
    }

    if let Some(line) = game.winning_cells() {
        assert_collinear_contiguous(line);
        let winner = game.winner().unwrap();
        assert!(line.iter().all(|&p| game.board().get(p) == winner));
    } else {
        assert_eq!(game.status(), &GameStatus::Draw);
    }
}
