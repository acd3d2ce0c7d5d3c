//! Integration tests for go-tactics: board rules and coordinates.

use go_tactics::board::{Board, Color};
use go_tactics::constants::MAX_BOARD_SIZE;
use go_tactics::coord::{format_move, parse_move};
use go_tactics::error::MoveError;

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

const SIZE: usize = 9;

fn pt(s: &str) -> usize {
    parse_move(s, SIZE).unwrap().unwrap()
}

/// Parse a sequence of moves and apply them to a position.
/// Moves alternate between Black and White; "pass" can be used to pass.
fn setpos(moves: &[&str]) -> Board {
    let mut board = Board::new(SIZE).unwrap();
    for mv in moves {
        let m = parse_move(mv, SIZE).unwrap();
        let color = board.current_player;
        if let Err(e) = board.play(m, color) {
            panic!("Illegal move {mv} in setpos: {e}");
        }
    }
    board
}

// =============================================================================
// Coordinate tests
// =============================================================================

#[test]
fn test_coordinate_roundtrip_all_sizes() {
    for size in 1..=MAX_BOARD_SIZE {
        let board = Board::new(size).unwrap();
        for p in board.points() {
            let s = format_move(Some(p), size).unwrap();
            assert_eq!(
                parse_move(&s, size).unwrap(),
                Some(p),
                "Roundtrip failed for {s} on size {size}"
            );
        }
        let s = format_move(None, size).unwrap();
        assert_eq!(parse_move(&s, size).unwrap(), None);
    }
}

#[test]
fn test_coordinate_corners() {
    let board = Board::new(SIZE).unwrap();
    assert_eq!(pt("A1"), board.point(1, 1));
    assert_eq!(pt("J9"), board.point(9, 9));
    assert_eq!(pt("A9"), board.point(9, 1));
    assert_eq!(pt("J1"), board.point(1, 9));
    assert_eq!(format_move(Some(board.point(9, 9)), SIZE).unwrap(), "J9");
}

#[test]
fn test_largest_board_uses_z() {
    assert_eq!(format_move(Some(25 * 26 + 25), 25).unwrap(), "Z25");
    assert_eq!(parse_move("z25", 25).unwrap(), Some(25 * 26 + 25));
}

// =============================================================================
// Basic position and move tests
// =============================================================================

#[test]
fn test_play_single_stone() {
    let mut board = Board::new(SIZE).unwrap();
    let d4 = pt("D4");
    assert_eq!(board.play(Some(d4), Color::Black), Ok(0));
    assert_eq!(board.last_move, Some(d4));
    assert_eq!(board.get(d4), Color::Black);
    assert_eq!(board.current_player, Color::White);
}

#[test]
fn test_pass_move() {
    let mut board = setpos(&["D4"]);
    board.play(None, Color::White).unwrap();
    assert_eq!(board.last_move, None);
    assert_eq!(board.last2_move, Some(pt("D4")));
    assert_eq!(board.passes(Color::White), 1);
    assert_eq!(board.current_player, Color::Black);
}

#[test]
fn test_illegal_move_occupied() {
    let mut board = setpos(&["D4"]);
    let before = board.clone();
    assert_eq!(board.play(Some(pt("D4")), Color::White), Err(MoveError::Occupied));
    assert_eq!(board, before);
}

#[test]
fn test_border_and_empty_cannot_move() {
    let mut board = Board::new(SIZE).unwrap();
    assert!(board.play(Some(pt("D4")), Color::Empty).is_err());
    assert!(!board.apply_move(Some(0), Color::Black));
}

// =============================================================================
// Capture tests
// =============================================================================

#[test]
fn test_capture_single_stone() {
    let board = setpos(&["C4", "D4", "E4", "H8", "D3", "H9", "D5"]);
    assert_eq!(board.get(pt("D4")), Color::Empty);
    assert_eq!(board.captures(Color::Black), 1);
}

#[test]
fn test_capture_corner() {
    let board = setpos(&["B2", "A1", "A2", "H8", "B1"]);
    assert_eq!(board.get(pt("A1")), Color::Empty);
}

#[test]
fn test_capture_group() {
    let board = setpos(&[
        "C4", "D4", "C5", "D5", "E4", "H8", "E5", "H9", "D3", "J8", "D6",
    ]);
    assert_eq!(board.get(pt("D4")), Color::Empty);
    assert_eq!(board.get(pt("D5")), Color::Empty);
    assert_eq!(board.captures(Color::Black), 2);
}

// =============================================================================
// Suicide and ko tests
// =============================================================================

#[test]
fn test_suicide_single_stone() {
    let mut board = setpos(&["A2", "H8", "B1"]);
    assert_eq!(board.play(Some(pt("A1")), Color::White), Err(MoveError::Suicide));
}

#[test]
fn test_capture_is_not_suicide() {
    // White A2 has its last liberty at A1; Black A1 has no empty neighbor
    // but captures first.
    let mut board = setpos(&["A3", "A2", "B2", "B1"]);
    let a1 = pt("A1");
    assert!(board.is_legal(a1, Color::Black));
    assert_eq!(board.play(Some(a1), Color::Black), Ok(1));
    assert_eq!(board.get(pt("A2")), Color::Empty);
}

#[test]
fn test_simple_ko() {
    //   A B C D
    // 4 . . . .
    // 3 . X O .
    // 2 X O . O
    // 1 . X O .
    let mut board = setpos(&[
        "B3", "C3", "A2", "B2", "B1", "C1", "H8", "D2",
    ]);
    // Black captures B2 at C2.
    assert_eq!(board.play(Some(pt("C2")), Color::Black), Ok(1));
    assert_eq!(board.ko(), Some(pt("B2")));
    assert_eq!(board.play(Some(pt("B2")), Color::White), Err(MoveError::Ko));

    // After a move elsewhere the ko is lifted.
    board.play(Some(pt("H1")), Color::White).unwrap();
    assert_eq!(board.ko(), None);
}

// =============================================================================
// Eye detection and scoring tests
// =============================================================================

#[test]
fn test_corner_eye() {
    let board = setpos(&["A2", "H8", "B1", "H9", "B2"]);
    assert!(board.is_eye(pt("A1"), Color::Black));
    assert!(!board.is_eye(pt("A1"), Color::White));
}

#[test]
fn test_empty_point_is_not_eye() {
    let board = Board::new(SIZE).unwrap();
    assert!(!board.is_eye(pt("E5"), Color::Black));
}

#[test]
fn test_empty_board_score_is_minus_komi() {
    let board = Board::new(SIZE).unwrap();
    assert_eq!(board.score(7.5), -7.5);
    assert_eq!(board.winner(7.5), Color::White);
}

#[test]
fn test_display_has_coordinates() {
    let board = setpos(&["D4"]);
    let s = board.to_string();
    assert!(s.contains("A B C D E F G H J"));
    assert!(s.lines().any(|l| l.trim_start().starts_with("4 ") && l.contains('X')));
}
