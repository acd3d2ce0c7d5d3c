//! Move filters used by the playout policy.
//!
//! Each predicate returns `true` when the move should be *rejected*.

use crate::board::{Board, Color, Point};
use crate::selfatari::is_selfatari;

/// Reject moves that are illegal or fill one of `color`'s eyes.
pub fn fills_eye_or_illegal(board: &Board, mv: Point, color: Color) -> bool {
    !board.is_legal(mv, color) || board.is_eye(mv, color)
}

/// Reject moves that are illegal, fill an eye, or are self-atari.
pub fn selfatari_filter(board: &Board, mv: Point, color: Color) -> bool {
    fills_eye_or_illegal(board, mv, color) || is_selfatari(board, mv, color)
}

/// Reject according to the requested strictness.
pub fn reject(board: &Board, mv: Point, color: Color, check_selfatari: bool) -> bool {
    if check_selfatari {
        selfatari_filter(board, mv, color)
    } else {
        fills_eye_or_illegal(board, mv, color)
    }
}

/// Keep the moves the player to move may sensibly play.
pub fn filter_moves(board: &Board, moves: &[Point], check_selfatari: bool) -> Vec<Point> {
    let color = board.current_player;
    moves
        .iter()
        .copied()
        .filter(|&mv| !reject(board, mv, color, check_selfatari))
        .collect()
}
