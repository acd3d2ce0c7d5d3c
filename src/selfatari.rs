//! Self-atari detection.

use crate::board::{Board, Color, Point};
use crate::constants::SELFATARI_LIBERTY_BOUND;
use crate::liberty;

/// Check whether playing `mv` as `color` leaves the new chain with exactly
/// one liberty.
///
/// A friendly neighbor chain with more than two liberties keeps at least two
/// after the move, so those cases return `false` without simulating.
/// Otherwise the move is played on a clone of the board. An illegal move is
/// reported as `false`; callers filter legality first.
///
/// # Panics
/// Panics if `mv` is not empty.
pub fn is_selfatari(board: &Board, mv: Point, color: Color) -> bool {
    assert_eq!(
        board.get(mv),
        Color::Empty,
        "self-atari check on occupied point {mv}"
    );
    if max_neighbor_liberties(board, mv, color, SELFATARI_LIBERTY_BOUND)
        .is_some_and(|libs| libs > SELFATARI_LIBERTY_BOUND)
    {
        return false;
    }

    let mut sim = board.clone();
    if !sim.apply_move(Some(mv), color) {
        return false;
    }
    liberty::liberties(&sim, mv, color).0 == 1
}

/// Largest liberty count among `color` chains adjacent to the empty point
/// `pt`, stopping early once one exceeds `limit`. `None` if no neighbor is
/// `color`.
pub fn max_neighbor_liberties(board: &Board, pt: Point, color: Color, limit: usize) -> Option<usize> {
    assert_eq!(board.get(pt), Color::Empty);
    let mut max_libs = None;
    for n in board.neighbors(pt) {
        if board.get(n) != color {
            continue;
        }
        let libs = liberty::liberty_count(board, n);
        if libs > limit {
            return Some(libs);
        }
        max_libs = max_libs.max(Some(libs));
    }
    max_libs
}
