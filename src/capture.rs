//! Search outward from a friendly chain for any capturing move.

use tracing::trace;

use crate::atari::capture_check;
use crate::board::{Board, Color, Point};

/// Find a move for `color` that captures an opponent chain reachable from
/// `start`.
///
/// Friendly stones reached from `start` grow the frontier; every opponent
/// stone met on the way is tested for an immediate, safe capture. A chain
/// that has been tested is never tested again, and every friendly point is
/// expanded once, so the work is bounded by the board area. The first hit
/// wins.
pub fn find_capture_point(board: &Board, start: Point, color: Color) -> Option<Point> {
    let opponent = color.opponent();
    let mut explored = vec![false; board.len()];
    let mut checked = vec![false; board.len()];
    let mut frontier: Vec<Point> = board.neighbors(start).to_vec();

    while let Some(pt) = frontier.pop() {
        let c = board.get(pt);
        if c == color && !explored[pt] {
            explored[pt] = true;
            frontier.extend(board.neighbors(pt));
        } else if c == opponent && !checked[pt] {
            let check = capture_check(board, pt, color);
            if let Some(capture) = check.capture {
                trace!(start, capture, "capture point found");
                return Some(capture);
            }
            checked[pt] = true;
            for stone in check.inspected {
                checked[stone] = true;
            }
        }
    }
    None
}
