//! Defending a friendly chain the opponent's last move put in atari.

use tracing::debug;

use crate::atari::captures_atari;
use crate::board::{Board, Color, Point};
use crate::capture::find_capture_point;
use crate::filter::fills_eye_or_illegal;

/// Candidate answers to an atari.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AtariDefense {
    /// A stone of the chain being defended
    pub group: Option<Point>,
    /// Extending into the chain's last liberty, if that is safe
    pub escape: Option<Point>,
    /// Capturing a neighboring opponent chain instead of running
    pub counter_capture: Option<Point>,
}

impl AtariDefense {
    /// True if there is nothing to play.
    pub fn is_none(&self) -> bool {
        self.escape.is_none() && self.counter_capture.is_none()
    }

    /// Preferred defensive move: escape first, then counter-capture.
    pub fn best(&self) -> Option<Point> {
        self.escape.or(self.counter_capture)
    }

    /// All defensive moves, escape first.
    pub fn moves(&self) -> Vec<Point> {
        [self.escape, self.counter_capture]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Look for a `color` chain next to the last move that is now in atari and
/// build its escape and counter-capture candidates.
///
/// Neighbors of the last move are scanned in North, East, South, West order
/// and only the first chain found in atari is defended.
pub fn defend_atari(board: &Board, color: Color) -> AtariDefense {
    let Some(last) = board.last_move else {
        return AtariDefense::default();
    };
    let opponent = color.opponent();

    let found = board.neighbors(last).into_iter().find_map(|n| {
        if board.get(n) != color {
            return None;
        }
        captures_atari(board, Some(n), opponent).map(|lib| (n, lib))
    });
    let Some((group, liberty)) = found else {
        return AtariDefense::default();
    };

    let escape = is_safe_escape(board, liberty, color).then_some(liberty);
    let counter_capture = find_capture_point(board, group, color);
    debug!(group, ?escape, ?counter_capture, "defending atari");

    AtariDefense {
        group: Some(group),
        escape,
        counter_capture,
    }
}

/// Extend into `liberty` on a clone and check the opponent cannot capture
/// the extended chain straight away.
fn is_safe_escape(board: &Board, liberty: Point, color: Color) -> bool {
    if fills_eye_or_illegal(board, liberty, color) {
        return false;
    }
    let mut sim = board.clone();
    if !sim.apply_move(Some(liberty), color) {
        return false;
    }
    captures_atari(&sim, sim.last_move, color.opponent()).is_none()
}
