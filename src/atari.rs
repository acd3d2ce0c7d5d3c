//! Atari detection: can the attacker capture a chain right now, and is the
//! capturing move safe to play?

use tracing::trace;

use crate::board::{Board, Color, Point};
use crate::filter::selfatari_filter;
use crate::liberty;

/// Outcome of checking one opponent chain for an immediate capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureCheck {
    /// The capturing move, if the chain is in atari and taking it is safe
    pub capture: Option<Point>,
    /// Stones of the inspected chain (empty if nothing was inspected)
    pub inspected: Vec<Point>,
}

/// Return the move that captures the chain at `target`, if there is one.
///
/// The chain must belong to the opponent of `attacker` and have exactly one
/// liberty. The capture is refused when that liberty is illegal for the
/// attacker, fills the attacker's own eye, or leaves the attacker in atari.
pub fn captures_atari(board: &Board, target: Option<Point>, attacker: Color) -> Option<Point> {
    capture_check(board, target?, attacker).capture
}

/// Like [`captures_atari`], but also reports which stones were looked at so
/// a caller scanning many chains can skip them later.
pub fn capture_check(board: &Board, target: Point, attacker: Color) -> CaptureCheck {
    let defender = attacker.opponent();
    if board.get(target) != defender {
        return CaptureCheck {
            capture: None,
            inspected: Vec::new(),
        };
    }

    let chain = liberty::chain(board, target, defender);
    let capture = match chain.liberties[..] {
        [lib] if !selfatari_filter(board, lib, attacker) => Some(lib),
        [lib] => {
            trace!(target, lib, "capture refused: losing trade");
            None
        }
        _ => None,
    };

    CaptureCheck {
        capture,
        inspected: chain.stones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_target_means_no_capture() {
        let board = Board::new(5).unwrap();
        assert_eq!(captures_atari(&board, None, Color::Black), None);
    }

    #[test]
    fn test_capture_single_stone() {
        let board = Board::from_rows(&[
            ".....", //
            "..X..",
            ".XO..",
            "..X..",
            ".....",
        ])
        .unwrap();
        let c3 = board.point(3, 3);
        let d3 = board.point(3, 4);
        assert_eq!(captures_atari(&board, Some(c3), Color::Black), Some(d3));
    }

    #[test]
    fn test_two_liberties_is_not_atari() {
        let board = Board::from_rows(&[
            ".....", //
            "..X..",
            ".XO..",
            ".....",
            ".....",
        ])
        .unwrap();
        let c3 = board.point(3, 3);
        assert_eq!(captures_atari(&board, Some(c3), Color::Black), None);
    }

    #[test]
    fn test_own_stone_is_not_a_target() {
        let board = Board::from_rows(&[
            "...", //
            ".X.",
            "...",
        ])
        .unwrap();
        let b2 = board.point(2, 2);
        let check = capture_check(&board, b2, Color::Black);
        assert_eq!(check.capture, None);
        assert!(check.inspected.is_empty());
    }

    #[test]
    fn test_capture_refused_when_liberty_is_ko() {
        let mut board = Board::from_rows(&[
            ".....", //
            ".XO..",
            "X.XO.",
            ".XO..",
            ".....",
        ])
        .unwrap();
        let b3 = board.point(3, 2);
        let c3 = board.point(3, 3);
        board.play(Some(b3), Color::White).unwrap();
        // The white stone at B3 is in atari, but its liberty is the ko point.
        assert_eq!(captures_atari(&board, Some(b3), Color::Black), None);
        assert_eq!(board.ko(), Some(c3));
    }

    #[test]
    fn test_capture_refused_when_capturer_is_left_in_atari() {
        // Taking white A1-B1 at C1 leaves the black stone with only B1.
        let board = Board::from_rows(&[
            ".....", //
            ".....",
            ".....",
            "XXO..",
            "OO.O.",
        ])
        .unwrap();
        let b1 = board.point(1, 2);
        let c1 = board.point(1, 3);
        assert!(board.is_legal(c1, Color::Black));
        assert!(selfatari_filter(&board, c1, Color::Black));
        assert_eq!(captures_atari(&board, Some(b1), Color::Black), None);

        let mut sim = board.clone();
        assert_eq!(sim.play(Some(c1), Color::Black), Ok(2));
        assert_eq!(sim.ko(), None);
        assert_eq!(liberty::liberties(&sim, c1, Color::Black), (1, vec![b1]));
    }

    #[test]
    fn test_inspected_reports_whole_chain() {
        let board = Board::from_rows(&[
            "XXXX.", //
            "OOO..",
            "XXXX.",
            ".....",
            ".....",
        ])
        .unwrap();
        let a4 = board.point(4, 1);
        let d4 = board.point(4, 4);
        let check = capture_check(&board, a4, Color::Black);
        assert_eq!(check.inspected.len(), 3);
        assert_eq!(check.capture, Some(d4));
    }
}
