//! Chain traversal and liberty counting.
//!
//! Chains are never stored; every query flood-fills from a stone over
//! 4-adjacent points of the same color.

use crate::board::{Board, Color, Point};

/// A chain of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Stones of the chain, in traversal order
    pub stones: Vec<Point>,
    /// Distinct empty points adjacent to the chain
    pub liberties: Vec<Point>,
}

impl Chain {
    #[inline]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// True if the chain has exactly one liberty.
    #[inline]
    pub fn in_atari(&self) -> bool {
        self.liberties.len() == 1
    }
}

/// Collect the chain containing `start` together with its liberties.
///
/// # Panics
/// Panics if `board[start]` is not `color`.
pub fn chain(board: &Board, start: Point, color: Color) -> Chain {
    assert_eq!(
        board.get(start),
        color,
        "chain lookup at {start}: expected {color}, found {}",
        board.get(start)
    );
    let mut visited = vec![false; board.len()];
    let mut stack = vec![start];
    let mut stones = Vec::new();
    let mut liberties = Vec::new();
    visited[start] = true;

    while let Some(pt) = stack.pop() {
        stones.push(pt);
        for n in board.neighbors(pt) {
            if visited[n] {
                continue;
            }
            match board.get(n) {
                Color::Empty => {
                    visited[n] = true;
                    liberties.push(n);
                }
                c if c == color => {
                    visited[n] = true;
                    stack.push(n);
                }
                _ => {}
            }
        }
    }

    Chain { stones, liberties }
}

/// Liberty count and liberty positions of the chain at `pt`.
///
/// # Panics
/// Panics if `board[pt]` is not `color`.
pub fn liberties(board: &Board, pt: Point, color: Color) -> (usize, Vec<Point>) {
    let libs = chain(board, pt, color).liberties;
    (libs.len(), libs)
}

/// Number of liberties of whatever stone sits at `pt`.
pub fn liberty_count(board: &Board, pt: Point) -> usize {
    let color = board.get(pt);
    assert!(color.is_stone(), "liberty_count at {pt}: no stone ({color})");
    chain(board, pt, color).liberty_count()
}
