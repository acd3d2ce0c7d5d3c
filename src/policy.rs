//! Playout move policy: a one-ply cascade of tactical priorities.
//!
//! In order, first success wins:
//! 1. capture the last move's chain if it is in atari
//! 2. defend a friendly chain the last move put in atari
//! 3. sample a 3x3 pattern move near the last moves
//! 4. sample a uniformly random legal move that does not fill an eye
//!
//! Tiers 1 and 2 are deterministic. Only tiers 3 and 4 draw from the
//! policy's random number generator.

use std::fmt;

use tracing::debug;

use crate::atari::captures_atari;
use crate::board::{Board, Color, Point};
use crate::defend::defend_atari;
use crate::filter::{fills_eye_or_illegal, filter_moves, reject};
use crate::patterns::{PatternSet, pattern_moves};

/// Runtime switches for the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Use the 3x3 pattern tier
    pub use_pattern: bool,
    /// Reject self-atari in the pattern tier
    pub check_selfatari: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            use_pattern: true,
            check_selfatari: true,
        }
    }
}

/// The cascade tier that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    AtariCapture,
    AtariDefense,
    Pattern,
    Random,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::AtariCapture => "AtariCapture",
            Tier::AtariDefense => "AtariDefense",
            Tier::Pattern => "Pattern",
            Tier::Random => "Random",
        };
        f.write_str(name)
    }
}

/// Move generator for playouts.
pub struct Policy<'a> {
    patterns: &'a PatternSet,
    config: PolicyConfig,
    rng: fastrand::Rng,
}

impl<'a> Policy<'a> {
    /// Create a policy with a randomly seeded generator.
    pub fn new(patterns: &'a PatternSet, config: PolicyConfig) -> Self {
        Self {
            patterns,
            config,
            rng: fastrand::Rng::new(),
        }
    }

    /// Create a policy with a fixed seed, for reproducible playouts.
    pub fn with_seed(patterns: &'a PatternSet, config: PolicyConfig, seed: u64) -> Self {
        Self {
            patterns,
            config,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// The switches this policy was built with.
    pub fn config(&self) -> PolicyConfig {
        self.config
    }

    /// Choose a move for `board.current_player`, or `None` to pass.
    ///
    /// The board is only read; playing the move is up to the caller.
    pub fn generate_move(&mut self, board: &Board) -> Option<Point> {
        self.generate_move_with_tier(board).map(|(pt, _)| pt)
    }

    /// Like [`Policy::generate_move`], also reporting which tier fired.
    pub fn generate_move_with_tier(&mut self, board: &Board) -> Option<(Point, Tier)> {
        let color = board.current_player;

        if let Some(pt) = captures_atari(board, board.last_move, color) {
            debug!(pt, "atari capture");
            return Some((pt, Tier::AtariCapture));
        }

        if let Some(pt) = defend_atari(board, color).best() {
            debug!(pt, "atari defense");
            return Some((pt, Tier::AtariDefense));
        }

        if self.config.use_pattern {
            let moves = pattern_moves(board, self.patterns);
            if let Some(pt) = self.sample_accepted(board, moves, color) {
                return Some((pt, Tier::Pattern));
            }
        }

        generate_random_move(board, &mut self.rng).map(|pt| (pt, Tier::Random))
    }

    /// Every candidate of the first tier that has any, with its label.
    ///
    /// For inspection only; playouts should use [`Policy::generate_move`].
    /// The pattern tier is always considered here.
    pub fn generate_all_candidates(&self, board: &Board) -> (Vec<Point>, Tier) {
        let color = board.current_player;

        if let Some(pt) = captures_atari(board, board.last_move, color) {
            return (vec![pt], Tier::AtariCapture);
        }

        let defense = defend_atari(board, color);
        if !defense.is_none() {
            return (defense.moves(), Tier::AtariDefense);
        }

        let moves = pattern_moves(board, self.patterns);
        let moves = filter_moves(board, &moves, self.config.check_selfatari);
        if !moves.is_empty() {
            return (moves, Tier::Pattern);
        }

        (generate_random_moves(board), Tier::Random)
    }

    /// Draw candidates without replacement until one passes the filter.
    fn sample_accepted(&mut self, board: &Board, mut moves: Vec<Point>, color: Color) -> Option<Point> {
        while !moves.is_empty() {
            let idx = self.rng.usize(..moves.len());
            let candidate = moves.swap_remove(idx);
            if !reject(board, candidate, color, self.config.check_selfatari) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Every empty point that is legal for the player to move and does not fill
/// one of its eyes.
pub fn generate_random_moves(board: &Board) -> Vec<Point> {
    let color = board.current_player;
    board
        .empty_points()
        .into_iter()
        .filter(|&pt| !fills_eye_or_illegal(board, pt, color))
        .collect()
}

/// Sample empty points without replacement until one is legal and does not
/// fill an eye. `None` when no such point exists.
pub fn generate_random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Point> {
    let color = board.current_player;
    let mut moves = board.empty_points();
    while !moves.is_empty() {
        let idx = rng.usize(..moves.len());
        let candidate = moves.swap_remove(idx);
        if !fills_eye_or_illegal(board, candidate, color) {
            return Some(candidate);
        }
    }
    None
}
