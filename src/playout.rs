//! Policy-driven playouts (simulated game completion).
//!
//! A playout lets the policy pick moves for both sides until two
//! consecutive passes or a move limit, then scores the final position.

use tracing::debug;

use crate::board::{Board, Color};
use crate::constants::{DEFAULT_KOMI, DEFAULT_MOVE_LIMIT};
use crate::error::MoveError;
use crate::policy::Policy;

/// Playout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayoutConfig {
    /// Compensation points for White
    pub komi: f32,
    /// Maximum number of moves (passes included)
    pub limit: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            komi: DEFAULT_KOMI,
            limit: DEFAULT_MOVE_LIMIT,
        }
    }
}

/// Play the game out from `board` with `color` to move and return the winner.
///
/// The board is mutated in place. A move chosen by the policy that the board
/// rejects is returned as an error.
pub fn play_game(
    board: &mut Board,
    color: Color,
    policy: &mut Policy<'_>,
    config: &PlayoutConfig,
) -> Result<Color, MoveError> {
    board.current_player = color;
    let mut color = color;
    let mut passes = 0;

    for _ in 0..config.limit {
        let mv = policy.generate_move(board);
        board.play(mv, color)?;
        if mv.is_some() {
            passes = 0;
        } else {
            passes += 1;
            if passes == 2 {
                break;
            }
        }
        color = color.opponent();
    }

    Ok(board.winner(config.komi))
}

/// Win counts over a batch of playouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayoutStats {
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
}

impl PlayoutStats {
    pub fn record(&mut self, winner: Color) {
        self.games += 1;
        match winner {
            Color::Black => self.black_wins += 1,
            _ => self.white_wins += 1,
        }
    }

    /// Fraction of games won by Black (0.0 with no games).
    pub fn black_winrate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.black_wins as f64 / self.games as f64
        }
    }
}

/// Run `games` playouts from copies of `board`, `board.current_player` to move.
pub fn run_playouts(
    board: &Board,
    games: usize,
    policy: &mut Policy<'_>,
    config: &PlayoutConfig,
) -> Result<PlayoutStats, MoveError> {
    let mut stats = PlayoutStats::default();
    for game in 0..games {
        let mut sim = board.clone();
        let winner = play_game(&mut sim, board.current_player, policy, config)?;
        debug!(game, %winner, score = sim.score(config.komi), "playout finished");
        stats.record(winner);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternSet;
    use crate::policy::PolicyConfig;

    #[test]
    fn test_playout_terminates_and_scores() {
        let mut board = Board::new(5).unwrap();
        let mut policy = Policy::with_seed(PatternSet::shared(), PolicyConfig::default(), 11);
        let config = PlayoutConfig::default();
        let winner = play_game(&mut board, Color::Black, &mut policy, &config).unwrap();
        assert!(winner.is_stone());
        assert_eq!(winner, board.winner(config.komi));
    }

    #[test]
    fn test_move_limit_stops_game() {
        let mut board = Board::new(9).unwrap();
        let mut policy = Policy::with_seed(PatternSet::shared(), PolicyConfig::default(), 5);
        let config = PlayoutConfig { komi: 0.5, limit: 4 };
        play_game(&mut board, Color::Black, &mut policy, &config).unwrap();
        let stones = 81 - board.empty_points().len();
        let captured = board.captures(Color::Black) + board.captures(Color::White);
        assert_eq!(stones + captured as usize, 4);
    }

    #[test]
    fn test_stats() {
        let board = Board::new(5).unwrap();
        let mut policy = Policy::with_seed(PatternSet::shared(), PolicyConfig::default(), 2);
        let stats = run_playouts(&board, 5, &mut policy, &PlayoutConfig::default()).unwrap();
        assert_eq!(stats.games, 5);
        assert_eq!(stats.black_wins + stats.white_wins, 5);
        assert!((0.0..=1.0).contains(&stats.black_winrate()));
        // The source board is untouched.
        assert_eq!(board.empty_points().len(), 25);
    }
}
