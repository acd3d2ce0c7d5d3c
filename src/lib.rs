//! go-tactics: the tactical move chooser behind Go playouts.
//!
//! Given a position, the policy picks the next move for the side to play by
//! cascading through capture, atari defense, 3x3 patterns and a uniformly
//! random fallback. It is fast enough to drive thousands of playouts per
//! evaluated position.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and playout defaults
//! - [`board`] - Board state, legality, captures, ko, eyes, scoring
//! - [`coord`] - Display coordinates ("D4", "pass")
//! - [`liberty`] - Chain traversal and liberty counting
//! - [`atari`] - Capturing chains in atari
//! - [`selfatari`] - Self-atari detection
//! - [`capture`] - Frontier search for capturing moves
//! - [`defend`] - Escaping or counter-capturing after an atari
//! - [`patterns`] - 3x3 pattern set and matching
//! - [`filter`] - Move rejection filters
//! - [`policy`] - The move-selection cascade
//! - [`playout`] - Playing games out with the policy
//!
//! ## Example
//!
//! ```
//! use go_tactics::board::{Board, Color};
//! use go_tactics::coord::{format_move, parse_move};
//! use go_tactics::patterns::PatternSet;
//! use go_tactics::policy::{Policy, PolicyConfig};
//!
//! let mut board = Board::new(9).unwrap();
//! board.play(parse_move("D4", 9).unwrap(), Color::Black).unwrap();
//!
//! let mut policy = Policy::with_seed(PatternSet::shared(), PolicyConfig::default(), 1);
//! let mv = policy.generate_move(&board);
//! println!("White plays {}", format_move(mv, 9).unwrap());
//! ```

pub mod atari;
pub mod board;
pub mod capture;
pub mod constants;
pub mod coord;
pub mod defend;
pub mod error;
pub mod filter;
pub mod liberty;
pub mod patterns;
pub mod playout;
pub mod policy;
pub mod selfatari;
