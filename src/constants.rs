//! Constants for board geometry, coordinates and playout defaults.
//!
//! The board itself is sized at runtime, but the default size used by the
//! command line is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) when none is given on the command line.
#[cfg(feature = "board9x9")]
pub const DEFAULT_BOARD_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_BOARD_SIZE: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Smallest supported board.
pub const MIN_BOARD_SIZE: usize = 1;

/// Largest supported board. Bounded by the number of column letters.
pub const MAX_BOARD_SIZE: usize = 25;

/// Column letters used for display coordinates. 'I' is skipped.
pub const COLUMN_LETTERS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Playout Defaults
// =============================================================================

/// Default komi for playouts.
pub const DEFAULT_KOMI: f32 = 0.0;

/// Default move limit for a single playout.
pub const DEFAULT_MOVE_LIMIT: usize = 1000;

/// Number of playouts run by the `playout` command when not specified.
pub const DEFAULT_GAMES: usize = 100;

// =============================================================================
// Tactical Thresholds
// =============================================================================

/// A friendly neighbor chain with more liberties than this cannot be brought
/// down to a single liberty by one added stone.
pub const SELFATARI_LIBERTY_BOUND: usize = 2;

// =============================================================================
// Pattern Table
// =============================================================================

/// Size in bytes of the 3x3 pattern bitfield (one bit per 16-bit signature).
pub const PAT3_TABLE_BYTES: usize = 8192;
