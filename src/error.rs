//! Error types for board setup, move execution, coordinates and patterns.
//!
//! Tactical checks never produce these: an illegal speculative move is a
//! plain `false`, and "no candidate" is `None`.

use thiserror::Error;

/// Errors raised while constructing a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {0} out of range (1..=25)")]
    InvalidSize(usize),

    #[error("diagram must have as many rows as columns, got {rows} rows of width {width}")]
    NotSquare { rows: usize, width: usize },

    #[error("unexpected character '{ch}' in diagram row {row}")]
    BadCell { row: usize, ch: char },

    #[error("diagram stone at {0} has no liberties")]
    DeadStone(String),
}

/// Reasons a move cannot be played.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Illegal move: point not on board")]
    OffBoard,

    #[error("Illegal move: point not EMPTY")]
    Occupied,

    #[error("Illegal move: retakes ko")]
    Ko,

    #[error("Illegal move: suicide")]
    Suicide,

    #[error("Illegal move: {0} cannot move")]
    NotAPlayer(&'static str),
}

/// Errors converting between display coordinates and points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("board size {0} out of range")]
    SizeOutOfRange(usize),

    #[error("invalid point '{0}'")]
    Invalid(String),

    #[error("wrong coordinate '{0}'")]
    OutOfBoard(String),
}

/// Errors while building a pattern set from textual sources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern '{0}' must have exactly 9 cells")]
    BadLength(String),

    #[error("pattern '{src}' has unknown cell '{ch}'")]
    BadCell { src: String, ch: char },
}

/// Error parsing a player color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("wrong color '{0}'")]
pub struct ColorError(pub String);
