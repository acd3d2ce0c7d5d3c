//! 3x3 pattern matching for move generation.
//!
//! A point's 8 neighbors are encoded into a 16-bit signature and looked up
//! in an 8192-byte bitfield, one bit per possible signature. The set is
//! expanded from textual 3x3 sources over all rotations, reflections and
//! color swaps, so the lookup uses absolute colors.
//!
//! The set is built once and shared read-only for the life of the process
//! (see [`PatternSet::shared`]).

use std::sync::OnceLock;

use crate::board::{Board, Color, Point};
use crate::constants::PAT3_TABLE_BYTES;
use crate::error::PatternError;

/// The 3x3 pattern sources from Michi.
/// Each pattern is a 9-character string representing a 3x3 grid:
/// - X: one player
/// - O: the other player
/// - .: empty
/// - x: not X (i.e., O or . or #)
/// - o: not O (i.e., X or . or #)
/// - ?: any (X, O, ., or #)
/// - #: edge of board (out of bounds)
pub const PAT3_SRC: &[&[u8; 9]] = &[
    // 1- hane pattern - enclosing hane
    b"XOX...???",
    // 2- hane pattern - non-cutting hane
    b"XO....?.?",
    // 3- hane pattern - magari
    b"XO?X..x.?",
    // 4- generic pattern - katatsuke or diagonal attachment
    b".O.X.....",
    // 5- cut1 pattern (kiri) - unprotected cut
    b"XO?O.o?o?",
    // 6- cut1 pattern (kiri) - peeped cut
    b"XO?O.X???",
    // 7- cut2 pattern (de)
    b"?X?O.Oooo",
    // 8- cut keima
    b"OX?o.O???",
    // 9- side pattern - chase
    b"X.?O.?##?",
    // 10- side pattern - block side cut
    b"OX?X.O###",
    // 11- side pattern - block side connection
    b"?X?x.O###",
    // 12- side pattern - sagari
    b"?XOx.x###",
    // 13- side pattern - cut
    b"?OXX.O###",
];

static SHARED: OnceLock<PatternSet> = OnceLock::new();

/// A set of 3x3 neighborhood signatures.
#[derive(Clone)]
pub struct PatternSet {
    bits: Box<[u8; PAT3_TABLE_BYTES]>,
}

impl std::fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternSet")
            .field("signatures", &self.len())
            .finish()
    }
}

impl PatternSet {
    /// An empty set, matching nothing.
    pub fn empty() -> Self {
        Self {
            bits: Box::new([0u8; PAT3_TABLE_BYTES]),
        }
    }

    /// Build a set from pattern sources, expanding wildcards and symmetries.
    pub fn from_sources(sources: &[&str]) -> Result<Self, PatternError> {
        let mut set = Self::empty();
        for src in sources {
            set.add_source(parse_source(src)?);
        }
        Ok(set)
    }

    /// The built-in Michi patterns.
    pub fn standard() -> Self {
        let mut set = Self::empty();
        for &&src in PAT3_SRC {
            set.add_source(src);
        }
        set
    }

    /// Process-wide standard set, built on first use.
    pub fn shared() -> &'static PatternSet {
        SHARED.get_or_init(PatternSet::standard)
    }

    /// Check whether a signature is in the set.
    #[inline]
    pub fn contains(&self, signature: u16) -> bool {
        let (byte, bit) = slot(signature);
        self.bits[byte] & bit != 0
    }

    /// Check whether the neighborhood of `pt` matches a pattern.
    #[inline]
    pub fn matches(&self, board: &Board, pt: Point) -> bool {
        self.contains(signature(board, pt))
    }

    /// Number of signatures in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    fn insert(&mut self, signature: u16) {
        let (byte, bit) = slot(signature);
        self.bits[byte] |= bit;
    }

    /// Add every orientation and color swap of one 3x3 source.
    fn add_source(&mut self, src: [u8; 9]) {
        for variant in symmetries(src) {
            self.expand_wildcards(variant, 0);
        }
    }

    /// Replace wildcards from cell `from` on with every concrete cell they
    /// stand for, inserting each fully concrete grid.
    fn expand_wildcards(&mut self, cells: [u8; 9], from: usize) {
        let Some(i) = (from..9).find(|&i| matches!(cells[i], b'?' | b'x' | b'o')) else {
            self.insert(encode(&cells));
            return;
        };
        let choices: &[u8] = match cells[i] {
            b'?' => b"XO.#",
            b'x' => b"O.#",
            _ => b"X.#",
        };
        for &c in choices {
            let mut next = cells;
            next[i] = c;
            self.expand_wildcards(next, i + 1);
        }
    }
}

/// Empty points near the last two moves whose neighborhood matches `patterns`.
pub fn pattern_moves(board: &Board, patterns: &PatternSet) -> Vec<Point> {
    board
        .last_moves_empty_neighbors()
        .into_iter()
        .filter(|&pt| patterns.matches(board, pt))
        .collect()
}

/// Encode the 3x3 neighborhood of `pt`.
///
/// Low byte holds the orthogonal neighbors (N, E, S, W), high byte the
/// diagonals (NE, SE, SW, NW).
pub fn signature(board: &Board, pt: Point) -> u16 {
    let orthogonal = board.neighbors(pt).map(|n| color_value(board.get(n)));
    let diagonal = board.diagonal_neighbors(pt).map(|d| color_value(board.get(d)));
    pack(orthogonal, diagonal)
}

// Grid cells, row-major from the top left:
//   0 1 2
//   3 4 5
//   6 7 8
const ORTHOGONAL_CELLS: [usize; 4] = [1, 5, 7, 3];
const DIAGONAL_CELLS: [usize; 4] = [2, 8, 6, 0];
const ROTATE_90: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];
const MIRROR: [usize; 9] = [2, 1, 0, 5, 4, 3, 8, 7, 6];

/// Byte index and bit mask of a signature in the table.
fn slot(signature: u16) -> (usize, u8) {
    ((signature >> 3) as usize, 1 << (signature & 7))
}

/// Two-bit value of a point: O = 0, X = 1, . = 2, # = 3.
fn color_value(color: Color) -> u16 {
    match color {
        Color::White => 0,
        Color::Black => 1,
        Color::Empty => 2,
        Color::Border => 3,
    }
}

fn cell_value(cell: u8) -> u16 {
    match cell {
        b'X' => 1,
        b'.' => 2,
        b'#' => 3,
        _ => 0,
    }
}

/// Pack four orthogonal and four diagonal values. In each byte, the low
/// nibble holds the low bits and the high nibble the high bits.
fn pack(orthogonal: [u16; 4], diagonal: [u16; 4]) -> u16 {
    let byte = |values: [u16; 4]| {
        values.iter().enumerate().fold(0u16, |acc, (p, &v)| {
            acc | ((v & 1) << p) | (((v >> 1) & 1) << (p + 4))
        })
    };
    byte(orthogonal) | (byte(diagonal) << 8)
}

/// Signature of a wildcard-free 3x3 grid.
fn encode(cells: &[u8; 9]) -> u16 {
    pack(
        ORTHOGONAL_CELLS.map(|i| cell_value(cells[i])),
        DIAGONAL_CELLS.map(|i| cell_value(cells[i])),
    )
}

fn permute(cells: &[u8; 9], map: &[usize; 9]) -> [u8; 9] {
    std::array::from_fn(|i| cells[map[i]])
}

fn swap_colors(cells: [u8; 9]) -> [u8; 9] {
    cells.map(|c| match c {
        b'X' => b'O',
        b'O' => b'X',
        b'x' => b'o',
        b'o' => b'x',
        other => other,
    })
}

/// The four rotations of `src`, each mirrored or not, in both colorings.
fn symmetries(src: [u8; 9]) -> [[u8; 9]; 16] {
    let mut out = [[0u8; 9]; 16];
    let mut turned = src;
    for r in 0..4 {
        let mirrored = permute(&turned, &MIRROR);
        out[4 * r] = turned;
        out[4 * r + 1] = swap_colors(turned);
        out[4 * r + 2] = mirrored;
        out[4 * r + 3] = swap_colors(mirrored);
        turned = permute(&turned, &ROTATE_90);
    }
    out
}

fn parse_source(src: &str) -> Result<[u8; 9], PatternError> {
    let cells: [u8; 9] = src
        .as_bytes()
        .try_into()
        .map_err(|_| PatternError::BadLength(src.to_string()))?;
    if let Some(&bad) = cells.iter().find(|c| !b"XOxo.?#".contains(c)) {
        return Err(PatternError::BadCell {
            src: src.to_string(),
            ch: bad as char,
        });
    }
    Ok(cells)
}
