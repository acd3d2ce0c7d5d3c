//! Go board representation and move execution.
//!
//! The board is a 1D array with a one-point `Border` frame, so neighbor
//! lookups never need bounds checks:
//! - `NS = size + 1` is the row stride
//! - `point = row * NS + col` with 1-based row and column
//! - row 0, column 0 and row `size + 1` are border
//!
//! Row 1 is the bottom row. Column 0 doubles as the right-hand border of
//! the previous row.

use std::fmt;
use std::str::FromStr;

use crate::constants::{COLUMN_LETTERS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{BoardError, ColorError, MoveError};
use crate::liberty;

/// A point on the board, represented as an index into the 1D board array.
pub type Point = usize;

/// Content of a board point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Black,
    White,
    /// Off-board padding.
    Border,
}

impl Color {
    /// The other player.
    ///
    /// # Panics
    /// Panics on `Empty` and `Border`, which have no opponent.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            other => panic!("wrong color provided for opponent: {other:?}"),
        }
    }

    /// True for Black and White.
    #[inline]
    pub fn is_stone(self) -> bool {
        matches!(self, Color::Black | Color::White)
    }

    /// Parse a single-letter color code (`b`, `w`, `e`).
    pub fn from_char(c: char) -> Result<Color, ColorError> {
        match c.to_ascii_lowercase() {
            'b' => Ok(Color::Black),
            'w' => Ok(Color::White),
            'e' => Ok(Color::Empty),
            _ => Err(ColorError(c.to_string())),
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
            Color::Empty => '.',
            Color::Border => '#',
        }
    }

    fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Empty => "empty",
            Color::Border => "border",
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            "e" | "empty" => Ok(Color::Empty),
            _ => Err(ColorError(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Go board with the scalar game state the move policy reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    ns: usize,
    cells: Vec<Color>,
    /// Player to move
    pub current_player: Color,
    /// Last move played (`None` at game start or after a pass)
    pub last_move: Option<Point>,
    /// Move before the last one
    pub last2_move: Option<Point>,
    /// Point that may not be played because it would retake a ko
    ko: Option<Point>,
    passes_black: u32,
    passes_white: u32,
    black_captures: u32,
    white_captures: u32,
}

impl Board {
    /// Create an empty board with Black to play.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        let ns = size + 1;
        let mut cells = vec![Color::Border; size * size + 3 * ns];
        for row in 1..=size {
            for col in 1..=size {
                cells[row * ns + col] = Color::Empty;
            }
        }
        Ok(Self {
            size,
            ns,
            cells,
            current_player: Color::Black,
            last_move: None,
            last2_move: None,
            ko: None,
            passes_black: 0,
            passes_white: 0,
            black_captures: 0,
            white_captures: 0,
        })
    }

    /// Build a position from a text diagram.
    ///
    /// `X` is Black, `O` is White, `.` or `+` is empty; whitespace is
    /// ignored. The first row is the top of the board. Every stone must
    /// have at least one liberty. Black is to move.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut board = Board::new(size)?;
        for (i, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != size {
                return Err(BoardError::NotSquare {
                    rows: size,
                    width: cells.len(),
                });
            }
            let row = size - i;
            for (c, &ch) in cells.iter().enumerate() {
                let color = match ch {
                    'X' | 'x' => Color::Black,
                    'O' | 'o' => Color::White,
                    '.' | '+' => Color::Empty,
                    _ => return Err(BoardError::BadCell { row, ch }),
                };
                let pt = board.point(row, c + 1);
                board.cells[pt] = color;
            }
        }
        for pt in board.points() {
            if board.cells[pt].is_stone() && liberty::liberty_count(&board, pt) == 0 {
                let (row, col) = board.row_col(pt);
                let name = format!("{}{}", COLUMN_LETTERS[col - 1] as char, row);
                return Err(BoardError::DeadStone(name));
            }
        }
        Ok(board)
    }

    /// Board size (NxN).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the padded point array.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a board has at least its border.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Point for a 1-based (row, col) pair.
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Point {
        debug_assert!((1..=self.size).contains(&row) && (1..=self.size).contains(&col));
        row * self.ns + col
    }

    /// 1-based (row, col) of a point.
    #[inline]
    pub fn row_col(&self, pt: Point) -> (usize, usize) {
        (pt / self.ns, pt % self.ns)
    }

    /// True if the point lies inside the playing area.
    pub fn is_on_board(&self, pt: Point) -> bool {
        let (row, col) = self.row_col(pt);
        (1..=self.size).contains(&row) && (1..=self.size).contains(&col)
    }

    /// Color at a point.
    #[inline]
    pub fn get(&self, pt: Point) -> Color {
        self.cells[pt]
    }

    /// Place (or remove, with `Color::Empty`) a stone without any rule
    /// processing. Used for setting up positions.
    pub fn set_stone(&mut self, pt: Point, color: Color) {
        assert!(self.is_on_board(pt), "set_stone: point {pt} is off the board");
        assert_ne!(color, Color::Border, "set_stone: cannot place a border");
        self.cells[pt] = color;
    }

    /// Every on-board point, bottom row first.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (1..=self.size).flat_map(move |row| (1..=self.size).map(move |col| row * self.ns + col))
    }

    /// All empty points.
    pub fn empty_points(&self) -> Vec<Point> {
        self.points().filter(|&pt| self.cells[pt] == Color::Empty).collect()
    }

    /// The 4 orthogonal neighbors, in North, East, South, West order.
    #[inline]
    pub fn neighbors(&self, pt: Point) -> [Point; 4] {
        [pt + self.ns, pt + 1, pt - self.ns, pt - 1]
    }

    /// The 4 diagonal neighbors (NE, SE, SW, NW).
    #[inline]
    pub fn diagonal_neighbors(&self, pt: Point) -> [Point; 4] {
        [
            pt + self.ns + 1,
            pt - self.ns + 1,
            pt - self.ns - 1,
            pt + self.ns - 1,
        ]
    }

    /// Current ko point, if any.
    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    /// Stones captured so far by `color`.
    pub fn captures(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_captures,
            Color::White => self.white_captures,
            _ => 0,
        }
    }

    /// Passes played so far by `color`.
    pub fn passes(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.passes_black,
            Color::White => self.passes_white,
            _ => 0,
        }
    }

    /// Check whether `color` may play at `pt`, without touching the board.
    ///
    /// The point must be empty and not the ko point, and the new stone must
    /// end up with a liberty: an empty neighbor, a captured opponent chain,
    /// or a friendly chain that keeps another liberty.
    pub fn is_legal(&self, pt: Point, color: Color) -> bool {
        if !color.is_stone() || !self.is_on_board(pt) || self.cells[pt] != Color::Empty {
            return false;
        }
        if self.ko == Some(pt) {
            return false;
        }
        let opp = color.opponent();
        for n in self.neighbors(pt) {
            let c = self.cells[n];
            if c == Color::Empty {
                return true;
            }
            if c == color && liberty::liberty_count(self, n) > 1 {
                return true;
            }
            if c == opp && liberty::liberty_count(self, n) == 1 {
                return true;
            }
        }
        false
    }

    /// Check if `pt` is an eye for `color`.
    ///
    /// Every on-board orthogonal neighbor must be `color`, and the diagonals
    /// may hold at most one opponent stone in the interior and none at the
    /// edge.
    pub fn is_eye(&self, pt: Point, color: Color) -> bool {
        if self.cells[pt] != Color::Empty || !color.is_stone() {
            return false;
        }
        for n in self.neighbors(pt) {
            let c = self.cells[n];
            if c != Color::Border && c != color {
                return false;
            }
        }
        let opp = color.opponent();
        let mut false_count = 0;
        let mut at_edge = false;
        for d in self.diagonal_neighbors(pt) {
            match self.cells[d] {
                Color::Border => at_edge = true,
                c if c == opp => false_count += 1,
                _ => {}
            }
        }
        if at_edge {
            false_count += 1;
        }
        false_count < 2
    }

    /// Play a move (`None` is a pass) for `color`.
    ///
    /// Returns the number of stones captured. An illegal move leaves the
    /// board unchanged.
    pub fn play(&mut self, mv: Option<Point>, color: Color) -> Result<usize, MoveError> {
        if !color.is_stone() {
            return Err(MoveError::NotAPlayer(color.name()));
        }
        let Some(pt) = mv else {
            self.pass(color);
            return Ok(0);
        };
        if !self.is_on_board(pt) {
            return Err(MoveError::OffBoard);
        }
        if self.cells[pt] != Color::Empty {
            return Err(MoveError::Occupied);
        }
        if self.ko == Some(pt) {
            return Err(MoveError::Ko);
        }
        if !self.is_legal(pt, color) {
            return Err(MoveError::Suicide);
        }

        self.cells[pt] = color;
        let opp = color.opponent();
        let mut captured: Vec<Point> = Vec::new();
        for n in self.neighbors(pt) {
            if self.cells[n] == opp && !captured.contains(&n) {
                let chain = liberty::chain(self, n, opp);
                if chain.liberties.is_empty() {
                    captured.extend(chain.stones);
                }
            }
        }
        for &r in &captured {
            self.cells[r] = Color::Empty;
        }

        self.ko = None;
        if captured.len() == 1 {
            let own = liberty::chain(self, pt, color);
            if own.stones.len() == 1 && own.liberties.len() == 1 {
                self.ko = Some(captured[0]);
            }
        }

        let count = captured.len();
        match color {
            Color::Black => self.black_captures += count as u32,
            _ => self.white_captures += count as u32,
        }
        self.last2_move = self.last_move;
        self.last_move = Some(pt);
        self.current_player = opp;
        Ok(count)
    }

    /// Play a move, reporting only whether it was legal.
    pub fn apply_move(&mut self, mv: Option<Point>, color: Color) -> bool {
        self.play(mv, color).is_ok()
    }

    fn pass(&mut self, color: Color) {
        match color {
            Color::Black => self.passes_black += 1,
            _ => self.passes_white += 1,
        }
        self.ko = None;
        self.last2_move = self.last_move;
        self.last_move = None;
        self.current_player = color.opponent();
    }

    /// Empty points in the 3x3 neighborhoods of the last two moves, each
    /// listed once.
    pub fn last_moves_empty_neighbors(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for mv in [self.last_move, self.last2_move].into_iter().flatten() {
            let around = self.neighbors(mv).into_iter().chain(self.diagonal_neighbors(mv));
            for n in around {
                if self.cells[n] == Color::Empty && !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// Color surrounding an empty point on all on-board sides, if any.
    fn eyeish_color(&self, pt: Point) -> Option<Color> {
        let mut eyecolor = None;
        for n in self.neighbors(pt) {
            match self.cells[n] {
                Color::Border => continue,
                Color::Empty => return None,
                c => match eyecolor {
                    None => eyecolor = Some(c),
                    Some(e) if e != c => return None,
                    _ => {}
                },
            }
        }
        eyecolor
    }

    /// Area score from Black's point of view, komi included.
    ///
    /// Stones count for their owner, and an empty point counts for the
    /// color that surrounds it on every side.
    pub fn score(&self, komi: f32) -> f32 {
        let mut s = -komi;
        for pt in self.points() {
            let owner = match self.cells[pt] {
                Color::Empty => self.eyeish_color(pt),
                c => Some(c),
            };
            match owner {
                Some(Color::Black) => s += 1.0,
                Some(Color::White) => s -= 1.0,
                _ => {}
            }
        }
        s
    }

    /// Winner by area score. Ties go to White.
    pub fn winner(&self, komi: f32) -> Color {
        if self.score(komi) > 0.0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=self.size {
                write!(f, "{} ", self.cells[self.point(row, col)].symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for &letter in COLUMN_LETTERS.iter().take(self.size) {
            write!(f, "{} ", letter as char)?;
        }
        writeln!(f)
    }
}
