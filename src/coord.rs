//! Display coordinates ("D4", "pass").
//!
//! Columns are letters `A..Z` skipping `I`; rows are 1-based numbers with
//! row 1 at the bottom. Only the boundary (CLI, logs) uses these.

use crate::board::Point;
use crate::constants::{COLUMN_LETTERS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::CoordError;

fn check_size(size: usize) -> Result<(), CoordError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(CoordError::SizeOutOfRange(size))
    }
}

/// Convert a move to a coordinate string like "D4", or "pass".
pub fn format_move(mv: Option<Point>, size: usize) -> Result<String, CoordError> {
    check_size(size)?;
    let Some(pt) = mv else {
        return Ok("pass".into());
    };
    let ns = size + 1;
    let (row, col) = (pt / ns, pt % ns);
    if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
        return Err(CoordError::OutOfBoard(pt.to_string()));
    }
    Ok(format!("{}{row}", COLUMN_LETTERS[col - 1] as char))
}

/// Parse a coordinate string (e.g., "D4", "pass") into a move.
///
/// Case-insensitive. "pass" gives `None`.
pub fn parse_move(s: &str, size: usize) -> Result<Option<Point>, CoordError> {
    check_size(size)?;
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }

    let bytes = s.as_bytes();
    let Some((&first, digits)) = bytes.split_first() else {
        return Err(CoordError::Invalid(s.to_string()));
    };
    let letter = first.to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&c| c == letter)
        .map(|i| i + 1)
        .ok_or_else(|| CoordError::Invalid(s.to_string()))?;

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(CoordError::Invalid(s.to_string()));
    }
    let row: usize = s[1..]
        .parse()
        .map_err(|_| CoordError::Invalid(s.to_string()))?;

    if row < 1 || row > size || col > size {
        return Err(CoordError::OutOfBoard(s.to_string()));
    }
    Ok(Some(row * (size + 1) + col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_format_basic() {
        let board = Board::new(9).unwrap();
        assert_eq!(format_move(Some(board.point(4, 4)), 9).unwrap(), "D4");
        assert_eq!(format_move(Some(board.point(1, 9)), 9).unwrap(), "J1");
        assert_eq!(format_move(None, 9).unwrap(), "pass");
    }

    #[test]
    fn test_parse_skips_i() {
        let h5 = parse_move("H5", 9).unwrap().unwrap();
        let j5 = parse_move("j5", 9).unwrap().unwrap();
        assert_eq!(j5 - h5, 1, "J should be one column after H (skipping I)");
        assert!(parse_move("I5", 9).is_err());
    }

    #[test]
    fn test_parse_pass_any_case() {
        assert_eq!(parse_move("pass", 9), Ok(None));
        assert_eq!(parse_move("PASS", 9), Ok(None));
        assert_eq!(parse_move("Pass", 13), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_move("", 9), Err(CoordError::Invalid("".into())));
        assert_eq!(parse_move("D", 9), Err(CoordError::Invalid("D".into())));
        assert_eq!(parse_move("D0", 9), Err(CoordError::OutOfBoard("D0".into())));
        assert_eq!(parse_move("K1", 9), Err(CoordError::OutOfBoard("K1".into())));
        assert_eq!(parse_move("A10", 9), Err(CoordError::OutOfBoard("A10".into())));
        assert_eq!(parse_move("A1", 26), Err(CoordError::SizeOutOfRange(26)));
        assert!(parse_move("4D", 9).is_err());
    }

    #[test]
    fn test_format_off_board() {
        assert!(format_move(Some(0), 9).is_err());
        assert!(format_move(Some(10), 9).is_err());
    }
}
