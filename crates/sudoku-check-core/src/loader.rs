//! Board loading from delimited text.
//!
//! Input is a size header followed by `size` rows of delimited integers:
//!
//! ```text
//! 3
//! 1,2,3
//! 2,3,1
//! 3,1,2
//! ```
//!
//! Two kinds of failure come out of here. Fatal errors mean the input could
//! not be read as a board at all. Structural errors mean it was readable but
//! describes a board outside the allowed bounds, which is an `invalid`
//! verdict rather than a failure. See [`LoadError::is_fatal`].

use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, trace};

use crate::grid::Grid;

/// Errors that can occur while loading a board.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read board input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Board input is empty, expected a size on line 1")]
    MissingSize,

    #[error("Line 1 does not start with a board size: {text:?}")]
    MalformedSize { text: String },

    #[error("Missing board row on line {line}")]
    MissingRow { line: usize },

    #[error("Line {line} has {found} values, expected {expected}")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}, column {column}: {text:?} is not an integer")]
    MalformedCell {
        line: usize,
        column: usize,
        text: String,
    },

    #[error("Board size {size} is outside 1..=9")]
    SizeOutOfRange { size: i64 },

    #[error("Line {line}, column {column}: value {value} is outside 0..={size}")]
    CellOutOfRange {
        line: usize,
        column: usize,
        value: i64,
        size: usize,
    },
}

impl LoadError {
    /// True when the input could not be read as a board.
    ///
    /// Non-fatal errors describe a readable but out-of-bounds board and map
    /// to an `invalid` verdict.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            LoadError::SizeOutOfRange { .. } | LoadError::CellOutOfRange { .. }
        )
    }
}

/// Options controlling how board text is tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Separator between values on a line
    pub delimiter: char,

    /// Reject cell tokens that do not start with an integer instead of
    /// reading them as blanks
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            strict: false,
        }
    }
}

/// Load a board from `reader`.
///
/// Reads the size line and then exactly `size` rows; anything after the
/// last row is left unread. Stops at the first out-of-range value. Lines are
/// read as raw bytes, so invalid UTF-8 only affects the tokens it lands in.
pub fn load<R: BufRead>(mut reader: R, options: &LoadOptions) -> Result<Grid, LoadError> {
    let mut buf = Vec::new();

    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(LoadError::MissingSize);
    }
    let line = String::from_utf8_lossy(&buf);
    let header = strip_newline(&line);
    // Leading delimiters are skipped, so ",3" still has size 3.
    let first = header
        .split(options.delimiter)
        .find(|t| !t.is_empty())
        .unwrap_or_default();
    let size = parse_leading_int(first).ok_or_else(|| LoadError::MalformedSize {
        text: header.to_string(),
    })?;
    debug!(size, "Read board size");

    if !Grid::is_valid_size(size) {
        return Err(LoadError::SizeOutOfRange { size });
    }
    // In range per the check above.
    let n = size as usize;
    let mut grid = Grid::new(n).map_err(|_| LoadError::SizeOutOfRange { size })?;

    for row in 0..n {
        let line_no = row + 2;
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(LoadError::MissingRow { line: line_no });
        }

        let line = String::from_utf8_lossy(&buf);
        let mut tokens = strip_newline(&line).split(options.delimiter);
        for col in 0..n {
            let token = tokens.next().ok_or(LoadError::ShortRow {
                line: line_no,
                expected: n,
                found: col,
            })?;
            let value = parse_cell(token, options.strict).ok_or_else(|| {
                LoadError::MalformedCell {
                    line: line_no,
                    column: col + 1,
                    text: token.to_string(),
                }
            })?;
            let out_of_range = || LoadError::CellOutOfRange {
                line: line_no,
                column: col + 1,
                value,
                size: n,
            };
            let cell = u8::try_from(value).map_err(|_| out_of_range())?;
            grid.set(row, col, cell).map_err(|_| out_of_range())?;
        }
        trace!(line = line_no, cells = ?grid.row(row), "Read board row");
    }

    Ok(grid)
}

fn strip_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Cell value for `token`. Tokens without a leading integer are blanks
/// unless `strict` is set.
fn parse_cell(token: &str, strict: bool) -> Option<i64> {
    match parse_leading_int(token) {
        Some(v) => Some(v),
        None if strict => None,
        None => Some(0),
    }
}

/// Parse the integer prefix of `text`, C `atoi` style.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// ASCII digits. Trailing text is ignored. Returns `None` when there are no
/// digits at all. Saturates instead of overflowing.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0i64, |acc, &d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}
