//! Row and column uniqueness checking.
//!
//! A board passes when no row and no column repeats a nonzero digit.
//! Blanks (0) are always allowed. Boxes are not checked.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::grid::Grid;

/// Which kind of line a conflict was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// A digit repeated within one row or column. All indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub axis: Axis,

    /// Row or column number
    pub index: usize,

    /// The repeated digit
    pub value: u8,

    /// Position of the first occurrence along the line
    pub first: usize,

    /// Position of the repeat along the line
    pub second: usize,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} repeats {} at positions {} and {}",
            self.axis,
            self.index + 1,
            self.value,
            self.first + 1,
            self.second + 1
        )
    }
}

/// Digits seen so far in the current line, with where each was seen.
struct Markers {
    seen: [Option<usize>; Grid::MAX_SIZE as usize],
}

impl Markers {
    fn new() -> Self {
        Self {
            seen: [None; Grid::MAX_SIZE as usize],
        }
    }

    fn clear(&mut self) {
        self.seen = [None; Grid::MAX_SIZE as usize];
    }

    /// Scan one line. Returns `(value, first, second)` for the first repeat.
    fn scan(&mut self, line: impl Iterator<Item = u8>) -> Option<(u8, usize, usize)> {
        self.clear();
        for (pos, value) in line.enumerate() {
            if value == 0 {
                continue;
            }
            let slot = &mut self.seen[usize::from(value - 1)];
            if let Some(first) = *slot {
                return Some((value, first, pos));
            }
            *slot = Some(pos);
        }
        None
    }
}

/// Find the first repeated digit, checking every row before any column.
pub fn find_conflict(grid: &Grid) -> Option<Conflict> {
    let mut markers = Markers::new();
    let n = grid.size();

    let lines = (0..n)
        .map(|r| (Axis::Row, r))
        .chain((0..n).map(|c| (Axis::Column, c)));

    for (axis, index) in lines {
        let repeat = match axis {
            Axis::Row => markers.scan(grid.row(index).iter().copied()),
            Axis::Column => markers.scan(grid.column(index)),
        };
        if let Some((value, first, second)) = repeat {
            let conflict = Conflict {
                axis,
                index,
                value,
                first,
                second,
            };
            debug!(%conflict, "Board has a repeated digit");
            return Some(conflict);
        }
    }

    None
}

/// True when no row or column of `grid` repeats a nonzero digit.
pub fn is_valid(grid: &Grid) -> bool {
    find_conflict(grid).is_none()
}

/// Check raw rows without a prebuilt [`Grid`].
///
/// Returns `false` for anything that is not a well-formed board: a size
/// outside 1..=9, a non-square shape, or a cell outside `0..=size`.
pub fn is_valid_rows<R: AsRef<[i64]>>(rows: &[R], size: i64) -> bool {
    if !Grid::is_valid_size(size) {
        return false;
    }
    let Ok(n) = usize::try_from(size) else {
        return false;
    };
    if rows.len() != n {
        return false;
    }

    let mut cells = Vec::with_capacity(n);
    for row in rows {
        let row = row.as_ref();
        if row.len() != n {
            return false;
        }
        let converted: Option<Vec<u8>> = row.iter().map(|&v| u8::try_from(v).ok()).collect();
        match converted {
            Some(r) => cells.push(r),
            None => return false,
        }
    }

    match Grid::from_rows(cells) {
        Ok(grid) => is_valid(&grid),
        Err(_) => false,
    }
}
