//! The square board being checked.
//!
//! A `Grid` owns one contiguous row-major buffer. Every constructor enforces
//! the board invariants, so the checker can index without re-validating.

use std::fmt;

use thiserror::Error;

/// Errors from building or mutating a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Board size {0} is outside 1..=9")]
    SizeOutOfRange(usize),

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cell ({row}, {col}) holds {value}, expected 0..={size}")]
    CellOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        size: u8,
    },

    #[error("Cell ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: u8 },
}

/// A `size x size` board. Cell value 0 is a blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<u8>,
}

impl Grid {
    pub const MIN_SIZE: u8 = 1;
    pub const MAX_SIZE: u8 = 9;

    /// Create an all-blank board.
    pub fn new(size: usize) -> Result<Self, GridError> {
        let size = Self::checked_size(size)?;
        let n = usize::from(size);
        Ok(Self {
            size,
            cells: vec![0; n * n],
        })
    }

    /// Build a board from rows, checking shape and cell range.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let mut grid = Self::new(rows.len())?;
        let n = rows.len();

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: n,
                    found: row.len(),
                });
            }
            for (c, value) in row.into_iter().enumerate() {
                grid.set(r, c, value)?;
            }
        }

        Ok(grid)
    }

    fn checked_size(size: usize) -> Result<u8, GridError> {
        match u8::try_from(size) {
            Ok(s) if (Self::MIN_SIZE..=Self::MAX_SIZE).contains(&s) => Ok(s),
            _ => Err(GridError::SizeOutOfRange(size)),
        }
    }

    /// Whether `size` is an allowed board dimension.
    pub fn is_valid_size(size: i64) -> bool {
        (i64::from(Self::MIN_SIZE)..=i64::from(Self::MAX_SIZE)).contains(&size)
    }

    pub fn size(&self) -> usize {
        usize::from(self.size)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        let n = self.size();
        if row >= n || col >= n {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * n + col)
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).ok().map(|i| self.cells[i])
    }

    /// Store `value` at `(row, col)`. Values above the board size are rejected.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        if value > self.size {
            return Err(GridError::CellOutOfRange {
                row,
                col,
                value,
                size: self.size,
            });
        }
        self.cells[i] = value;
        Ok(())
    }

    /// Cells of row `r`. Callers pass `r < size`.
    pub(crate) fn row(&self, r: usize) -> &[u8] {
        let n = self.size();
        &self.cells[r * n..(r + 1) * n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.size())
    }

    /// Cells of column `c`, top to bottom.
    pub fn column(&self, c: usize) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().skip(c).step_by(self.size()).copied()
    }
}

/// Renders the board in the same format the loader reads.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(f, "{}", line.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert!(grid.rows().all(|row| row.iter().all(|&v| v == 0)));
    }

    #[test]
    fn test_size_bounds() {
        assert_eq!(Grid::new(0), Err(GridError::SizeOutOfRange(0)));
        assert_eq!(Grid::new(10), Err(GridError::SizeOutOfRange(10)));
        assert!(Grid::new(1).is_ok());
        assert!(Grid::new(9).is_ok());
        assert!(!Grid::is_valid_size(-3));
        assert!(Grid::is_valid_size(9));
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![2]]);
        assert!(matches!(
            result,
            Err(GridError::RaggedRow { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_set_rejects_value_above_size() {
        let mut grid = Grid::new(3).unwrap();
        assert!(matches!(
            grid.set(0, 0, 4),
            Err(GridError::CellOutOfRange { value: 4, .. })
        ));
        assert!(matches!(
            grid.set(3, 0, 1),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rows_and_columns() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]).unwrap();
        assert_eq!(grid.row(1), &[2, 3, 1]);
        assert_eq!(grid.column(2).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(grid.get(2, 0), Some(3));
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_display_matches_input_format() {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 2]]).unwrap();
        assert_eq!(grid.to_string(), "2\n1,0\n0,2\n");
    }
}
