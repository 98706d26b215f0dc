//! # sudoku-check-core
//!
//! Row and column constraint checking for square Sudoku boards.
//!
//! Answers one question about a board file: does any row or column repeat a
//! digit? Boxes are not considered.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces the same verdict
//! 2. **Bounded reads**: Nothing past the last board row is consumed
//! 3. **Two failure classes**: Unreadable input is an error, an
//!    out-of-bounds board is an `invalid` verdict
//!
//! ## Example
//!
//! ```rust
//! use sudoku_check_core::{evaluate, LoadOptions, Verdict};
//!
//! let input = "3\n1,2,3\n2,3,1\n3,1,2\n";
//! let outcome = evaluate(input.as_bytes(), &LoadOptions::default())?;
//! assert_eq!(outcome.verdict(), Verdict::Valid);
//! # Ok::<(), sudoku_check_core::LoadError>(())
//! ```

pub mod checker;
pub mod grid;
pub mod loader;
pub mod verdict;

// Re-export main types at crate root
pub use checker::{find_conflict, is_valid, is_valid_rows, Axis, Conflict};
pub use grid::{Grid, GridError};
pub use loader::{load, LoadError, LoadOptions};
pub use verdict::{Outcome, Report, StructuralReason, Verdict};

use std::io::BufRead;

use tracing::debug;

/// Load a board from `reader` and decide its verdict.
///
/// This is the main entry point. Only fatal load errors come back as
/// `Err`; a board outside the structural bounds is
/// [`Outcome::StructuralInvalid`].
pub fn evaluate<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Outcome, LoadError> {
    let outcome = match load(reader, options) {
        Ok(grid) => match find_conflict(&grid) {
            None => Outcome::Valid { size: grid.size() },
            Some(conflict) => Outcome::ConstraintInvalid {
                size: grid.size(),
                conflict,
            },
        },
        Err(err) => match StructuralReason::from_load_error(&err) {
            Some(reason) => Outcome::StructuralInvalid(reason),
            None => return Err(err),
        },
    };

    debug!(verdict = %outcome.verdict(), "Evaluated board");
    Ok(outcome)
}
