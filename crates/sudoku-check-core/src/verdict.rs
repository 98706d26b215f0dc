//! Verdicts: turning a load and a check into the final answer.
//!
//! The rules are fixed:
//! 1. Board outside the structural bounds -> INVALID
//! 2. Else a repeated digit in any row or column -> INVALID
//! 3. Else -> VALID

use std::fmt;

use serde::Serialize;

use crate::checker::Conflict;
use crate::loader::LoadError;

/// The two possible answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Invalid,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid"),
            Verdict::Invalid => write!(f, "invalid"),
        }
    }
}

/// Why a readable board is outside the allowed bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuralReason {
    /// Size header outside 1..=9
    SizeOutOfRange { size: i64 },

    /// A cell outside `0..=size`, at a 1-based file line and column
    CellOutOfRange {
        line: usize,
        column: usize,
        value: i64,
        size: usize,
    },
}

impl StructuralReason {
    /// Extract the structural reason from a non-fatal load error.
    pub fn from_load_error(err: &LoadError) -> Option<Self> {
        match *err {
            LoadError::SizeOutOfRange { size } => Some(Self::SizeOutOfRange { size }),
            LoadError::CellOutOfRange {
                line,
                column,
                value,
                size,
            } => Some(Self::CellOutOfRange {
                line,
                column,
                value,
                size,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for StructuralReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfRange { size } => write!(f, "board size {} is outside 1..=9", size),
            Self::CellOutOfRange {
                line,
                column,
                value,
                size,
            } => write!(
                f,
                "line {}, column {}: value {} is outside 0..={}",
                line, column, value, size
            ),
        }
    }
}

/// Result of a completed evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every row and column is free of repeats
    Valid { size: usize },

    /// Readable input describing an out-of-bounds board
    StructuralInvalid(StructuralReason),

    /// Fully loaded board with a repeated digit
    ConstraintInvalid { size: usize, conflict: Conflict },
}

impl Outcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            Outcome::Valid { .. } => Verdict::Valid,
            Outcome::StructuralInvalid(_) | Outcome::ConstraintInvalid { .. } => Verdict::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.verdict() == Verdict::Valid
    }

    /// Build the machine-readable summary of this outcome.
    pub fn report(&self) -> Report {
        match self {
            Outcome::Valid { size } => Report {
                verdict: Verdict::Valid,
                size: Some(*size),
                reason: None,
            },
            Outcome::StructuralInvalid(reason) => Report {
                verdict: Verdict::Invalid,
                size: None,
                reason: Some(reason.to_string()),
            },
            Outcome::ConstraintInvalid { size, conflict } => Report {
                verdict: Verdict::Invalid,
                size: Some(*size),
                reason: Some(conflict.to_string()),
            },
        }
    }
}

/// Summary emitted by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub verdict: Verdict,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Axis;

    fn conflict() -> Conflict {
        Conflict {
            axis: Axis::Column,
            index: 2,
            value: 3,
            first: 0,
            second: 4,
        }
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Valid.to_string(), "valid");
        assert_eq!(Verdict::Invalid.to_string(), "invalid");
    }

    #[test]
    fn test_outcome_verdicts() {
        assert_eq!(Outcome::Valid { size: 4 }.verdict(), Verdict::Valid);
        assert_eq!(
            Outcome::StructuralInvalid(StructuralReason::SizeOutOfRange { size: 0 }).verdict(),
            Verdict::Invalid
        );
        assert!(!Outcome::ConstraintInvalid {
            size: 5,
            conflict: conflict()
        }
        .is_valid());
    }

    #[test]
    fn test_structural_reason_only_from_soft_errors() {
        let soft = LoadError::SizeOutOfRange { size: 12 };
        assert_eq!(
            StructuralReason::from_load_error(&soft),
            Some(StructuralReason::SizeOutOfRange { size: 12 })
        );
        assert_eq!(
            StructuralReason::from_load_error(&LoadError::MissingRow { line: 3 }),
            None
        );
    }

    #[test]
    fn test_report_json() {
        let report = Outcome::ConstraintInvalid {
            size: 5,
            conflict: conflict(),
        }
        .report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verdict"], "invalid");
        assert_eq!(json["size"], 5);
        assert_eq!(json["reason"], "column 3 repeats 3 at positions 1 and 5");

        let json = serde_json::to_value(Outcome::Valid { size: 1 }.report()).unwrap();
        assert_eq!(json, serde_json::json!({ "verdict": "valid", "size": 1 }));
    }
}
