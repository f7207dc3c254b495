//! Canonical operation names for response envelopes.

use serde::Serialize;

/// The seven supported operations.
///
/// `name()` returns the exact string embedded in the `operation`
/// field of every success envelope; clients key display logic on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Power,
    SquareRoot,
    Percentage,
}

impl Operation {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Power => "power",
            Operation::SquareRoot => "square_root",
            Operation::Percentage => "percentage",
        }
    }
}

impl AsRef<str> for Operation {
    fn as_ref(&self) -> &str {
        self.name()
    }
}
