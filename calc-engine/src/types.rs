//! Core types for the operation engine

use crate::error::{Error, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported arithmetic operation
///
/// Declaration order is the canonical catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// a + b
    Add,
    /// a - b
    Subtract,
    /// a × b
    Multiply,
    /// a ÷ b
    Divide,
    /// a ^ b
    Power,
    /// √a
    Sqrt,
    /// b% of a
    Percentage,
}

/// Number of operands an operation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand
    Unary,
    /// Two operands
    Binary,
}

impl Operation {
    /// All operations, in catalog order
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Percentage,
    ];

    /// Wire name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Percentage => "percentage",
        }
    }

    /// Operand count
    pub fn arity(&self) -> Arity {
        match self {
            Operation::Sqrt => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// True if the operation needs a second operand
    pub fn is_binary(&self) -> bool {
        self.arity() == Arity::Binary
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Add => "Adds two numbers",
            Operation::Subtract => "Subtracts two numbers",
            Operation::Multiply => "Multiplies two numbers",
            Operation::Divide => "Divides two numbers",
            Operation::Power => "Raises a base to an exponent (base^exponent)",
            Operation::Sqrt => "Computes the square root",
            Operation::Percentage => "Computes a percentage of a number",
        }
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| ValidationError::InvalidOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Validated, normalized calculation input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    /// First operand
    pub operand1: f64,

    /// Second operand, always `None` for unary operations
    pub operand2: Option<f64>,

    /// Operation to perform
    pub operation: Operation,
}

/// Successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Numeric result
    pub result: f64,

    /// Human-readable rendering, e.g. `10 + 5 = 15`
    pub expression: String,
}

/// Generic outcome shape handed back to callers
///
/// Serializes as either `{"result": .., "expression": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculationOutcome {
    /// Calculation succeeded
    Success {
        /// Numeric result
        result: f64,
        /// Rendered expression
        expression: String,
    },
    /// Calculation failed
    Failure {
        /// Error message
        error: String,
    },
}

impl CalculationOutcome {
    /// Build a failure outcome from any displayable error
    pub fn failure(error: impl fmt::Display) -> Self {
        CalculationOutcome::Failure {
            error: error.to_string(),
        }
    }

    /// True for the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, CalculationOutcome::Success { .. })
    }
}

impl From<Calculation> for CalculationOutcome {
    fn from(calc: Calculation) -> Self {
        CalculationOutcome::Success {
            result: calc.result,
            expression: calc.expression,
        }
    }
}

impl From<std::result::Result<Calculation, Error>> for CalculationOutcome {
    fn from(res: std::result::Result<Calculation, Error>) -> Self {
        match res {
            Ok(calc) => calc.into(),
            Err(e) => CalculationOutcome::failure(e),
        }
    }
}
