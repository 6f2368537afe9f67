//! History entry type
//!
//! Entries are created once per calculation attempt and never modified.
//! Serialized field names (`num1`, `num2`, `is_error`, ...) match what
//! existing history consumers read.

use calc_engine::{Calculation, Operation, OperationRequest};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Record of one calculation attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Entry ID (UUIDv7, time-ordered)
    pub id: Uuid,

    /// First operand
    #[serde(rename = "num1")]
    pub operand1: f64,

    /// Second operand (absent for unary operations)
    #[serde(rename = "num2")]
    pub operand2: Option<f64>,

    /// Operation attempted
    pub operation: Operation,

    /// Result (absent on error)
    pub result: Option<f64>,

    /// Rendered expression, or the error text for failed attempts
    pub expression: String,

    /// True for failed attempts
    pub is_error: bool,

    /// Wall-clock time of the attempt, truncated to whole seconds
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry for a successful calculation
    pub fn success(request: &OperationRequest, calc: &Calculation) -> Self {
        Self::new(request, Some(calc.result), calc.expression.clone(), false)
    }

    /// Entry for a failed calculation; the error text stands in for the expression
    pub fn failure(request: &OperationRequest, error: impl fmt::Display) -> Self {
        Self::new(request, None, error.to_string(), true)
    }

    /// Entry for either outcome of a compute step
    pub fn from_outcome(
        request: &OperationRequest,
        outcome: &calc_engine::Result<Calculation>,
    ) -> Self {
        match outcome {
            Ok(calc) => Self::success(request, calc),
            Err(e) => Self::failure(request, e),
        }
    }

    fn new(request: &OperationRequest, result: Option<f64>, expression: String, is_error: bool) -> Self {
        Self {
            id: Uuid::now_v7(),
            operand1: request.operand1,
            operand2: request.operand2,
            operation: request.operation,
            result,
            expression,
            is_error,
            timestamp: Utc::now().trunc_subsecs(0),
        }
    }
}
