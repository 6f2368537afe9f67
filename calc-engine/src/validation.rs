//! Raw input validation
//!
//! Operands arrive as loosely typed JSON values from the request layer.
//! Validation turns them into an [`OperationRequest`] or rejects them with a
//! [`ValidationError`]; no arithmetic is performed here.

use crate::{
    error::ValidationError,
    types::{Operation, OperationRequest},
};
use serde_json::Value;

/// Validate raw input and normalize it for the compute step
///
/// Checks run in order: operation name, first operand, then (for binary
/// operations) the second operand. A JSON `null` second operand counts as
/// absent. For unary operations the second operand is dropped unseen.
pub fn validate(
    operand1: &Value,
    operand2: Option<&Value>,
    operation: &str,
) -> Result<OperationRequest, ValidationError> {
    let operation: Operation = operation.parse()?;

    let operand1 = parse_operand(operand1).ok_or(ValidationError::InvalidFirstOperand)?;

    let operand2 = if operation.is_binary() {
        let raw = operand2
            .filter(|v| !v.is_null())
            .ok_or(ValidationError::MissingSecondOperand(operation))?;
        Some(parse_operand(raw).ok_or(ValidationError::InvalidSecondOperand)?)
    } else {
        None
    };

    Ok(OperationRequest {
        operand1,
        operand2,
        operation,
    })
}

/// Coerce a raw JSON value into a float
///
/// Numbers are taken as-is, strings are trimmed and parsed (exponents,
/// `inf` and `nan` included), booleans become 1 or 0. Everything else is
/// rejected.
pub fn parse_operand(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
