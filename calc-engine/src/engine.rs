//! Compute step
//!
//! Dispatches a validated operation over its operands. Domain constraints
//! (zero divisor, negative radicand, non-finite powers) are re-checked here
//! regardless of what validation already did, so the function is safe to
//! call directly.

use crate::{
    error::{DomainError, Result, ValidationError},
    types::{Calculation, Operation, OperationRequest},
};
use std::fmt;

/// Magnitudes at or above this render with an exponent
const EXP_UPPER: f64 = 1e16;

/// Non-zero magnitudes below this render with an exponent
const EXP_LOWER: f64 = 1e-4;

/// Perform one operation
///
/// Unary operations ignore `operand2`. Binary operations fail with
/// [`ValidationError::MissingSecondOperand`] when it is absent.
pub fn compute(operand1: f64, operand2: Option<f64>, operation: Operation) -> Result<Calculation> {
    let a = operand1;
    let second = || operand2.ok_or(ValidationError::MissingSecondOperand(operation));

    let calc = match operation {
        Operation::Add => {
            let b = second()?;
            let r = a + b;
            Calculation::new(r, format!("{} + {} = {}", Num(a), Num(b), Num(r)))
        }
        Operation::Subtract => {
            let b = second()?;
            let r = a - b;
            Calculation::new(r, format!("{} - {} = {}", Num(a), Num(b), Num(r)))
        }
        Operation::Multiply => {
            let b = second()?;
            let r = a * b;
            Calculation::new(r, format!("{} × {} = {}", Num(a), Num(b), Num(r)))
        }
        Operation::Divide => {
            let b = second()?;
            if b == 0.0 {
                return Err(DomainError::DivisionByZero.into());
            }
            let r = a / b;
            Calculation::new(r, format!("{} ÷ {} = {}", Num(a), Num(b), Num(r)))
        }
        Operation::Power => {
            let b = second()?;
            let r = a.powf(b);
            if r.is_nan() {
                return Err(DomainError::PowerUndefined { base: a, exponent: b }.into());
            }
            if r.is_infinite() {
                return Err(DomainError::PowerOverflow { base: a, exponent: b }.into());
            }
            Calculation::new(r, format!("{}^{} = {}", Num(a), Num(b), Num(r)))
        }
        Operation::Sqrt => {
            if a < 0.0 {
                return Err(DomainError::NegativeSquareRoot(a).into());
            }
            let r = a.sqrt();
            Calculation::new(r, format!("√{} = {}", Num(a), Num(r)))
        }
        Operation::Percentage => {
            let b = second()?;
            let r = (a * b) / 100.0;
            Calculation::new(r, format!("{}% de {} = {}", Num(b), Num(a), Num(r)))
        }
    };

    tracing::trace!(%operation, expression = %calc.expression, "computed");
    Ok(calc)
}

/// Expression rendering for one number
///
/// Shortest round-trip form, switching to exponent notation for very large
/// or very small magnitudes (`1e300`, `1.5e-7`).
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.abs();
        if self.0.is_finite() && (abs >= EXP_UPPER || (abs != 0.0 && abs < EXP_LOWER)) {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Calculation {
    /// Create a calculation result
    pub fn new(result: f64, expression: impl Into<String>) -> Self {
        Self {
            result,
            expression: expression.into(),
        }
    }
}

impl OperationRequest {
    /// Run the compute step on this request
    pub fn compute(&self) -> Result<Calculation> {
        compute(self.operand1, self.operand2, self.operation)
    }
}
