//! Error types for the operation engine
//!
//! Validation failures come from malformed input and are raised before any
//! arithmetic happens. Domain failures are raised by the compute step when
//! well-formed operands fall outside an operation's domain. Both surface as
//! [`Error`], but stay distinguishable through [`Error::kind`].

use crate::types::Operation;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input rejected before computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Operation name is not one of the supported operations
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// First operand did not parse as a number
    #[error("the first operand must be a valid number")]
    InvalidFirstOperand,

    /// Binary operation called without a second operand
    #[error("a second operand is required for {0}")]
    MissingSecondOperand(Operation),

    /// Second operand did not parse as a number
    #[error("the second operand must be a valid number")]
    InvalidSecondOperand,
}

/// Well-formed operands outside the operation's domain
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Divisor is zero
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// Square root of a negative number
    #[error("cannot take the square root of a negative number ({0})")]
    NegativeSquareRoot(f64),

    /// Power with no real result, e.g. a negative base with a fractional exponent
    #[error("{base}^{exponent} has no real result")]
    PowerUndefined {
        /// Base
        base: f64,
        /// Exponent
        exponent: f64,
    },

    /// Power whose result does not fit in a float
    #[error("{base}^{exponent} is out of range")]
    PowerOverflow {
        /// Base
        base: f64,
        /// Exponent
        exponent: f64,
    },
}

/// Engine errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Domain failure raised by the compute step
    #[error("calculation error: {0}")]
    Domain(#[from] DomainError),
}

/// Failure taxonomy shared by validation and compute failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown operation name
    InvalidOperation,
    /// Operand present but not numeric
    InvalidOperand,
    /// Required operand absent
    MissingOperand,
    /// Divisor is zero
    DivisionByZero,
    /// Negative radicand
    NegativeSquareRoot,
    /// Power without a real result
    PowerDomain,
    /// Power result out of range
    PowerOverflow,
}

impl ErrorKind {
    /// Stable label, used for metrics and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidOperation => "invalid_operation",
            ErrorKind::InvalidOperand => "invalid_operand",
            ErrorKind::MissingOperand => "missing_operand",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::NegativeSquareRoot => "negative_sqrt",
            ErrorKind::PowerDomain => "power_domain",
            ErrorKind::PowerOverflow => "power_overflow",
        }
    }
}

impl ValidationError {
    /// Failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            ValidationError::InvalidFirstOperand | ValidationError::InvalidSecondOperand => {
                ErrorKind::InvalidOperand
            }
            ValidationError::MissingSecondOperand(_) => ErrorKind::MissingOperand,
        }
    }
}

impl DomainError {
    /// Failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::DivisionByZero => ErrorKind::DivisionByZero,
            DomainError::NegativeSquareRoot(_) => ErrorKind::NegativeSquareRoot,
            DomainError::PowerUndefined { .. } => ErrorKind::PowerDomain,
            DomainError::PowerOverflow { .. } => ErrorKind::PowerOverflow,
        }
    }
}

impl Error {
    /// Failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(e) => e.kind(),
            Error::Domain(e) => e.kind(),
        }
    }

    /// True for failures raised by the compute step's domain checks
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}
