//! Operation engine for the calculator service
//!
//! Validates raw calculation input and performs one of seven arithmetic
//! operations, producing a result with a rendered expression or a typed
//! failure.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod types;
pub mod validation;

pub use catalog::operation_catalog;
pub use engine::compute;
pub use error::{DomainError, Error, ErrorKind, Result, ValidationError};
pub use types::*;
pub use validation::{parse_operand, validate};
