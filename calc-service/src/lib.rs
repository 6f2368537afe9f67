//! Calculator service
//!
//! Boundary object between a request-handling layer and the calculator
//! core.
//!
//! # Flow
//!
//! 1. **Validation**: raw operands and operation name are checked and
//!    normalized by the operation engine
//! 2. **Compute**: the validated operation runs, yielding a result or a
//!    domain failure
//! 3. **Record**: the attempt is appended to the shared history ledger
//! 4. **Respond**: the result, or a generic error, goes back to the caller
//!
//! The history ledger is constructed by the caller (or by
//! [`CalculatorService::new`]) and shared through an `Arc`; nothing here is
//! process-global.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod service;
pub mod telemetry;
pub mod types;

// Re-exports
pub use config::{Config, LoggingConfig};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use service::CalculatorService;
pub use telemetry::init_tracing;
pub use types::*;
