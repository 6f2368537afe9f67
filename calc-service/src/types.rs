//! Request and status types exchanged with the request-handling layer

use calc_engine::Operation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw calculation request as decoded from a request body
///
/// Operands stay loosely typed; the engine's validation step decides what
/// parses as a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// First operand
    #[serde(default)]
    pub num1: Option<Value>,

    /// Second operand, not needed for unary operations
    #[serde(default)]
    pub num2: Option<Value>,

    /// Operation name
    #[serde(default)]
    pub operation: Option<String>,
}

impl CalculationRequest {
    /// Request with two operands
    pub fn binary(num1: impl Into<Value>, num2: impl Into<Value>, operation: impl Into<String>) -> Self {
        Self {
            num1: Some(num1.into()),
            num2: Some(num2.into()),
            operation: Some(operation.into()),
        }
    }

    /// Request with a single operand
    pub fn unary(num1: impl Into<Value>, operation: impl Into<String>) -> Self {
        Self {
            num1: Some(num1.into()),
            num2: None,
            operation: Some(operation.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `healthy` while the service is constructed
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,
}

/// Service description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,

    /// Short description
    pub description: String,

    /// Service version
    pub version: String,

    /// Retention limit of the history ledger
    pub history_capacity: usize,

    /// Operations accepted by `calculate`
    pub supported_operations: Vec<Operation>,
}
