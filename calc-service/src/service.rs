//! Calculator service
//!
//! The object a request-handling layer holds on to. Each calculation runs
//! validate, then compute, then records the attempt in the shared history
//! ledger before returning.
//!
//! # Example
//!
//! ```
//! use calc_service::{CalculationRequest, CalculatorService, Config};
//!
//! let service = CalculatorService::new(Config::default()).unwrap();
//! let calc = service
//!     .calculate(&CalculationRequest::binary(10, 5, "add"))
//!     .unwrap();
//! assert_eq!(calc.expression, "10 + 5 = 15");
//! assert_eq!(service.history().len(), 1);
//! ```

use crate::{
    config::Config,
    metrics::Metrics,
    types::{CalculationRequest, HealthStatus, ServiceInfo},
    Error, Result,
};
use calc_engine::{
    operation_catalog, validate, Calculation, CalculationOutcome, Operation, OperationRequest,
};
use history_ledger::{HistoryEntry, HistoryLedger};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Calculator service
pub struct CalculatorService {
    /// Shared history ledger
    ledger: Arc<HistoryLedger>,

    /// Metrics collector
    metrics: Metrics,

    /// Configuration
    config: Config,
}

impl CalculatorService {
    /// Create a service with its own history ledger
    pub fn new(config: Config) -> Result<Self> {
        config.history.validate()?;
        let ledger = Arc::new(HistoryLedger::new(&config.history));
        Self::with_ledger(config, ledger)
    }

    /// Create a service around an existing history ledger
    pub fn with_ledger(config: Config, ledger: Arc<HistoryLedger>) -> Result<Self> {
        let metrics = Metrics::new()?;
        metrics.update_history_size(ledger.len());

        tracing::info!(
            service = %config.service_name,
            version = %config.service_version,
            history_capacity = ledger.capacity(),
            "Calculator service ready"
        );

        Ok(Self {
            ledger,
            metrics,
            config,
        })
    }

    /// Handle a raw calculation request
    ///
    /// Only attempts that reach the compute step are written to the history,
    /// successful or not; domain failures (division by zero, negative square
    /// root, non-finite powers) become error entries. Requests missing `num1`
    /// or `operation`, and requests failing validation (unknown operation,
    /// unparseable or missing operand), are rejected without a history entry
    /// since they carry no normalized operands to record. Validation failures
    /// are still logged and counted in `calculation_failures_total`.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<Calculation> {
        let (num1, operation) = match (&request.num1, &request.operation) {
            (Some(num1), Some(operation)) => (num1, operation),
            _ => {
                return Err(Error::Request(
                    "fields 'num1' and 'operation' are required".to_string(),
                ))
            }
        };

        let validated = match validate(num1, request.num2.as_ref(), operation) {
            Ok(validated) => validated,
            Err(e) => {
                tracing::debug!(operation = %operation, error = %e, "Rejected calculation request");
                self.metrics
                    .record_failure(operation.parse::<Operation>().ok(), e.kind());
                return Err(e.into());
            }
        };

        self.evaluate(validated)
    }

    /// Compute an already validated request and record it
    pub fn evaluate(&self, mut request: OperationRequest) -> Result<Calculation> {
        if !request.operation.is_binary() {
            request.operand2 = None;
        }

        let outcome = request.compute();
        let retained = self
            .ledger
            .append(HistoryEntry::from_outcome(&request, &outcome));
        self.metrics.update_history_size(retained);

        match outcome {
            Ok(calc) => {
                tracing::debug!(operation = %request.operation, expression = %calc.expression, "Calculation succeeded");
                self.metrics.record_success(request.operation);
                Ok(calc)
            }
            Err(e) => {
                tracing::warn!(operation = %request.operation, error = %e, "Calculation failed");
                self.metrics.record_failure(Some(request.operation), e.kind());
                Err(e.into())
            }
        }
    }

    /// Handle a request and fold the result into the generic outcome shape
    pub fn outcome(&self, request: &CalculationRequest) -> CalculationOutcome {
        match self.calculate(request) {
            Ok(calc) => calc.into(),
            Err(e) => CalculationOutcome::failure(e),
        }
    }

    /// Snapshot of the calculation history
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.ledger.list()
    }

    /// Clear the calculation history
    pub fn clear_history(&self) {
        self.ledger.clear();
        self.metrics.record_clear();
    }

    /// Supported operations and their descriptions
    pub fn operations(&self) -> BTreeMap<Operation, &'static str> {
        operation_catalog()
    }

    /// Health check
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            service: self.config.service_name.clone(),
            version: self.config.service_version.clone(),
        }
    }

    /// Service description
    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            name: self.config.service_name.clone(),
            description: "Arithmetic calculator with bounded in-memory history".to_string(),
            version: self.config.service_version.clone(),
            history_capacity: self.ledger.capacity(),
            supported_operations: Operation::ALL.to_vec(),
        }
    }

    /// Shared history ledger
    pub fn ledger(&self) -> &Arc<HistoryLedger> {
        &self.ledger
    }

    /// Metrics collector
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Display for CalculatorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CalculatorService(operations={}, history_items={})",
            Operation::ALL.len(),
            self.ledger.len()
        )
    }
}

impl fmt::Debug for CalculatorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorService")
            .field("ledger", &self.ledger)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_engine::{DomainError, ErrorKind, ValidationError};

    fn service() -> CalculatorService {
        CalculatorService::new(Config::default()).unwrap()
    }

    #[test]
    fn test_calculate_records_success() {
        let service = service();
        let calc = service
            .calculate(&CalculationRequest::binary(10, 5, "add"))
            .unwrap();
        assert_eq!(calc.result, 15.0);

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert!(!history[0].is_error);
        assert_eq!(history[0].expression, "10 + 5 = 15");
    }

    #[test]
    fn test_divide_by_zero_recorded_as_error() {
        let service = service();
        let err = service
            .calculate(&CalculationRequest::binary(2, 0, "divide"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Engine(calc_engine::Error::Domain(DomainError::DivisionByZero))
        ));

        let history = service.history();
        assert_eq!(history.len(), 1);
        assert!(history[0].is_error);
        assert_eq!(history[0].result, None);
        assert_eq!(history[0].expression, err.to_string());
    }

    #[test]
    fn test_power_failures_recorded_as_errors() {
        let service = service();
        for (base, exponent) in [(-8.0, 0.5), (10.0, 400.0)] {
            let outcome = service.outcome(&CalculationRequest::binary(base, exponent, "power"));
            assert!(!outcome.is_success());
            let json = serde_json::to_value(&outcome).unwrap();
            assert!(json.get("result").is_none());
            assert!(json["error"].is_string());
        }

        let history = service.history();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|e| e.is_error && e.result.is_none()));
        assert_eq!(
            service
                .metrics()
                .failures_total
                .with_label_values(&[ErrorKind::PowerDomain.as_str()])
                .get(),
            1
        );
        assert_eq!(
            service
                .metrics()
                .failures_total
                .with_label_values(&[ErrorKind::PowerOverflow.as_str()])
                .get(),
            1
        );
    }

    #[test]
    fn test_history_gauge_tracks_retained_entries() {
        let ledger = Arc::new(HistoryLedger::with_capacity(3));
        let service = CalculatorService::with_ledger(Config::default(), ledger).unwrap();
        for n in 0..5 {
            service
                .calculate(&CalculationRequest::binary(n, 1, "add"))
                .unwrap();
            assert_eq!(
                service.metrics().history_entries.get(),
                (n + 1).min(3) as i64
            );
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        let service = service();
        let request = CalculationRequest {
            num1: None,
            num2: None,
            operation: Some("add".to_string()),
        };
        let err = service.calculate(&request).unwrap_err();
        assert!(matches!(err, Error::Request(_)));
        assert!(err.is_client_error());
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_validation_failure_not_recorded() {
        let service = service();
        let err = service
            .calculate(&CalculationRequest::binary("abc", 1, "add"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Engine(calc_engine::Error::Validation(
                ValidationError::InvalidFirstOperand
            ))
        ));
        assert!(service.history().is_empty());
        assert_eq!(
            service
                .metrics()
                .failures_total
                .with_label_values(&[ErrorKind::InvalidOperand.as_str()])
                .get(),
            1
        );
    }

    #[test]
    fn test_evaluate_drops_operand2_for_sqrt() {
        let service = service();
        let request = OperationRequest {
            operand1: 25.0,
            operand2: Some(3.0),
            operation: Operation::Sqrt,
        };
        let calc = service.evaluate(request).unwrap();
        assert_eq!(calc.expression, "√25 = 5");
        assert_eq!(service.history()[0].operand2, None);
    }

    #[test]
    fn test_clear_history() {
        let service = service();
        service
            .calculate(&CalculationRequest::unary(16, "sqrt"))
            .unwrap();
        service.clear_history();

        assert!(service.history().is_empty());
        assert_eq!(service.metrics().history_clears.get(), 1);
        assert_eq!(service.metrics().history_entries.get(), 0);
    }

    #[test]
    fn test_display() {
        let service = service();
        service
            .calculate(&CalculationRequest::binary(1, 2, "multiply"))
            .unwrap();
        assert_eq!(
            service.to_string(),
            "CalculatorService(operations=7, history_items=1)"
        );
    }

    #[test]
    fn test_health_and_info() {
        let service = service();
        let health = service.health();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "Calculator Web API");

        let info = service.info();
        assert_eq!(info.supported_operations.len(), 7);
        assert_eq!(info.history_capacity, 100);
    }
}
