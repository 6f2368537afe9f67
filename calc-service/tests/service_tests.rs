//! End-to-end tests through the service boundary

use calc_engine::{CalculationOutcome, Operation};
use calc_service::{CalculationRequest, CalculatorService, Config, Error};
use history_ledger::HistoryLedger;
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn service() -> CalculatorService {
    CalculatorService::new(Config::default()).unwrap()
}

#[test]
fn test_documented_examples() {
    let service = service();

    let add = service.outcome(&CalculationRequest::binary(10, 5, "add"));
    assert_eq!(
        serde_json::to_value(&add).unwrap(),
        json!({"result": 15.0, "expression": "10 + 5 = 15"})
    );

    let sqrt = service.outcome(&CalculationRequest::unary(16, "sqrt"));
    assert_eq!(
        sqrt,
        CalculationOutcome::Success {
            result: 4.0,
            expression: "√16 = 4".to_string()
        }
    );

    let pct = service.outcome(&CalculationRequest::binary(10, 20, "percentage"));
    assert_eq!(
        pct,
        CalculationOutcome::Success {
            result: 2.0,
            expression: "20% de 10 = 2".to_string()
        }
    );

    let div = service.outcome(&CalculationRequest::binary(2, 0, "divide"));
    assert!(!div.is_success());

    let history = service.history();
    assert_eq!(history.len(), 4);
    let last = history.last().unwrap();
    assert!(last.is_error);
    assert_eq!(last.operation, Operation::Divide);
    assert_eq!(last.result, None);
}

#[test]
fn test_negative_sqrt_recorded() {
    let service = service();
    let err = service
        .calculate(&CalculationRequest::unary(-9, "sqrt"))
        .unwrap_err();
    assert!(matches!(err, Error::Engine(ref e) if e.is_domain()));

    let entry = service.ledger().latest().unwrap();
    assert!(entry.is_error);
    assert_eq!(entry.operand1, -9.0);
}

#[test]
fn test_non_finite_power_is_failure() {
    let service = service();

    let undefined = service.outcome(&CalculationRequest::binary(-8.0, 0.5, "power"));
    assert_eq!(
        serde_json::to_value(&undefined).unwrap(),
        json!({"error": "calculation error: -8^0.5 has no real result"})
    );

    let overflow = service.outcome(&CalculationRequest::binary(10, 400, "power"));
    assert_eq!(
        serde_json::to_value(&overflow).unwrap(),
        json!({"error": "calculation error: 10^400 is out of range"})
    );

    let history = service.history();
    assert_eq!(history.len(), 2);
    for entry in &history {
        assert_eq!(entry.operation, Operation::Power);
        assert!(entry.is_error);
        assert_eq!(entry.result, None);
    }
}

#[test]
fn test_outcome_for_invalid_requests() {
    let service = service();

    match service.outcome(&CalculationRequest::binary(1, 2, "modulo")) {
        CalculationOutcome::Failure { error } => assert_eq!(error, "invalid operation: modulo"),
        other => panic!("unexpected outcome: {:?}", other),
    }

    match service.outcome(&CalculationRequest::unary(1, "add")) {
        CalculationOutcome::Failure { error } => {
            assert_eq!(error, "a second operand is required for add")
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert!(service.history().is_empty());
}

#[test]
fn test_request_decoded_from_json_body() {
    let service = service();
    let body = r#"{"num1": "2", "num2": 10, "operation": "power"}"#;
    let request: CalculationRequest = serde_json::from_str(body).unwrap();

    let calc = service.calculate(&request).unwrap();
    assert_eq!(calc.expression, "2^10 = 1024");
}

#[test]
fn test_history_retains_last_hundred() {
    let service = service();
    for n in 0..105 {
        service
            .calculate(&CalculationRequest::binary(n, 1, "add"))
            .unwrap();
    }

    let history = service.history();
    assert_eq!(history.len(), 100);
    assert_eq!(history[0].operand1, 5.0);
    assert_eq!(history[99].operand1, 104.0);
    assert_eq!(service.metrics().history_entries.get(), 100);

    service.clear_history();
    assert!(service.history().is_empty());
}

#[test]
fn test_services_share_injected_ledger() {
    let ledger = Arc::new(HistoryLedger::with_capacity(20));
    let a = CalculatorService::with_ledger(Config::default(), ledger.clone()).unwrap();
    let b = CalculatorService::with_ledger(Config::default(), ledger.clone()).unwrap();

    a.calculate(&CalculationRequest::binary(1, 1, "add")).unwrap();
    b.calculate(&CalculationRequest::binary(2, 2, "multiply"))
        .unwrap();

    assert_eq!(ledger.len(), 2);
    assert_eq!(a.history(), b.history());

    b.clear_history();
    assert!(a.history().is_empty());
}

#[test]
fn test_concurrent_requests() {
    let service = Arc::new(service());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let service = service.clone();
            thread::spawn(move || {
                for n in 0..50 {
                    let _ = service.calculate(&CalculationRequest::binary(t * 100 + n, n % 3, "divide"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let history = service.history();
    assert_eq!(history.len(), 100);
    assert!(history
        .iter()
        .all(|e| e.is_error == (e.operand2 == Some(0.0))));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every request that validates adds exactly one history entry
    #[test]
    fn prop_each_valid_request_recorded(
        a in -1.0e3f64..1.0e3,
        b in -1.0e3f64..1.0e3,
        idx in 0usize..7,
    ) {
        let service = service();
        let op = Operation::ALL[idx];
        let request = if op.is_binary() {
            CalculationRequest::binary(a, b, op.name())
        } else {
            CalculationRequest::unary(a, op.name())
        };

        let res = service.calculate(&request);
        let history = service.history();
        prop_assert_eq!(history.len(), 1);
        prop_assert_eq!(history[0].is_error, res.is_err());
        prop_assert_eq!(history[0].operation, op);
    }
}
