//! Metrics collection for observability
//!
//! # Metrics
//!
//! - `calculations_total{operation,outcome}` - Calculation attempts by outcome
//! - `calculation_failures_total{kind}` - Failures by error kind
//! - `history_entries` - Entries currently retained
//! - `history_clears_total` - Explicit history clears

use calc_engine::{ErrorKind, Operation};
use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts, Registry};
use std::sync::Arc;

/// Metrics collector
///
/// Collectors live on a private registry so several services can coexist in
/// one process.
#[derive(Clone)]
pub struct Metrics {
    /// Calculation attempts
    pub calculations_total: IntCounterVec,

    /// Failures by kind
    pub failures_total: IntCounterVec,

    /// Retained history entries
    pub history_entries: IntGauge,

    /// History clears
    pub history_clears: IntCounter,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let calculations_total = IntCounterVec::new(
            Opts::new("calculations_total", "Calculation attempts by operation and outcome"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(calculations_total.clone()))?;

        let failures_total = IntCounterVec::new(
            Opts::new("calculation_failures_total", "Failed calculations by error kind"),
            &["kind"],
        )?;
        registry.register(Box::new(failures_total.clone()))?;

        let history_entries = IntGauge::new("history_entries", "Entries currently retained")?;
        registry.register(Box::new(history_entries.clone()))?;

        let history_clears =
            IntCounter::new("history_clears_total", "Number of explicit history clears")?;
        registry.register(Box::new(history_clears.clone()))?;

        Ok(Self {
            calculations_total,
            failures_total,
            history_entries,
            history_clears,
            registry,
        })
    }

    /// Record a successful calculation
    pub fn record_success(&self, operation: Operation) {
        self.calculations_total
            .with_label_values(&[operation.name(), "success"])
            .inc();
    }

    /// Record a failed calculation
    pub fn record_failure(&self, operation: Option<Operation>, kind: ErrorKind) {
        let operation = operation.map_or("unknown", |op| op.name());
        self.calculations_total
            .with_label_values(&[operation, "error"])
            .inc();
        self.failures_total.with_label_values(&[kind.as_str()]).inc();
    }

    /// Record a history clear
    pub fn record_clear(&self) {
        self.history_clears.inc();
        self.history_entries.set(0);
    }

    /// Update retained entry count
    pub fn update_history_size(&self, entries: usize) {
        self.history_entries.set(entries as i64);
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
