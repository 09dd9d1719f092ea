//! Prometheus metrics recording
//!
//! The recorder is process-global. Handlers record through the `metrics`
//! macros and `/metrics` renders whatever the installed recorder holds.

use anyhow::Result;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const CALCULATIONS_TOTAL: &str = "wizard_calculations_total";
pub const VALIDATION_FAILURES_TOTAL: &str = "wizard_validation_failures_total";
pub const TARGET_DATE_OPTIONS: &str = "wizard_target_date_options";

/// Install the global Prometheus recorder
///
/// Fails if a recorder is already installed in this process.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

/// Count a completed wizard calculation
pub fn record_calculation(operation: &'static str) {
    counter!(CALCULATIONS_TOTAL, "operation" => operation).increment(1);
}

/// Count a request rejected before reaching the engine
pub fn record_validation_failure(operation: &'static str) {
    counter!(VALIDATION_FAILURES_TOTAL, "operation" => operation).increment(1);
}

/// Record how many rates survived the target-date filter
pub fn record_target_date_options(count: usize) {
    histogram!(TARGET_DATE_OPTIONS).record(count as f64);
}
