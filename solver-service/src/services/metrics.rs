//! Metrics collection and Prometheus export.
//!
//! Installs the Prometheus recorder behind the `metrics` facade and renders the
//! /metrics payload.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Call once at startup, before any metrics are recorded. Later calls are no-ops.
pub fn init_metrics() -> Result<(), AppError> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!(
            "Failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    let _ = METRICS_HANDLE.set(handle);
    tracing::info!("Prometheus metrics initialized");
    Ok(())
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}
