//! Prometheus metrics.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

use crate::{Result, ServerError};

lazy_static! {
    pub static ref WEBHOOK_EVENTS_RECEIVED: IntCounter =
        IntCounter::new("webhook_events_received", "Webhook events received").unwrap();
    pub static ref WEBHOOK_EVENTS_REJECTED: IntCounter =
        IntCounter::new("webhook_events_rejected", "Webhook events rejected").unwrap();
}

pub(crate) fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsError { source: e })?;

    setup_process_metrics(&prometheus)?;

    for counter in [&*WEBHOOK_EVENTS_RECEIVED, &*WEBHOOK_EVENTS_REJECTED] {
        prometheus
            .registry
            .register(Box::new(counter.clone()))
            .map_err(|e| ServerError::MetricsError { source: e.into() })?;
    }

    Ok(prometheus)
}

#[cfg(unix)]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .map_err(|e| ServerError::MetricsError { source: e.into() })
}

#[cfg(not(unix))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    tracing::warn!("Process metrics are only supported on Unix.");
    Ok(())
}
