//! Prometheus counters for routing and RPC traffic.

use crate::TelemetryError;
use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

lazy_static! {
    /// Global registry for all DAG edge metrics
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // ROUTING
    // =========================================================================

    /// Messages delivered to a route, by dialect
    pub static ref MESSAGES_DISPATCHED: CounterVec = CounterVec::new(
        Opts::new("dag_messages_dispatched_total", "Messages delivered to a route"),
        &["dialect"]
    ).expect("metric creation failed");

    /// Inbound envelopes that failed wire-to-domain conversion
    pub static ref CONVERSION_ERRORS: Counter = Counter::new(
        "dag_conversion_errors_total",
        "Inbound envelopes rejected by conversion"
    ).expect("metric creation failed");

    /// Inbound messages with no registered route
    pub static ref UNKNOWN_COMMANDS: Counter = Counter::new(
        "dag_unknown_commands_total",
        "Inbound messages with no registered route"
    ).expect("metric creation failed");

    // =========================================================================
    // RPC CLIENT
    // =========================================================================

    /// Responses discarded because they answered an earlier request
    pub static ref STALE_RESPONSES: Counter = Counter::new(
        "dag_rpc_stale_responses_total",
        "Responses discarded as belonging to an earlier request"
    ).expect("metric creation failed");

    /// RPC calls by outcome (ok, rpc_error, timeout, closed, conversion)
    pub static ref RPC_CALLS: CounterVec = CounterVec::new(
        Opts::new("dag_rpc_calls_total", "RPC calls by outcome"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Notifications handed to subscriber callbacks
    pub static ref NOTIFICATIONS_DELIVERED: Counter = Counter::new(
        "dag_rpc_notifications_delivered_total",
        "Notifications handed to subscriber callbacks"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Counters update whether or not they are registered; registration only
/// makes them visible to [`gather_metrics`].
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Routing
        Box::new(MESSAGES_DISPATCHED.clone()),
        Box::new(CONVERSION_ERRORS.clone()),
        Box::new(UNKNOWN_COMMANDS.clone()),
        // RPC client
        Box::new(STALE_RESPONSES.clone()),
        Box::new(RPC_CALLS.clone()),
        Box::new(NOTIFICATIONS_DELIVERED.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(())
}

/// Encode all registered metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_gather() {
        // Registration is process-global; tolerate an earlier call.
        let _ = register_metrics();
        UNKNOWN_COMMANDS.inc();
        MESSAGES_DISPATCHED.with_label_values(&["p2p"]).inc();

        let text = gather_metrics().unwrap();
        assert!(text.contains("dag_unknown_commands_total"));
        assert!(text.contains("dag_messages_dispatched_total{dialect=\"p2p\"}"));
    }

    #[test]
    fn test_double_registration_fails() {
        let _ = register_metrics();
        assert!(matches!(
            register_metrics(),
            Err(TelemetryError::MetricsInit(_))
        ));
    }
}
