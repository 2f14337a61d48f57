//! # DAG Telemetry
//!
//! Logging and metrics shared by the wire router and the RPC client.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dag_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DAG_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `DAG_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `DAG_CONSOLE_OUTPUT` | `true` | Write logs to stdout at all |
//! | `DAG_SERVICE_NAME` | `dag-node` | Service name attached to startup logs |

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, register_metrics, CONVERSION_ERRORS, MESSAGES_DISPATCHED,
    NOTIFICATIONS_DELIVERED, RPC_CALLS, STALE_RESPONSES, UNKNOWN_COMMANDS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Register the counters, then install the global subscriber.
///
/// Fails if a subscriber is already installed or the counters were
/// registered before.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
