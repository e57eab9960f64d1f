//! Gradebook Observability
//!
//! - Structured logging through `tracing` with console, rolling-file and JSON
//!   outputs ([`logging`])
//! - Per-request logging middleware with request ids ([`logging::logging_middleware`])
//! - Prometheus metrics and business counters ([`metrics`])
//!
//! # Examples
//!
//! ```no_run
//! use gradebook_observability::{LoggingConfig, init_tracing};
//!
//! init_tracing(&LoggingConfig::from_env()).expect("tracing");
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{LoggingConfig, init_console_logging, init_tracing, logging_middleware};
pub use metrics::{
    PrometheusHandle, init_metrics, is_metrics_enabled, metrics_middleware, track_login,
    track_mark_created, track_teacher_registered,
};
