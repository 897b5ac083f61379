//! Observability: per-thread query counters, the metrics sink boundary, and
//! caller-injected query tracing.
//!
//! Nothing in here may change which products a query selects.

pub(crate) mod metrics;
pub(crate) mod sink;
pub mod trace;


// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{MetricsEvent, MetricsSink, QueryOp, metrics_report, metrics_reset_all, with_metrics_sink};
pub use trace::{QueryTraceEvent, QueryTraceSink};
