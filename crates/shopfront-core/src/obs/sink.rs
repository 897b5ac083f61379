//! Metrics sink boundary.
//!
//! Engine logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics;
use derive_more::Display;
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// QueryOp
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOp {
    #[display("apply")]
    Apply,
    #[display("filter_by_text")]
    TextFilter,
    #[display("filter_by_price")]
    PriceFilter,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    QueryStart {
        op: QueryOp,
    },
    QueryFinish {
        op: QueryOp,
        rows_scanned: u64,
        rows_matched: u64,
    },
    ValidationFailed {
        op: QueryOp,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default per-thread sink that writes into the counters in `obs::metrics`.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::QueryStart { op } => {
                metrics::with_state_mut(|m| {
                    let calls = m.ops.calls_mut(op);
                    *calls = calls.saturating_add(1);
                });
            }

            MetricsEvent::QueryFinish {
                op: _,
                rows_scanned,
                rows_matched,
            } => {
                metrics::with_state_mut(|m| {
                    m.ops.rows_scanned = m.ops.rows_scanned.saturating_add(rows_scanned);
                    m.ops.rows_matched = m.ops.rows_matched.saturating_add(rows_matched);
                    if rows_matched == 0 {
                        m.ops.empty_views = m.ops.empty_views.saturating_add(1);
                    }
                });
            }

            MetricsEvent::ValidationFailed { op: _ } => {
                metrics::with_state_mut(|m| {
                    m.ops.validation_failures = m.ops.validation_failures.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let installed = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match installed {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the current thread's counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

/// Span
/// RAII guard that emits start/finish metrics events for one engine call.
/// Ensures finish accounting happens even on unwind.

pub(crate) struct Span {
    op: QueryOp,
    scanned: u64,
    matched: u64,
    finished: bool,
}

impl Span {
    #[must_use]
    pub(crate) fn new(op: QueryOp) -> Self {
        record(MetricsEvent::QueryStart { op });

        Self {
            op,
            scanned: 0,
            matched: 0,
            finished: false,
        }
    }

    pub(crate) const fn set_rows(&mut self, scanned: u64, matched: u64) {
        self.scanned = scanned;
        self.matched = matched;
    }

    /// Close the span as rejected; no finish event is emitted.
    pub(crate) fn reject(mut self) {
        record(MetricsEvent::ValidationFailed { op: self.op });
        self.finished = true;
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        if !self.finished {
            record(MetricsEvent::QueryFinish {
                op: self.op,
                rows_scanned: self.scanned,
                rows_matched: self.matched,
            });
            self.finished = true;
        }
    }
}
