//! Query tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect results.

use crate::{obs::sink::QueryOp, query::ValidationError};

///
/// QueryTraceSink
///

pub trait QueryTraceSink: Send + Sync {
    fn on_event(&self, event: QueryTraceEvent);
}

///
/// QueryTraceEvent
///

#[derive(Clone, Debug, PartialEq)]
pub enum QueryTraceEvent {
    Start {
        op: QueryOp,
        catalog_len: u64,
    },
    Finish {
        op: QueryOp,
        rows_matched: u64,
    },
    Rejected {
        op: QueryOp,
        error: ValidationError,
    },
}

///
/// TraceScope
///

pub(crate) struct TraceScope {
    sink: &'static dyn QueryTraceSink,
    op: QueryOp,
}

impl TraceScope {
    fn new(sink: &'static dyn QueryTraceSink, op: QueryOp, catalog_len: u64) -> Self {
        sink.on_event(QueryTraceEvent::Start { op, catalog_len });

        Self { sink, op }
    }

    pub(crate) fn finish(self, rows_matched: u64) {
        self.sink.on_event(QueryTraceEvent::Finish {
            op: self.op,
            rows_matched,
        });
    }

    pub(crate) fn reject(self, error: &ValidationError) {
        self.sink.on_event(QueryTraceEvent::Rejected {
            op: self.op,
            error: error.clone(),
        });
    }
}

pub(crate) fn start_trace(
    sink: Option<&'static dyn QueryTraceSink>,
    op: QueryOp,
    catalog_len: usize,
) -> Option<TraceScope> {
    let sink = sink?;

    Some(TraceScope::new(
        sink,
        op,
        u64::try_from(catalog_len).unwrap_or(u64::MAX),
    ))
}
