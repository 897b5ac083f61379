use crate::obs::sink::QueryOp;
use serde::Serialize;
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for engine operations.
///

#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Engine entrypoints
    pub apply_calls: u64,
    pub text_filter_calls: u64,
    pub price_filter_calls: u64,

    // Rows
    pub rows_scanned: u64,
    pub rows_matched: u64,

    // Outcomes
    pub empty_views: u64,
    pub validation_failures: u64,
}

impl EventOps {
    pub(crate) const fn calls_mut(&mut self, op: QueryOp) -> &mut u64 {
        match op {
            QueryOp::Apply => &mut self.apply_calls,
            QueryOp::TextFilter => &mut self.text_filter_calls,
            QueryOp::PriceFilter => &mut self.price_filter_calls,
        }
    }
}

///
/// EventReport
/// Point-in-time snapshot handed to callers.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport { ops: m.ops.clone() })
}
