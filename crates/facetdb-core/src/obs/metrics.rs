//! Process-local counter state behind the metrics sink boundary.

use serde::Serialize;
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<CounterState> = RefCell::new(CounterState::default());
}

///
/// CounterState
///
/// Cumulative pipeline counters for one thread of execution.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CounterState {
    pub execute_calls: u64,
    pub execute_failures: u64,
    pub rows_scanned: u64,
    pub unique_values: u64,
    pub pages_emitted: u64,
    pub values_returned: u64,
}

pub(crate) fn with_state<T>(f: impl FnOnce(&CounterState) -> T) -> T {
    STATE.with(|cell| f(&cell.borrow()))
}

pub(crate) fn with_state_mut<T>(f: impl FnOnce(&mut CounterState) -> T) -> T {
    STATE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Snapshot the current counters for endpoint/test plumbing.
#[must_use]
pub fn metrics_report() -> CounterState {
    with_state(Clone::clone)
}

/// Reset all counters.
pub fn metrics_reset_all() {
    with_state_mut(|state| *state = CounterState::default());
}
